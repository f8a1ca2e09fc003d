// ==========================================
// Excel 商品上传校验 - 导入层
// ==========================================
// 职责: Excel 读取、逐行校验、重复检测、结果汇总
// 流程: Load → LocateSheet → Extract → ValidateRows → DetectDuplicates → Aggregate
// ==========================================

// 模块声明
pub mod duplicate_detector;
pub mod error;
pub mod excel_service;
pub mod field_validator;
pub mod file_parser;
pub mod pipeline;
pub mod product_importer_trait;
pub mod row_extractor;
pub mod worksheet;

// 重导出核心类型
pub use duplicate_detector::DuplicateDetector;
pub use error::{ImportError, ImportResult, LOAD_ERROR_MESSAGE, NO_SHEET_MESSAGE};
pub use excel_service::ExcelValidationService;
pub use field_validator::FieldValidator;
pub use file_parser::{CalamineSheet, ExcelParser};
pub use pipeline::ValidationPipeline;
pub use row_extractor::RowExtractor;
pub use worksheet::{SheetData, Worksheet};

// 重导出 Trait 接口
pub use product_importer_trait::ProductImporter;
