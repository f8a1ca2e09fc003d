// ==========================================
// Excel 商品上传校验 - 核心库
// ==========================================
// 职责: 商品需要 Excel 的解析、逐行校验、重复检测
// 规则: 全有或全无，任一行错误则整份文件拒绝
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - Excel 解析与校验管道
pub mod importer;

// 配置层 - 上传目录
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 上传处理
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{CellValue, Product, RawRow, RowError, ValidationResult};

pub use importer::{
    ExcelValidationService, ImportError, ProductImporter, SheetData, ValidationPipeline,
    Worksheet,
};

pub use config::UploadConfig;

pub use api::{ApiError, UploadApi, UploadResponse, UploadedFile};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Excel 商品上传校验";
