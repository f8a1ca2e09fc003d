// ==========================================
// Excel 商品上传校验 - 领域模型层
// ==========================================
// 职责: 定义领域实体与单元格类型
// 红线: 不含文件读取逻辑，不含校验流程
// ==========================================

pub mod product;
pub mod types;

// 重导出核心类型
pub use product::{Product, RawRow, RowError, ValidationResult};
pub use types::CellValue;
