// ==========================================
// Excel 商品上传校验 - 商品导入 Trait
// ==========================================
// 职责: 定义上传层依赖的校验接口（不包含实现）
// 实现者: ExcelValidationService；测试中可替换为 Mock
// ==========================================

use crate::domain::product::ValidationResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// ProductImporter Trait
// ==========================================
#[async_trait]
pub trait ProductImporter: Send + Sync {
    /// 校验 Excel 文件
    ///
    /// # 参数
    /// - file_path: Excel 文件路径（.xlsx）
    ///
    /// # 返回
    /// - ValidationResult: 不返回 Err，读取失败也折叠为 Invalid
    async fn validate_excel_file(&self, file_path: &Path) -> ValidationResult;

    /// 校验内存中的 Excel 字节
    async fn validate_excel_bytes(&self, bytes: Vec<u8>) -> ValidationResult;
}
