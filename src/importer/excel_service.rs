// ==========================================
// Excel 商品上传校验 - Excel 校验服务
// ==========================================
// 职责: 文件读取（唯一挂起点）+ 调用校验管道
// 流程: 读文件 → 解析容器（阻塞线程池）→ 管道
// ==========================================

use crate::domain::product::ValidationResult;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{CalamineSheet, ExcelParser};
use crate::importer::pipeline::ValidationPipeline;
use crate::importer::product_importer_trait::ProductImporter;
use async_trait::async_trait;
use futures::future::join_all;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// 允许上传的扩展名（区分大小写）
pub const EXCEL_EXTENSION: &str = ".xlsx";

// ==========================================
// ExcelValidationService
// ==========================================
// 无共享可变状态，可并发调用
#[derive(Debug, Default, Clone, Copy)]
pub struct ExcelValidationService;

impl ExcelValidationService {
    pub fn new() -> Self {
        Self
    }

    /// 扩展名检查（字面后缀 ".xlsx"，区分大小写）
    pub fn is_valid_excel_file(filename: &str) -> bool {
        filename.ends_with(EXCEL_EXTENSION)
    }

    /// 并发校验多个文件
    ///
    /// # 说明
    /// - 每个文件独立校验，互不影响
    /// - 结果顺序与输入顺序一致
    pub async fn validate_batch<P: AsRef<Path>>(&self, file_paths: &[P]) -> Vec<ValidationResult> {
        info!(count = file_paths.len(), "开始批量校验");
        join_all(
            file_paths
                .iter()
                .map(|path| self.validate_excel_file(path.as_ref())),
        )
        .await
    }

    async fn load_file(&self, file_path: &Path) -> ImportResult<Vec<CalamineSheet>> {
        let bytes = tokio::fs::read(file_path).await?;
        self.load_bytes(bytes).await
    }

    async fn load_bytes(&self, bytes: Vec<u8>) -> ImportResult<Vec<CalamineSheet>> {
        debug!(size = bytes.len(), "解析 Excel 容器");
        tokio::task::spawn_blocking(move || ExcelParser.parse_bytes(bytes)).await?
    }

    fn finish(&self, loaded: ImportResult<Vec<CalamineSheet>>) -> ValidationResult {
        if let Err(e) = &loaded {
            warn!(error = %e.detail(), "Excel 文件读取失败");
        }

        let result = ValidationPipeline.run_loaded(loaded);
        match &result {
            ValidationResult::Valid { data } => info!(products = data.len(), "校验通过"),
            ValidationResult::Invalid { errors } => info!(errors = errors.len(), "校验未通过"),
        }
        result
    }
}

#[async_trait]
impl ProductImporter for ExcelValidationService {
    #[instrument(skip(self, file_path), fields(file_path = %file_path.display()))]
    async fn validate_excel_file(&self, file_path: &Path) -> ValidationResult {
        let loaded = self.load_file(file_path).await;
        self.finish(loaded)
    }

    #[instrument(skip(self, bytes))]
    async fn validate_excel_bytes(&self, bytes: Vec<u8>) -> ValidationResult {
        let loaded = self.load_bytes(bytes).await;
        self.finish(loaded)
    }
}
