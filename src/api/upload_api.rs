// ==========================================
// Excel 商品上传校验 - 上传API
// ==========================================
// 职责: 与传输层无关的上传处理（原 POST /api/upload）
// 流程: 文件检查 → 扩展名检查 → 写临时文件 → 校验 → 删临时文件 → 保存到 uploads
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::UploadConfig;
use crate::domain::product::{Product, ValidationResult};
use crate::importer::{ExcelValidationService, ProductImporter};
use serde::Serialize;
use std::path::Path;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// 上传的文件
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 客户端文件名
    pub name: String,
    /// 文件内容
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// 响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UploadBody {
    /// {"success": true, "data": [...]}
    Success { success: bool, data: Vec<Product> },
    /// {"error": "..."}
    Error { error: String },
}

/// 上传API响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    /// HTTP 状态码
    pub status: u16,
    /// 响应体
    pub body: UploadBody,
}

impl UploadResponse {
    fn success(data: Vec<Product>) -> Self {
        Self {
            status: 200,
            body: UploadBody::Success {
                success: true,
                data,
            },
        }
    }

    fn from_error(err: &ApiError) -> Self {
        Self {
            status: err.status_code(),
            body: UploadBody::Error {
                error: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// 序列化响应体
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

/// 上传API
pub struct UploadApi<I = ExcelValidationService>
where
    I: ProductImporter,
{
    importer: I,
    config: UploadConfig,
}

impl UploadApi<ExcelValidationService> {
    /// 使用默认 Excel 校验服务
    pub fn with_config(config: UploadConfig) -> Self {
        Self::new(ExcelValidationService::new(), config)
    }
}

impl<I: ProductImporter> UploadApi<I> {
    /// 创建新的UploadApi实例
    pub fn new(importer: I, config: UploadConfig) -> Self {
        Self { importer, config }
    }

    /// 处理一次上传
    ///
    /// # 返回
    /// - 200: {"success": true, "data": [...]}
    /// - 400: 无文件 / 扩展名不符 / 校验失败
    /// - 500: 临时文件或保存文件读写失败
    #[instrument(skip(self, file), fields(file_name = tracing::field::Empty))]
    pub async fn upload(&self, file: Option<UploadedFile>) -> UploadResponse {
        if let Some(f) = &file {
            tracing::Span::current().record("file_name", f.name.as_str());
        }

        match self.handle(file).await {
            Ok(products) => {
                info!(products = products.len(), "上传成功");
                UploadResponse::success(products)
            }
            Err(e) => {
                match &e {
                    ApiError::Io(io) => error!(error = %io, "文件上传失败"),
                    other => warn!(error = %other, "上传被拒绝"),
                }
                UploadResponse::from_error(&e)
            }
        }
    }

    async fn handle(&self, file: Option<UploadedFile>) -> ApiResult<Vec<Product>> {
        let file = file.filter(|f| !f.name.is_empty()).ok_or(ApiError::NoFile)?;

        // 扩展名检查（不通过则不调用校验）
        if !ExcelValidationService::is_valid_excel_file(&file.name) {
            return Err(ApiError::InvalidExtension);
        }
        let file_name = base_file_name(&file.name).ok_or(ApiError::InvalidExtension)?;

        // 写临时文件（UUID 前缀，并发上传同名文件互不覆盖）
        tokio::fs::create_dir_all(&self.config.tmp_dir).await?;
        let tmp_path = self
            .config
            .tmp_dir
            .join(format!("{}_{}", Uuid::new_v4(), file_name));
        tokio::fs::write(&tmp_path, &file.bytes).await?;

        let result = self.importer.validate_excel_file(&tmp_path).await;

        tokio::fs::remove_file(&tmp_path).await?;

        let products = match result {
            ValidationResult::Valid { data } => data,
            ValidationResult::Invalid { errors } => {
                return Err(ApiError::Validation(errors.join("\n")));
            }
        };

        // 校验通过，保存到 uploads
        tokio::fs::create_dir_all(&self.config.upload_dir).await?;
        tokio::fs::write(self.config.upload_dir.join(file_name), &file.bytes).await?;

        Ok(products)
    }
}

/// 去掉客户端文件名中的目录部分
fn base_file_name(name: &str) -> Option<&str> {
    Path::new(name).file_name().and_then(|n| n.to_str())
}
