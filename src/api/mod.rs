// ==========================================
// Excel 商品上传校验 - API 层
// ==========================================
// 职责: 上传处理，供传输层（HTTP/CLI）调用
// ==========================================

pub mod error;
pub mod upload_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use upload_api::{UploadApi, UploadBody, UploadResponse, UploadedFile};
