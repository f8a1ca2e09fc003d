// ==========================================
// Excel 商品上传校验 - 配置层
// ==========================================
// 职责: 上传目录配置
// ==========================================

pub mod upload_config;

pub use upload_config::{default_upload_root, resolve_upload_root, UploadConfig, UPLOAD_ROOT_ENV};
