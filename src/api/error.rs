// ==========================================
// Excel 商品上传校验 - API层错误类型
// ==========================================
// 职责: 上传层错误 + HTTP 状态码映射
// 规则: Display 即对外错误文案
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求错误（400）
    // ==========================================
    #[error("ファイルがアップロードされていません")]
    NoFile,

    #[error("有効なExcelファイル(.xlsx)ではありません")]
    InvalidExtension,

    /// 校验失败（各条错误以换行连接）
    #[error("{0}")]
    Validation(String),

    // ==========================================
    // 文件读写错误（500）
    // ==========================================
    #[error("ファイルのアップロードに失敗しました")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NoFile | ApiError::InvalidExtension | ApiError::Validation(_) => 400,
            ApiError::Io(_) => 500,
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
