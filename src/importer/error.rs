// ==========================================
// Excel 商品上传校验 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 规则: LoadError / NoSheet 的 Display 即对外错误文案
// ==========================================

use thiserror::Error;

/// 读取失败文案
pub const LOAD_ERROR_MESSAGE: &str = "Excelファイルの読み込みに失敗しました";

/// 无工作表文案
pub const NO_SHEET_MESSAGE: &str = "シートが見つかりません";

/// 导入模块错误类型（结构性错误，单次请求致命）
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("Excelファイルの読み込みに失敗しました")]
    LoadError(String),

    #[error("シートが見つかりません")]
    NoSheet,

    #[error("Excelファイルの読み込みに失敗しました")]
    FileReadError(#[from] std::io::Error),

    // ===== 运行时错误 =====
    #[error("Excelファイルの読み込みに失敗しました")]
    TaskJoinError(#[from] tokio::task::JoinError),
}

impl ImportError {
    /// 内部原因（仅用于日志，不对外）
    pub fn detail(&self) -> String {
        match self {
            ImportError::LoadError(msg) => msg.clone(),
            ImportError::NoSheet => "workbook has no worksheet".to_string(),
            ImportError::FileReadError(err) => err.to_string(),
            ImportError::TaskJoinError(err) => err.to_string(),
        }
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::LoadError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_messages() {
        assert_eq!(
            ImportError::LoadError("zip error".to_string()).to_string(),
            LOAD_ERROR_MESSAGE
        );
        assert_eq!(ImportError::NoSheet.to_string(), NO_SHEET_MESSAGE);
    }

    #[test]
    fn test_io_error_maps_to_load_message() {
        let err: ImportError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.to_string(), LOAD_ERROR_MESSAGE);
        assert!(err.detail().contains("missing"));
    }
}
