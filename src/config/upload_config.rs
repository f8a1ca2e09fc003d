// ==========================================
// Excel 商品上传校验 - 上传目录配置
// ==========================================
// 职责: 上传根目录解析 + uploads/tmp 目录初始化
// 来源: 环境变量 EXCEL_UPLOAD_ROOT > 用户数据目录 > 当前目录
// ==========================================

use std::io;
use std::path::{Path, PathBuf};

/// 上传根目录环境变量
pub const UPLOAD_ROOT_ENV: &str = "EXCEL_UPLOAD_ROOT";

const UPLOAD_SUBDIR: &str = "uploads";
const TMP_SUBDIR: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// 校验通过后的文件保存目录
    pub upload_dir: PathBuf,
    /// 校验期间的临时文件目录
    pub tmp_dir: PathBuf,
}

impl UploadConfig {
    /// 以指定根目录构造（uploads/ + tmp/）
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            upload_dir: root.join(UPLOAD_SUBDIR),
            tmp_dir: root.join(TMP_SUBDIR),
        }
    }

    /// 从环境解析
    pub fn from_env() -> Self {
        Self::new(default_upload_root())
    }

    /// 确保 uploads/ 与 tmp/ 存在（递归创建）
    pub fn ensure_dirs(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)?;
        std::fs::create_dir_all(&self.tmp_dir)?;
        Ok(())
    }
}

/// 获取默认上传根目录
///
/// # 返回
/// - EXCEL_UPLOAD_ROOT（非空时）
/// - 开发环境: 用户数据目录/excel-upload-dev
/// - 生产环境: 用户数据目录/excel-upload
/// - 无用户数据目录: 当前目录
pub fn default_upload_root() -> PathBuf {
    resolve_upload_root(std::env::var(UPLOAD_ROOT_ENV).ok())
}

/// 按给定的环境变量值解析上传根目录
///
/// # 参数
/// - env_root: EXCEL_UPLOAD_ROOT 的值（None 表示未设置）
pub fn resolve_upload_root(env_root: Option<String>) -> PathBuf {
    if let Some(root) = env_root {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    let Some(data_dir) = dirs::data_dir() else {
        return PathBuf::from(".");
    };

    #[cfg(debug_assertions)]
    {
        data_dir.join("excel-upload-dev")
    }

    #[cfg(not(debug_assertions))]
    {
        data_dir.join("excel-upload")
    }
}
