// ==========================================
// Excel 商品上传校验 - 命令行入口
// ==========================================
// 用法: excel-upload <file.xlsx>...
// 输出: 每个文件一行 JSON 响应体（stdout）
// 退出码: 任一文件被拒绝则为 1
// ==========================================

use anyhow::{bail, Context, Result};
use excel_upload::{logging, UploadApi, UploadConfig, UploadedFile};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let files: Vec<String> = std::env::args().skip(1).collect();
    if files.is_empty() {
        bail!("用法: excel-upload <file.xlsx>...");
    }

    tracing::info!("{} v{}", excel_upload::APP_NAME, excel_upload::VERSION);

    let config = UploadConfig::from_env();
    config
        .ensure_dirs()
        .with_context(|| format!("无法创建上传目录: {}", config.upload_dir.display()))?;
    tracing::info!(upload_dir = %config.upload_dir.display(), "使用上传目录");

    let api = UploadApi::with_config(config);
    let mut rejected = 0usize;

    for file in &files {
        let path = Path::new(file);
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file.as_str())
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("无法读取文件: {}", path.display()))?;

        let response = api.upload(Some(UploadedFile::new(name, bytes))).await;
        println!("{}", response.to_json()?);

        if !response.is_success() {
            rejected += 1;
        }
    }

    if rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}
