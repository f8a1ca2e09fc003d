// ==========================================
// Excel 商品上传校验 - UploadApi 集成测试
// ==========================================
// 覆盖: 文件检查、扩展名检查、校验失败、成功保存、文件读写失败
// ==========================================


use async_trait::async_trait;
use excel_upload::api::{UploadApi, UploadBody, UploadedFile};
use excel_upload::{Product, ProductImporter, UploadConfig, ValidationResult};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use test_helpers::*;

// ==========================================
// MockImporter - 测试用校验器
// ==========================================
#[derive(Clone)]
struct MockImporter {
    result: ValidationResult,
    calls: Arc<AtomicUsize>,
    seen_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockImporter {
    fn returning(result: ValidationResult) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
            seen_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ProductImporter for MockImporter {
    async fn validate_excel_file(&self, file_path: &Path) -> ValidationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // 校验时临时文件必须存在
        assert!(file_path.exists());
        self.seen_paths.lock().unwrap().push(file_path.to_path_buf());
        self.result.clone()
    }

    async fn validate_excel_bytes(&self, _bytes: Vec<u8>) -> ValidationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn sample_product() -> Product {
    Product {
        product_code: "CODE1".to_string(),
        product_name: "商品1".to_string(),
        demand_quantity: 10,
        version: "v1".to_string(),
    }
}

fn error_body(message: &str) -> UploadBody {
    UploadBody::Error {
        error: message.to_string(),
    }
}

// ==========================================
// 请求检查
// ==========================================

#[tokio::test]
async fn test_no_file_returns_400() {
    let (_root, config) = create_upload_root().unwrap();
    let mock = MockImporter::returning(ValidationResult::Valid { data: vec![] });
    let api = UploadApi::new(mock.clone(), config);

    let response = api.upload(None).await;

    assert_eq!(response.status, 400);
    assert_eq!(response.body, error_body("ファイルがアップロードされていません"));
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_file_name_treated_as_missing() {
    let (_root, config) = create_upload_root().unwrap();
    let api = UploadApi::new(
        MockImporter::returning(ValidationResult::Valid { data: vec![] }),
        config,
    );

    let response = api.upload(Some(UploadedFile::new("", b"x".to_vec()))).await;

    assert_eq!(response.status, 400);
    assert_eq!(response.body, error_body("ファイルがアップロードされていません"));
}

#[tokio::test]
async fn test_invalid_extension_returns_400_without_validation() {
    let (root, config) = create_upload_root().unwrap();
    let mock = MockImporter::returning(ValidationResult::Valid { data: vec![] });
    let api = UploadApi::new(mock.clone(), config);

    for name in ["test.csv", "test.xls", "test.XLSX"] {
        let response = api
            .upload(Some(UploadedFile::new(name, b"test content".to_vec())))
            .await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body, error_body("有効なExcelファイル(.xlsx)ではありません"));
    }

    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
    assert_eq!(count_files(&root.path().join("tmp")), 0);
}

// ==========================================
// 校验结果
// ==========================================

#[tokio::test]
async fn test_validation_errors_joined_with_newline() {
    let (root, config) = create_upload_root().unwrap();
    let mock = MockImporter::returning(ValidationResult::Invalid {
        errors: vec![
            "データが不正です".to_string(),
            "商品コードが重複しています".to_string(),
        ],
    });
    let api = UploadApi::new(mock.clone(), config);

    let response = api
        .upload(Some(UploadedFile::new("test.xlsx", b"test content".to_vec())))
        .await;

    assert_eq!(response.status, 400);
    assert_eq!(
        response.body,
        error_body("データが不正です\n商品コードが重複しています")
    );
    // 临时文件已删除，且未保存到 uploads
    assert_eq!(count_files(&root.path().join("tmp")), 0);
    assert_eq!(count_files(&root.path().join("uploads")), 0);
}

#[tokio::test]
async fn test_success_returns_200_and_saves_file() {
    let (root, config) = create_upload_root().unwrap();
    let mock = MockImporter::returning(ValidationResult::Valid {
        data: vec![sample_product()],
    });
    let api = UploadApi::new(mock.clone(), config);

    let response = api
        .upload(Some(UploadedFile::new("test.xlsx", b"test content".to_vec())))
        .await;

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(
        response.body,
        UploadBody::Success {
            success: true,
            data: vec![sample_product()],
        }
    );

    let saved = root.path().join("uploads").join("test.xlsx");
    assert_eq!(std::fs::read(saved).unwrap(), b"test content");
    assert_eq!(count_files(&root.path().join("tmp")), 0);

    // 临时文件位于 tmp 目录下，且带唯一前缀
    let seen = mock.seen_paths.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with(root.path().join("tmp")));
    assert_ne!(seen[0].file_name().unwrap(), "test.xlsx");
}

#[tokio::test]
async fn test_client_directory_components_are_stripped() {
    let (root, config) = create_upload_root().unwrap();
    let api = UploadApi::new(
        MockImporter::returning(ValidationResult::Valid { data: vec![] }),
        config,
    );

    let response = api
        .upload(Some(UploadedFile::new("../escape.xlsx", b"x".to_vec())))
        .await;

    assert_eq!(response.status, 200);
    assert!(root.path().join("uploads").join("escape.xlsx").exists());
    assert!(!root.path().join("escape.xlsx").exists());
}

// ==========================================
// 文件读写失败
// ==========================================

#[tokio::test]
async fn test_io_failure_returns_500() {
    let root = TempDir::new().unwrap();
    // tmp 目录位置被普通文件占用，写临时文件失败
    let blocker = root.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let config = UploadConfig {
        upload_dir: root.path().join("uploads"),
        tmp_dir: blocker.join("tmp"),
    };
    let mock = MockImporter::returning(ValidationResult::Valid { data: vec![] });
    let api = UploadApi::new(mock.clone(), config);

    let response = api
        .upload(Some(UploadedFile::new("test.xlsx", b"test content".to_vec())))
        .await;

    assert_eq!(response.status, 500);
    assert_eq!(response.body, error_body("ファイルのアップロードに失敗しました"));
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}

// ==========================================
// 端到端（真实 Excel 校验服务）
// ==========================================

#[tokio::test]
async fn test_end_to_end_with_real_workbook() {
    let (root, config) = create_upload_root().unwrap();
    let api = UploadApi::with_config(config);

    let ok = build_product_xlsx(&[product_row("CODE1", "商品1", 10.0, "v1")]).unwrap();
    let response = api.upload(Some(UploadedFile::new("products.xlsx", ok))).await;

    assert_eq!(response.status, 200);
    let json: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "success": true,
            "data": [{
                "productCode": "CODE1",
                "productName": "商品1",
                "demandQuantity": 10,
                "version": "v1"
            }]
        })
    );
    assert!(root.path().join("uploads").join("products.xlsx").exists());

    let bad = build_product_xlsx(&[
        product_row("CODE1", "商品1", 10.0, "v1"),
        product_row("CODE2", "", 0.0, "v1"),
        product_row("CODE1", "商品3", 1.0, "v1"),
    ])
    .unwrap();
    let response = api.upload(Some(UploadedFile::new("bad.xlsx", bad))).await;

    assert_eq!(response.status, 400);
    assert_eq!(
        response.body,
        error_body(
            "3行目: 商品名は必須です, 需要数は1以上の整数である必要があります\n\
             4行目: 商品コード「CODE1」が重複しています"
        )
    );
    assert!(!root.path().join("uploads").join("bad.xlsx").exists());

    let corrupt = api
        .upload(Some(UploadedFile::new("corrupt.xlsx", b"not a workbook".to_vec())))
        .await;
    assert_eq!(corrupt.status, 400);
    assert_eq!(corrupt.body, error_body("Excelファイルの読み込みに失敗しました"));
    assert_eq!(count_files(&root.path().join("tmp")), 0);
}
