// ==========================================
// Excel 商品上传校验 - 校验管道
// ==========================================
// 流程: LocateSheet → Extract → ValidateRows → DetectDuplicates → Aggregate
// 红线: 不抛出、不记录日志；所有失败统一折叠为 ValidationResult::Invalid
// 红线: 全有或全无，任一错误则整份文件拒绝
// ==========================================

use crate::domain::product::{Product, ValidationResult};
use crate::importer::duplicate_detector::DuplicateDetector;
use crate::importer::error::{ImportResult, NO_SHEET_MESSAGE};
use crate::importer::field_validator::FieldValidator;
use crate::importer::row_extractor::RowExtractor;
use crate::importer::worksheet::Worksheet;

pub struct ValidationPipeline;

impl ValidationPipeline {
    /// 处理 Load 阶段的结果
    ///
    /// Load 失败直接短路为单条错误
    pub fn run_loaded<W: Worksheet>(&self, loaded: ImportResult<Vec<W>>) -> ValidationResult {
        match loaded {
            Ok(worksheets) => self.run(&worksheets),
            Err(e) => ValidationResult::failure(e.to_string()),
        }
    }

    /// 校验工作表序列（仅使用第一个）
    pub fn run<W: Worksheet>(&self, worksheets: &[W]) -> ValidationResult {
        // === LocateSheet ===
        let Some(sheet) = worksheets.first() else {
            return ValidationResult::failure(NO_SHEET_MESSAGE);
        };

        // === Extract ===
        let raw_rows = RowExtractor.extract(sheet);

        // === ValidateRows ===
        let mut products: Vec<(usize, Product)> = Vec::with_capacity(raw_rows.len());
        let mut errors: Vec<String> = Vec::new();
        for row in &raw_rows {
            match FieldValidator.validate(row) {
                Ok(product) => products.push((row.row_number, product)),
                Err(e) => errors.push(e.to_string()),
            }
        }

        // === DetectDuplicates ===
        let duplicates =
            DuplicateDetector.detect(products.iter().map(|(row, product)| (*row, product)));
        errors.extend(duplicates.iter().map(ToString::to_string));

        // === Aggregate ===
        if !errors.is_empty() {
            return ValidationResult::Invalid { errors };
        }

        ValidationResult::Valid {
            data: products.into_iter().map(|(_, product)| product).collect(),
        }
    }
}
