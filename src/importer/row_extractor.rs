// ==========================================
// Excel 商品上传校验 - 行提取器
// ==========================================
// 阶段: Extract
// 职责: 工作表 → RawRow 序列（第 2 行起，至最后一行）
// 规则: 第 1 行为表头，永不解析；首列为空的行视为空行直接跳过
// ==========================================

use crate::domain::product::RawRow;
use crate::importer::worksheet::Worksheet;

/// 第一条数据行的行号
pub const FIRST_DATA_ROW: usize = 2;

// 列号（1 起）
const COL_CODE: usize = 1;
const COL_NAME: usize = 2;
const COL_QUANTITY: usize = 3;
const COL_VERSION: usize = 4;

pub struct RowExtractor;

impl RowExtractor {
    /// 提取数据行（按行号升序）
    pub fn extract<W: Worksheet>(&self, sheet: &W) -> Vec<RawRow> {
        (FIRST_DATA_ROW..=sheet.row_count())
            .filter_map(|row_number| Self::read_row(sheet, row_number))
            .collect()
    }

    fn read_row<W: Worksheet>(sheet: &W, row_number: usize) -> Option<RawRow> {
        let code = sheet.cell(row_number, COL_CODE).unwrap_or_default();

        // 空行哨兵（不是校验错误）
        if code.is_blank() {
            return None;
        }

        Some(RawRow {
            row_number,
            code,
            name: sheet.cell(row_number, COL_NAME).unwrap_or_default(),
            quantity: sheet.cell(row_number, COL_QUANTITY).unwrap_or_default(),
            version: sheet.cell(row_number, COL_VERSION).unwrap_or_default(),
        })
    }
}
