// ==========================================
// Excel 商品上传校验 - 文件解析器实现
// ==========================================
// 阶段: Load + LocateSheet
// 支持: Excel (.xlsx)
// 规则: 只取第一个工作表，不按名称匹配
// ==========================================

use crate::domain::types::CellValue;
use crate::importer::error::ImportResult;
use crate::importer::worksheet::Worksheet;
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;

// ==========================================
// CalamineSheet - calamine 工作表适配
// ==========================================
// Range 使用绝对坐标（0 起），此处换算为 1 起行列号
pub struct CalamineSheet {
    range: Range<Data>,
}

impl CalamineSheet {
    pub fn new(range: Range<Data>) -> Self {
        Self { range }
    }
}

impl Worksheet for CalamineSheet {
    fn row_count(&self) -> usize {
        self.range
            .end()
            .map(|(row, _)| row as usize + 1)
            .unwrap_or(0)
    }

    fn cell(&self, row: usize, col: usize) -> Option<CellValue> {
        if row == 0 || col == 0 {
            return None;
        }
        let abs_row = u32::try_from(row - 1).ok()?;
        let abs_col = u32::try_from(col - 1).ok()?;
        self.range.get_value((abs_row, abs_col)).map(data_to_cell)
    }
}

/// calamine 单元格 → CellValue
fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // 日期按 Excel 序列号
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// 解析 .xlsx 字节，返回工作表序列（0 或 1 个）
    ///
    /// # 返回
    /// - Ok(vec![]): 容器合法但无工作表
    /// - Ok(vec![sheet]): 第一个工作表
    /// - Err(LoadError): 容器损坏/不可读
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> ImportResult<Vec<CalamineSheet>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

        let sheet_names = workbook.sheet_names();
        let Some(first_sheet) = sheet_names.first() else {
            return Ok(Vec::new());
        };

        let range = workbook.worksheet_range(first_sheet)?;
        Ok(vec![CalamineSheet::new(range)])
    }
}
