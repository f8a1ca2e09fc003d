// ==========================================
// Excel 商品上传校验 - 工作表抽象
// ==========================================
// 职责: 定义最小读取能力（行数 + 单元格访问）
// 实现者: SheetData（内存网格）, CalamineSheet（calamine 适配）
// 约定: 行号/列号均为 1 起，第 1 行为表头
// ==========================================

use crate::domain::types::CellValue;

// ==========================================
// Worksheet Trait
// ==========================================
pub trait Worksheet {
    /// 工作表最后一行的行号（含表头；空表为 0）
    fn row_count(&self) -> usize;

    /// 读取单元格
    ///
    /// # 参数
    /// - row: 行号（1 起）
    /// - col: 列号（1 起）
    ///
    /// # 返回
    /// - None: 单元格不存在（越界或从未写入）
    fn cell(&self, row: usize, col: usize) -> Option<CellValue>;
}

impl<W: Worksheet + ?Sized> Worksheet for &W {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn cell(&self, row: usize, col: usize) -> Option<CellValue> {
        (**self).cell(row, col)
    }
}

// ==========================================
// SheetData - 内存工作表
// ==========================================
// 用途: 测试与非文件来源；rows[0] 对应第 1 行（表头）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetData {
    rows: Vec<Vec<CellValue>>,
}

impl SheetData {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// 以表头行 + 数据行构造
    pub fn with_header<H, R>(header: H, data_rows: Vec<R>) -> Self
    where
        H: IntoIterator,
        H::Item: Into<CellValue>,
        R: IntoIterator<Item = CellValue>,
    {
        let mut rows = vec![header.into_iter().map(Into::into).collect::<Vec<_>>()];
        rows.extend(data_rows.into_iter().map(|r| r.into_iter().collect()));
        Self { rows }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }
}

impl Worksheet for SheetData {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, col: usize) -> Option<CellValue> {
        if row == 0 || col == 0 {
            return None;
        }
        self.rows.get(row - 1)?.get(col - 1).cloned()
    }
}
