// ==========================================
// Excel 商品上传校验 - 商品领域模型
// ==========================================
// 职责: 定义原始行、商品记录、行错误、校验结果
// 红线: Product 只能由字段校验器构造，四个字段全部通过才存在
// ==========================================

use crate::domain::types::CellValue;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

// ==========================================
// RawRow - 原始行（未校验）
// ==========================================
// 用途: 行提取器输出，字段校验器输入
// 生命周期: 仅存在于单次校验内
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub row_number: usize,   // 工作表行号（1 起，含表头）
    pub code: CellValue,     // 第 1 列: 商品コード
    pub name: CellValue,     // 第 2 列: 商品名
    pub quantity: CellValue, // 第 3 列: 需要数
    pub version: CellValue,  // 第 4 列: バージョン
}

// ==========================================
// Product - 已校验商品记录
// ==========================================
// 对外 JSON 字段: productCode / productName / demandQuantity / version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_code: String, // 非空，文件内唯一（区分大小写）
    pub product_name: String, // 非空
    pub demand_quantity: i64, // 正整数
    pub version: String,      // 非空
}

// ==========================================
// RowError - 行级错误
// ==========================================
// 同一行可对应多条（字段错误 + 重复错误）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row_number: usize,
    pub message: String,
}

impl RowError {
    pub fn new(row_number: usize, message: impl Into<String>) -> Self {
        Self {
            row_number,
            message: message.into(),
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}行目: {}", self.row_number, self.message)
    }
}

impl std::error::Error for RowError {}

// ==========================================
// ValidationResult - 校验终态
// ==========================================
// 成功与失败互斥，不存在部分成功
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid { data: Vec<Product> },
    Invalid { errors: Vec<String> },
}

impl ValidationResult {
    /// 单条结构性错误（读取失败 / 无工作表）
    pub fn failure(message: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            errors: vec![message.into()],
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    pub fn data(&self) -> Option<&[Product]> {
        match self {
            ValidationResult::Valid { data } => Some(data),
            ValidationResult::Invalid { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&[String]> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid { errors } => Some(errors),
        }
    }
}

// 序列化为 {isValid, data} / {isValid, errors}
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            ValidationResult::Valid { data } => {
                state.serialize_field("isValid", &true)?;
                state.serialize_field("data", data)?;
            }
            ValidationResult::Invalid { errors } => {
                state.serialize_field("isValid", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}
