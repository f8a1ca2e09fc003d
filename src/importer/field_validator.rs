// ==========================================
// Excel 商品上传校验 - 字段校验器
// ==========================================
// 阶段: ValidateRows
// 职责: RawRow → Product 或行级错误
// 规则: 先强制转换再校验；四个字段全部检查，任一失败整行拒绝
// ==========================================

use crate::domain::product::{Product, RawRow, RowError};

pub const CODE_REQUIRED: &str = "商品コードは必須です";
pub const NAME_REQUIRED: &str = "商品名は必須です";
pub const QUANTITY_INVALID: &str = "需要数は1以上の整数である必要があります";
pub const VERSION_REQUIRED: &str = "バージョンは必須です";

/// 同一行多条字段错误的分隔符
const MESSAGE_SEPARATOR: &str = ", ";

// ==========================================
// CoercedRow - 强制转换后的行
// ==========================================
#[derive(Debug)]
struct CoercedRow {
    product_code: String,
    product_name: String,
    demand_quantity: f64,
    version: String,
}

impl CoercedRow {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            product_code: row.code.to_text(),
            product_name: row.name.to_text(),
            demand_quantity: row.quantity.to_number(),
            version: row.version.to_text(),
        }
    }
}

// ==========================================
// 字段规则表（按列顺序求值）
// ==========================================
type FieldCheck = fn(&CoercedRow) -> bool;

const FIELD_RULES: &[(&str, FieldCheck, &str)] = &[
    ("productCode", has_code, CODE_REQUIRED),
    ("productName", has_name, NAME_REQUIRED),
    ("demandQuantity", has_valid_quantity, QUANTITY_INVALID),
    ("version", has_version, VERSION_REQUIRED),
];

fn has_code(row: &CoercedRow) -> bool {
    !row.product_code.is_empty()
}

fn has_name(row: &CoercedRow) -> bool {
    !row.product_name.is_empty()
}

fn has_valid_quantity(row: &CoercedRow) -> bool {
    is_positive_integer(row.demand_quantity)
}

fn has_version(row: &CoercedRow) -> bool {
    !row.version.is_empty()
}

/// 正整数判定（> 0 且无小数部分，且可由 i64 表示）
///
/// i64::MAX as f64 即 2^63，已超出 i64，故用严格小于
fn is_positive_integer(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value.fract() == 0.0 && value < i64::MAX as f64
}

pub struct FieldValidator;

impl FieldValidator {
    /// 校验单行
    ///
    /// # 返回
    /// - Ok(Product): 四个字段全部通过
    /// - Err(RowError): 失败字段文案以 ", " 连接，Display 为 "<行号>行目: <文案>"
    pub fn validate(&self, row: &RawRow) -> Result<Product, RowError> {
        let coerced = CoercedRow::from_raw(row);

        let failures: Vec<&str> = FIELD_RULES
            .iter()
            .filter(|(_, check, _)| !check(&coerced))
            .map(|(_, _, message)| *message)
            .collect();

        if !failures.is_empty() {
            return Err(RowError::new(
                row.row_number,
                failures.join(MESSAGE_SEPARATOR),
            ));
        }

        Ok(Product {
            product_code: coerced.product_code,
            product_name: coerced.product_name,
            demand_quantity: coerced.demand_quantity as i64,
            version: coerced.version,
        })
    }
}
