// ==========================================
// Excel 商品上传校验 - 单元格值类型
// ==========================================
// 职责: 表格单元格的不透明标量 + 字符串/数值强制转换
// 规则: 转换只在校验前做一次，不做 TRIM（数值转换除外）
// ==========================================

use std::fmt;

// ==========================================
// CellValue - 单元格值
// ==========================================
// 日期单元格以序列号（Number）承载
// ISO 日期/时长字符串、错误值（#N/A 等）以 Text 承载
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 空行哨兵: 空单元格或空字符串
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// 强制转换为字符串（缺失 → ""）
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            other => other.to_string(),
        }
    }

    /// 强制转换为数值（非数值/缺失 → 0）
    ///
    /// # 规则
    /// - Text: TRIM 后按十进制浮点解析，空串或解析失败 → 0
    /// - Bool: true → 1, false → 0
    /// - NaN 一律归零
    pub fn to_number(&self) -> f64 {
        let value = match self {
            CellValue::Empty => 0.0,
            CellValue::Number(n) => *n,
            CellValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(0.0)
                }
            }
        };

        if value.is_nan() {
            0.0
        } else {
            value
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// 数值 → 最短往返十进制文本
///
/// # 规则
/// - -0 按 0 输出
/// - |n| >= 1e21 或 |n| < 1e-6 时用指数形式，正指数带 "+"（1e+21, 1.5e-7）
/// - 无穷输出 Infinity / -Infinity
fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    n.to_string()
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::from("").is_blank());
        assert!(!CellValue::from(" ").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(CellValue::Empty.to_text(), "");
        assert_eq!(CellValue::from("CODE1").to_text(), "CODE1");
        assert_eq!(CellValue::Number(10.0).to_text(), "10");
        assert_eq!(CellValue::Number(3.5).to_text(), "3.5");
        assert_eq!(CellValue::Number(-0.0).to_text(), "0");
        assert_eq!(CellValue::Bool(true).to_text(), "true");
    }

    #[test]
    fn test_number_text_extremes() {
        assert_eq!(CellValue::Number(123.0).to_text(), "123");
        assert_eq!(CellValue::Number(0.000001).to_text(), "0.000001");
        assert_eq!(CellValue::Number(1e20).to_text(), "100000000000000000000");
        assert_eq!(CellValue::Number(1e21).to_text(), "1e+21");
        assert_eq!(CellValue::Number(-2.5e22).to_text(), "-2.5e+22");
        assert_eq!(CellValue::Number(1e-7).to_text(), "1e-7");
        assert_eq!(CellValue::Number(1.5e-7).to_text(), "1.5e-7");
        assert_eq!(CellValue::Number(f64::INFINITY).to_text(), "Infinity");
        assert_eq!(CellValue::Number(f64::NEG_INFINITY).to_text(), "-Infinity");
        assert_eq!(CellValue::Number(f64::NAN).to_text(), "NaN");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(CellValue::Empty.to_number(), 0.0);
        assert_eq!(CellValue::from(" 12 ").to_number(), 12.0);
        assert_eq!(CellValue::from("").to_number(), 0.0);
        assert_eq!(CellValue::from("abc").to_number(), 0.0);
        assert_eq!(CellValue::from("NaN").to_number(), 0.0);
        assert_eq!(CellValue::Bool(true).to_number(), 1.0);
        assert_eq!(CellValue::Number(3.5).to_number(), 3.5);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(5i64)), CellValue::Number(5.0));
    }
}
