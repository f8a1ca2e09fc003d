// ==========================================
// Excel 商品上传校验 - 重复检测器
// ==========================================
// 阶段: DetectDuplicates
// 职责: 检测同一文件内重复商品コード（区分大小写，完全一致）
// 规则: 首次出现不标记；第二次及以后每次各产生一条错误
// ==========================================

use crate::domain::product::{Product, RowError};
use std::collections::HashSet;

pub struct DuplicateDetector;

impl DuplicateDetector {
    /// 检测重复商品コード
    ///
    /// # 参数
    /// - records: (行号, 商品) 列表，按原始行顺序
    ///
    /// # 返回
    /// - Vec<RowError>: 重复错误列表（按发现顺序，不包括第一次出现）
    pub fn detect<'a, I>(&self, records: I) -> Vec<RowError>
    where
        I: IntoIterator<Item = (usize, &'a Product)>,
    {
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut duplicates = Vec::new();

        for (row_number, product) in records {
            if !seen.insert(product.product_code.as_str()) {
                duplicates.push(RowError::new(
                    row_number,
                    format!(
                        "商品コード「{}」が重複しています",
                        product.product_code
                    ),
                ));
            }
        }

        duplicates
    }
}
