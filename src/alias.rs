//! 表别名推导：表名首字符的小写形式，JOIN 表额外追加全局序号。

/// 返回 `table` 的别名：空串或全空白时返回空串，否则为首字符的小写形式。
///
/// 别名本身不保证唯一，多表场景下的唯一性由 [`join_alias`] 的序号后缀保证。
pub fn table_alias(table: &str) -> String {
    if table.trim().is_empty() {
        return String::new();
    }

    table
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

/// JOIN 表的别名：`table_alias(table)` 后接从 0 开始的 JOIN 序号。
pub fn join_alias(table: &str, index: usize) -> String {
    format!("{}{index}", table_alias(table))
}
