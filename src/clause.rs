//! Clause：各子句 builder 的统一接口。

use crate::error::{BuildError, BuildResult};

/// 渲染一个 SQL 片段。
///
/// 非空片段自带前导空格（SELECT 子句除外），由 `FluentQuery` 按固定顺序直接拼接；
/// 可选子句在没有内容时返回空串。
pub trait Clause {
    fn build(&self) -> BuildResult<String>;
}

/// 校验表名非空（空白视为未设置）。
pub(crate) fn require_table(table: &str) -> BuildResult<&str> {
    if table.trim().is_empty() {
        return Err(BuildError::MissingArgument("table"));
    }
    Ok(table)
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
