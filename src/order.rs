//! OrderByClause：渲染 ` ORDER BY alias.column [DESC]`。

use crate::alias::table_alias;
use crate::clause::{Clause, is_blank, require_table};
use crate::error::BuildResult;
use std::fmt;

/// 排序方向；只有两种取值，渲染时穷尽匹配。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        };
        f.write_str(s)
    }
}

/// 单列排序；后一次设置覆盖前一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub column: String,
    pub order: Order,
}

impl Ordering {
    pub fn new(column: impl Into<String>, order: Order) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrderByClause<'a> {
    table: &'a str,
    ordering: Option<&'a Ordering>,
}

impl<'a> OrderByClause<'a> {
    pub fn new(table: &'a str, ordering: Option<&'a Ordering>) -> Self {
        Self { table, ordering }
    }
}

impl Clause for OrderByClause<'_> {
    fn build(&self) -> BuildResult<String> {
        let alias = table_alias(require_table(self.table)?);

        let Some(ordering) = self.ordering else {
            return Ok(String::new());
        };
        if is_blank(&ordering.column) {
            return Ok(String::new());
        }

        let sql = match ordering.order {
            Order::Ascending => format!(" ORDER BY {alias}.{}", ordering.column),
            Order::Descending => format!(" ORDER BY {alias}.{} DESC", ordering.column),
        };
        Ok(sql)
    }
}
