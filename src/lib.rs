//! fluent-sql：链式拼接单条 SELECT 语句的轻量 SQL builder。
//!
//! 只负责渲染文本，不执行 SQL，也不处理连接与参数绑定。

pub mod alias;
pub mod clause;
pub mod error;
pub mod filter;
#[cfg(test)]
mod filter_tests;
pub mod join;
pub mod macros;
pub use crate::macros::*;
pub mod order;
pub mod projection;
#[cfg(test)]
mod projection_tests;
pub mod query;
pub mod source;
mod string_builder;
pub mod value;
pub mod valuer;

pub use crate::alias::{join_alias, table_alias};
pub use crate::clause::Clause;
pub use crate::error::{BuildError, BuildResult};
pub use crate::filter::{Filter, FilterValue, Filters, WhereClause};
pub use crate::join::{Join, JoinClause, JoinKind, indexed_joins, join_aliases};
pub use crate::order::{Order, OrderByClause, Ordering};
pub use crate::projection::{Projection, SelectClause};
pub use crate::query::FluentQuery;
pub use crate::source::FromClause;
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};

/// 推荐的便捷命名空间：允许 `use fluent_sql::sqlbuilder::{...}` 形式导入。
pub mod sqlbuilder {
    pub use crate::*;
}
