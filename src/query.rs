//! FluentQuery：链式记录查询形状，`build` 时按固定顺序拼接各子句。
//!
//! 每个 mutator 都消费 `self` 并返回新的值，调用本身只记录意图、永不失败；
//! 校验全部延迟到 `build`。`build` 只读取状态，同一个值可以反复渲染，
//! 也可以先 `clone` 再分叉出多条语句。

use crate::clause::{Clause, require_table};
use crate::error::BuildResult;
use crate::filter::{Filter, Filters, WhereClause};
use crate::join::{Join, JoinClause, JoinKind};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::order::{Order, OrderByClause, Ordering};
use crate::projection::{Projection, SelectClause};
use crate::source::FromClause;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use crate::valuer::SqlValuer;

#[derive(Debug, Clone, Default)]
#[must_use = "FluentQuery 的方法返回新的值，需要继续链式调用或 build"]
pub struct FluentQuery {
    table: String,
    projection: Projection,
    joins: Vec<Join>,
    filters: Filters,
    ordering: Option<Ordering>,
}

impl FluentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_all(mut self) -> Self {
        self.projection = Projection::All;
        self
    }

    pub fn select_count(mut self) -> Self {
        self.projection = Projection::Count;
        self
    }

    pub fn select_specific<T>(mut self, columns: T) -> Self
    where
        T: IntoStrings,
    {
        self.projection = Projection::Specific(collect_into_strings(columns));
        self
    }

    /// `expr` 原样写入 SELECT 列表（可以是子查询），之后接 `columns`；`columns` 为空时接 `alias.*`。
    pub fn select_custom<T>(mut self, expr: impl Into<String>, columns: T) -> Self
    where
        T: IntoStrings,
    {
        self.projection = Projection::Custom {
            expr: expr.into(),
            columns: collect_into_strings(columns),
        };
        self
    }

    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn inner_join(
        self,
        table: impl Into<String>,
        local_key: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Self {
        self.join(Join::new(JoinKind::Inner, table, local_key, foreign_key))
    }

    pub fn left_join(
        self,
        table: impl Into<String>,
        local_key: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Self {
        self.join(Join::new(JoinKind::Left, table, local_key, foreign_key))
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// 主过滤条件 `alias.key = @key`，重复调用时覆盖。
    pub fn where_(self, key: impl Into<String>) -> Self {
        self.where_filter(Filter::placeholder(key))
    }

    /// 主过滤条件 `alias.key = value`，值原样内联。
    pub fn where_value(self, key: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.where_filter(Filter::literal(key, value))
    }

    pub fn where_valuer(self, key: impl Into<String>, valuer: impl SqlValuer + 'static) -> Self {
        self.where_filter(Filter::valuer(key, valuer))
    }

    pub fn where_filter(mut self, filter: Filter) -> Self {
        self.filters.primary = Some(filter);
        self
    }

    /// 次级过滤条件 `AND alias.key = @key`，按调用顺序追加。
    pub fn and(self, key: impl Into<String>) -> Self {
        self.and_filter(Filter::placeholder(key))
    }

    pub fn and_value(self, key: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.and_filter(Filter::literal(key, value))
    }

    pub fn and_valuer(self, key: impl Into<String>, valuer: impl SqlValuer + 'static) -> Self {
        self.and_filter(Filter::valuer(key, valuer))
    }

    pub fn and_filter(mut self, filter: Filter) -> Self {
        self.filters.secondary.push(filter);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.ordering = Some(Ordering::new(column, Order::Ascending));
        self
    }

    pub fn order_by_desc(mut self, column: impl Into<String>) -> Self {
        self.ordering = Some(Ordering::new(column, Order::Descending));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn ordering(&self) -> Option<&Ordering> {
        self.ordering.as_ref()
    }

    /// 渲染 SELECT 语句：SELECT、FROM、JOIN、WHERE、ORDER BY 依次直接拼接。
    pub fn build(&self) -> BuildResult<String> {
        let result = self.build_inner();

        #[cfg(feature = "tracing")]
        self.trace_build(&result);
        result
    }

    #[cfg(feature = "tracing")]
    fn trace_build(&self, result: &BuildResult<String>) {
        match result {
            Ok(sql) => tracing::debug!(table = %self.table, sql = %sql, "built select statement"),
            Err(e) => {
                tracing::warn!(table = %self.table, error = %e, "failed to build select statement")
            }
        }
    }

    fn build_inner(&self) -> BuildResult<String> {
        let table = require_table(&self.table)?;

        let select = SelectClause::new(table, &self.projection).with_joins(&self.joins);
        let from = FromClause::new(table);
        let joins = JoinClause::new(table, &self.joins);
        let where_ = WhereClause::new(table, &self.filters);
        let order_by = OrderByClause::new(table, self.ordering.as_ref());
        let clauses: [&dyn Clause; 5] = [&select, &from, &joins, &where_, &order_by];

        let mut buf = StringBuilder::new();
        for clause in clauses {
            buf.write_str(&clause.build()?);
        }
        Ok(buf.into_string())
    }
}
