//! WhereClause：渲染 ` WHERE ... [AND ...]*`。
//!
//! 主过滤条件负责引出 `WHERE`；没有主条件时整个子句为空，次级条件也不会输出。
//! 每个条件可以是 `@column` 命名占位符，也可以是直接内联的字面量。

use crate::alias::table_alias;
use crate::clause::{Clause, is_blank, require_table};
use crate::error::BuildResult;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use crate::valuer::SqlValuer;

/// 内联到 SQL 中的过滤值。
#[derive(Debug, Clone)]
pub enum FilterValue {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
}

impl FilterValue {
    fn write_to(&self, out: &mut String) -> BuildResult<()> {
        match self {
            Self::Value(v) => v.write_literal(out),
            Self::Valuer(v) => v.value()?.write_literal(out),
        }
    }
}

impl From<SqlValue> for FilterValue {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

/// 单个等值条件：`alias.column = @column` 或 `alias.column = value`。
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: String,
    pub value: Option<FilterValue>,
}

impl Filter {
    /// 占位符风格：渲染为 `@column`。
    pub fn placeholder(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: None,
        }
    }

    /// 字面量风格：值按原样内联，不做任何转义。
    pub fn literal(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self {
            column: column.into(),
            value: Some(FilterValue::Value(value.into())),
        }
    }

    /// 字面量由自定义 valuer 在渲染时提供。
    pub fn valuer(column: impl Into<String>, valuer: impl SqlValuer + 'static) -> Self {
        Self {
            column: column.into(),
            value: Some(FilterValue::Valuer(Box::new(valuer))),
        }
    }

    fn write_to(&self, alias: &str, keyword: &str, buf: &mut StringBuilder) -> BuildResult<()> {
        buf.write_str(&format!(" {keyword} {alias}.{} = ", self.column));
        match &self.value {
            None => {
                buf.write_str("@");
                buf.write_str(&self.column);
            }
            Some(v) => v.write_to(buf.buf_mut())?,
        }
        Ok(())
    }
}

/// WHERE 子句的全部条件：一个可选的主条件加上按顺序 AND 的次级条件。
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub primary: Option<Filter>,
    pub secondary: Vec<Filter>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WhereClause<'a> {
    table: &'a str,
    filters: &'a Filters,
}

impl<'a> WhereClause<'a> {
    pub fn new(table: &'a str, filters: &'a Filters) -> Self {
        Self { table, filters }
    }
}

impl Clause for WhereClause<'_> {
    fn build(&self) -> BuildResult<String> {
        let alias = table_alias(require_table(self.table)?);

        let Some(primary) = &self.filters.primary else {
            return Ok(String::new());
        };
        if is_blank(&primary.column) {
            return Ok(String::new());
        }

        let mut buf = StringBuilder::new();
        primary.write_to(&alias, "WHERE", &mut buf)?;
        for filter in &self.filters.secondary {
            filter.write_to(&alias, "AND", &mut buf)?;
        }
        Ok(buf.into_string())
    }
}
