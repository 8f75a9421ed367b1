//! SelectClause：渲染 `SELECT ...` 投影。
//!
//! CUSTOM 模式的规则：`SELECT {expr}, ` 之后接的内容与不带表达式时完全一致，
//! 无列名时等同 ALL（`alias.*` 加上每个 JOIN 表的 `.*`），有列名时等同 SPECIFIC。

use crate::alias::table_alias;
use crate::clause::{Clause, is_blank, require_table};
use crate::error::{BuildError, BuildResult};
use crate::join::{Join, join_aliases};
use crate::string_builder::StringBuilder;

/// 投影模式；同一时刻只有一个生效，后一次设置覆盖前一次。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    All,
    Count,
    Specific(Vec<String>),
    Custom {
        expr: String,
        columns: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SelectClause<'a> {
    table: &'a str,
    projection: &'a Projection,
    joins: &'a [Join],
}

impl<'a> SelectClause<'a> {
    pub fn new(table: &'a str, projection: &'a Projection) -> Self {
        Self {
            table,
            projection,
            joins: &[],
        }
    }

    /// 附带 JOIN 表，ALL 投影会为每个 JOIN 表追加 `alias{i}.*`。
    pub fn with_joins(mut self, joins: &'a [Join]) -> Self {
        self.joins = joins;
        self
    }

    fn write_all(&self, alias: &str, buf: &mut StringBuilder) {
        buf.write_str(alias);
        buf.write_str(".*");

        let join_cols: Vec<String> = join_aliases(self.joins)
            .into_iter()
            .map(|a| format!("{a}.*"))
            .collect();
        if !join_cols.is_empty() {
            buf.write_str(", ");
            buf.write_strings(&join_cols, ", ");
        }
    }

    fn write_columns(alias: &str, columns: &[String], buf: &mut StringBuilder) {
        let qualified: Vec<String> = columns.iter().map(|c| format!("{alias}.{c}")).collect();
        buf.write_strings(&qualified, ",");
    }
}

impl Clause for SelectClause<'_> {
    fn build(&self) -> BuildResult<String> {
        let alias = table_alias(require_table(self.table)?);

        let mut buf = StringBuilder::new();
        buf.write_str("SELECT ");

        match self.projection {
            Projection::All => self.write_all(&alias, &mut buf),
            Projection::Count => buf.write_str("COUNT(*)"),
            Projection::Specific(columns) => {
                if columns.is_empty() {
                    return Err(BuildError::MissingArgument("columns"));
                }
                Self::write_columns(&alias, columns, &mut buf);
            }
            Projection::Custom { expr, columns } => {
                if is_blank(expr) {
                    return Err(BuildError::MissingArgument("custom expression"));
                }
                buf.write_str(expr);
                buf.write_str(", ");
                if columns.is_empty() {
                    self.write_all(&alias, &mut buf);
                } else {
                    Self::write_columns(&alias, columns, &mut buf);
                }
            }
        }

        Ok(buf.into_string())
    }
}
