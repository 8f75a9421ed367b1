//! JOIN：登记的关联表，以及 ` INNER JOIN [...] ... ON ...` 子句的渲染。
//!
//! JOIN 序号是全局的：先按登记顺序给所有 INNER JOIN 编号，LEFT JOIN 接着往后编。
//! 同名表可以重复登记，每次登记都会独立渲染并拿到自己的别名序号。

use crate::alias::{join_alias, table_alias};
use crate::clause::{Clause, is_blank, require_table};
use crate::error::{BuildError, BuildResult};
use crate::string_builder::StringBuilder;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
}

impl JoinKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一条 JOIN 登记：`source.local_key = joined.foreign_key`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub local_key: String,
    pub foreign_key: String,
}

impl Join {
    pub fn new(
        kind: JoinKind,
        table: impl Into<String>,
        local_key: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            table: table.into(),
            local_key: local_key.into(),
            foreign_key: foreign_key.into(),
        }
    }
}

/// 按渲染顺序（INNER 在前、LEFT 在后）遍历，并附带全局序号。
pub fn indexed_joins(joins: &[Join]) -> impl Iterator<Item = (usize, &Join)> {
    let inner = joins.iter().filter(|j| j.kind == JoinKind::Inner);
    let left = joins.iter().filter(|j| j.kind == JoinKind::Left);
    inner.chain(left).enumerate()
}

/// 所有 JOIN 表的别名（含序号），顺序与 JOIN 子句一致。
pub fn join_aliases(joins: &[Join]) -> Vec<String> {
    indexed_joins(joins)
        .map(|(i, join)| join_alias(&join.table, i))
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct JoinClause<'a> {
    table: &'a str,
    joins: &'a [Join],
}

impl<'a> JoinClause<'a> {
    pub fn new(table: &'a str, joins: &'a [Join]) -> Self {
        Self { table, joins }
    }
}

impl Clause for JoinClause<'_> {
    fn build(&self) -> BuildResult<String> {
        let source_alias = table_alias(require_table(self.table)?);

        let mut buf = StringBuilder::new();
        for (i, join) in indexed_joins(self.joins) {
            if is_blank(&join.table) {
                return Err(BuildError::MissingArgument("join table"));
            }
            let alias = join_alias(&join.table, i);
            buf.write_str(&format!(
                " {} [{}] {alias} ON {source_alias}.{} = {alias}.{}",
                join.kind, join.table, join.local_key, join.foreign_key
            ));
        }
        Ok(buf.into_string())
    }
}
