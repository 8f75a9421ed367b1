//! FromClause：渲染 ` FROM [table] alias`。

use crate::alias::table_alias;
use crate::clause::{Clause, require_table};
use crate::error::BuildResult;

#[derive(Debug, Clone, Copy)]
pub struct FromClause<'a> {
    table: &'a str,
}

impl<'a> FromClause<'a> {
    pub fn new(table: &'a str) -> Self {
        Self { table }
    }
}

impl Clause for FromClause<'_> {
    fn build(&self) -> BuildResult<String> {
        let table = require_table(self.table)?;
        Ok(format!(" FROM [{table}] {}", table_alias(table)))
    }
}
