//! 字面量过滤值：直接内联进 SQL 文本。
//!
//! 字符串按原样写入，不加引号也不转义；调用方需自行格式化（例如传入 `"'abc'"`）。
//! 这一路径不适合不可信输入，需要参数化时请使用 `@column` 占位符风格的过滤。

use crate::error::BuildResult;
use std::borrow::Cow;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("'[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]'");

/// SQL 字面量。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    DateTime(time::OffsetDateTime),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    pub(crate) fn write_literal(&self, out: &mut String) -> BuildResult<()> {
        match self {
            Self::Null => out.push_str("NULL"),
            Self::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
            Self::I64(n) => out.push_str(&n.to_string()),
            Self::U64(n) => out.push_str(&n.to_string()),
            Self::F64(n) => out.push_str(&n.to_string()),
            Self::String(s) => out.push_str(s),
            Self::DateTime(dt) => out.push_str(&dt.format(DATETIME_FORMAT)?),
        }
        Ok(())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}
