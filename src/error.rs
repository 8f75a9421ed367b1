//! 渲染阶段的错误类型。

use crate::valuer::ValuerError;

pub type BuildResult<T> = Result<T, BuildError>;

/// 所有错误都在 `build` 时同步返回，mutator 调用本身永不失败。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// 必填参数缺失：表名、SPECIFIC 列、CUSTOM 表达式或 JOIN 表名。
    #[error("builder missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("{0}")]
    Valuer(#[from] ValuerError),
    #[error("builder failed to format literal: {0}")]
    Format(String),
}

impl From<time::error::Format> for BuildError {
    fn from(e: time::error::Format) -> Self {
        Self::Format(e.to_string())
    }
}
