//! SqlValuer：由调用方在渲染阶段动态提供字面量。

use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("builder sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 可在渲染阶段计算实际值的 trait；需要可 clone，以便整条查询可以被复制分叉。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);
