//! jpql-builder：动态拼接 JPQL 条件句与参数收集的构建器。
//!
//! 面向检索表单类场景：where 条件的数量取决于调用方实际提供了哪些可选字段，
//! 由构建器统一维护占位符编号与参数顺序的一致性，避免手写字符串拼接。

pub mod builder;
#[cfg(test)]
mod builder_tests;
pub mod interpolate;
pub mod macros;
pub use crate::macros::*;
pub mod match_mode;
pub mod string_builder;
pub mod value;
pub mod valuer;

pub use crate::builder::JpqlBuilder;
pub use crate::interpolate::{InterpolateError, interpolate};
pub use crate::match_mode::MatchMode;
pub use crate::value::JpqlValue;
pub use crate::valuer::{JpqlValuer, ValuerError};

/// 便捷命名空间：允许 `use jpql_builder::jpql::{...}` 形式导入。
pub mod jpql {
    pub use crate::*;
}
