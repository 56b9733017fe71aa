//! JpqlValuer：延迟求值的查询参数。
//!
//! 应用里常见的枚举、ID 包装等领域类型可以实现该 trait，
//! 在日志插值阶段才换算成可输出的字面值；执行层绑定时同样先求值。

use crate::value::JpqlValue;

/// Valuer 求值失败。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("jpql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 可延迟计算实际参数值的 trait。
pub trait JpqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<JpqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(JpqlValuer);
