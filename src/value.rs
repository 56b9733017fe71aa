//! JPQL 参数值类型。

use crate::valuer::JpqlValuer;
use std::borrow::Cow;

/// JPQL 参数值。
#[derive(Debug, Clone)]
pub enum JpqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    Date(time::Date),
    DateTime(time::OffsetDateTime),
    /// in 条件的整组参数，作为一个占位符绑定，由执行层负责展开。
    List(Vec<JpqlValue>),
    /// 延迟求值的参数（见 [`JpqlValuer`]）。
    Valuer(Box<dyn JpqlValuer>),
}

impl JpqlValue {
    /// 判断值是否有效：无效值对应的条件句会被整体跳过。
    ///
    /// 无效：`Null`、空白字符串、空集合、空字节串。
    /// `Bool(false)` 与数值 0 都视为有效。
    pub fn is_present(&self) -> bool {
        match self {
            Self::Null => false,
            Self::String(s) => !s.trim().is_empty(),
            Self::Bytes(b) => !b.is_empty(),
            Self::List(vs) => !vs.is_empty(),
            _ => true,
        }
    }

    /// 字符串值的借用视图；非字符串返回 `None`。
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// 把一组值收拢为 `List`。
    pub fn list(values: impl IntoIterator<Item = impl Into<JpqlValue>>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// 包装一个延迟求值参数。
    pub fn valuer(v: impl JpqlValuer + 'static) -> Self {
        Self::Valuer(Box::new(v))
    }
}

/// `Valuer` 不参与相等比较，其余变体按结构比较。
impl PartialEq for JpqlValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<()> for JpqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for JpqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for JpqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for JpqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for JpqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for JpqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for JpqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for JpqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for JpqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for JpqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for JpqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for JpqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for JpqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for JpqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for JpqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<time::Date> for JpqlValue {
    fn from(v: time::Date) -> Self {
        Self::Date(v)
    }
}

impl From<time::OffsetDateTime> for JpqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

/// `None => Null`，用于可选检索条件的直接传参。
impl<T: Into<JpqlValue>> From<Option<T>> for JpqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}
