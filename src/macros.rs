//! 宏与可变参数封装：多字段 like 可以直接传 `["a", "b"]`，
//! 预留参数可以用 `jpql_args![...]` 构造异构列表。

/// 构造异构参数列表：`jpql_args!["seed", 1, true]`。
///
/// 各元素类型只要实现 `Into<JpqlValue>` 即可混用。
#[macro_export]
macro_rules! jpql_args {
    () => {
        Vec::<$crate::value::JpqlValue>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut values = Vec::<$crate::value::JpqlValue>::new();
        $(
            values.push($crate::value::JpqlValue::from($value));
        )*
        values
    }};
}

/// 字符串列表的统一入参形式（数组、切片、`Vec` 均可）。
pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl<'a> IntoStrings for &'a str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_string());
    }
}

impl<const N: usize, T> IntoStrings for [T; N]
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in &self {
            dst.push(item.clone().into());
        }
    }
}

impl<'a, T> IntoStrings for &'a [T]
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.clone().into());
        }
    }
}

impl<'a, T> IntoStrings for &'a Vec<T>
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.clone().into());
        }
    }
}

impl<T> IntoStrings for Vec<T>
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

pub fn collect_into_strings<T: IntoStrings>(values: T) -> Vec<String> {
    let mut out = Vec::new();
    values.extend_into_strings(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::collect_into_strings;
    use crate::value::JpqlValue;

    #[test]
    fn collect_from_array_and_vec() {
        assert_eq!(collect_into_strings(["a", "b"]), vec!["a", "b"]);
        assert_eq!(
            collect_into_strings(vec![String::from("x")]),
            vec![String::from("x")]
        );
    }

    #[test]
    fn jpql_args_mixes_types() {
        let args = jpql_args!["seed", 1_i64, true];
        assert_eq!(
            args,
            vec![
                JpqlValue::String("seed".into()),
                JpqlValue::I64(1),
                JpqlValue::Bool(true),
            ]
        );
    }

    #[test]
    fn jpql_args_empty() {
        assert!(jpql_args![].is_empty());
    }
}
