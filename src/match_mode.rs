//! MatchMode：like 条件的通配符拼接策略。

/// like 模式值的通配符位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// 完全一致，不附加通配符。
    #[default]
    Exact,
    /// 前方一致：尾部附加 `%`。
    Prefix,
    /// 后方一致：头部附加 `%`。
    Suffix,
    /// 部分一致：两侧附加 `%`。
    Anywhere,
}

impl MatchMode {
    /// 把输入值转换成 like 的模式字符串。
    pub fn to_match_string(self, value: &str) -> String {
        match self {
            Self::Exact => value.to_string(),
            Self::Prefix => format!("{value}%"),
            Self::Suffix => format!("%{value}"),
            Self::Anywhere => format!("%{value}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MatchMode;

    #[test]
    fn wildcard_placement() {
        assert_eq!(MatchMode::Exact.to_match_string("q"), "q");
        assert_eq!(MatchMode::Prefix.to_match_string("q"), "q%");
        assert_eq!(MatchMode::Suffix.to_match_string("q"), "%q");
        assert_eq!(MatchMode::Anywhere.to_match_string("q"), "%q%");
    }

    #[test]
    fn default_is_exact() {
        assert_eq!(MatchMode::default(), MatchMode::Exact);
    }
}
