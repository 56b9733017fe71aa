#[cfg(test)]
mod tests {
    use crate::builder::JpqlBuilder;
    use crate::jpql_args;
    use crate::match_mode::MatchMode;
    use crate::value::JpqlValue;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    #[test]
    fn equal_appends_numbered_placeholder() {
        let mut b = JpqlBuilder::new("from Foo");
        b.equal("name", "abc").order_by("name");
        assert_eq!(b.build(), "from Foo where name = ?1 order by name");
        assert_eq!(b.args(), vec![JpqlValue::from("abc")]);
    }

    #[test]
    fn absent_values_are_noop() {
        let mut b = JpqlBuilder::new("from Foo");
        b.equal("name", None::<String>)
            .equal("code", "")
            .equal("memo", "   ")
            .in_("status", Vec::<String>::new())
            .not_equal("kind", JpqlValue::Null);
        assert_eq!(b.build(), "from Foo");
        assert_eq!(b.args(), vec![]);
    }

    #[test]
    fn zero_and_false_are_present() {
        let mut b = JpqlBuilder::new("from Foo");
        b.equal("count", 0_i64).equal("enabled", false);
        assert_eq!(b.build(), "from Foo where count = ?1 and enabled = ?2");
        assert_eq!(
            b.args(),
            vec![JpqlValue::I64(0), JpqlValue::Bool(false)]
        );
    }

    #[test]
    fn not_equal_fragment() {
        let mut b = JpqlBuilder::new("from Foo");
        b.not_equal("status", "X");
        assert_eq!(b.build(), "from Foo where status != ?1");
    }

    #[test]
    fn static_condition_comes_first() {
        let mut b = JpqlBuilder::with_static("from Foo", "deletedAt is null");
        b.equal("status", "A");
        assert_eq!(
            b.build(),
            "from Foo where deletedAt is null and status = ?1"
        );
        assert_eq!(b.args(), vec![JpqlValue::from("A")]);
    }

    #[test]
    fn blank_static_condition_is_ignored() {
        let mut b = JpqlBuilder::with_static("from Foo", "   ");
        b.equal("status", "A");
        assert_eq!(b.build(), "from Foo where status = ?1");
    }

    #[test]
    fn reserved_args_come_before_dynamic_args() {
        let mut b = JpqlBuilder::with_reserved("from Foo", 2, jpql_args!["seed"]);
        b.equal("name", "x");
        assert_eq!(b.build(), "from Foo where name = ?2");
        assert_eq!(
            b.args(),
            vec![JpqlValue::from("seed"), JpqlValue::from("x")]
        );
    }

    #[test]
    fn like_applies_match_mode() {
        let mut b = JpqlBuilder::new("from Foo");
        b.like("name", "q", MatchMode::Anywhere)
            .like("code", "q", MatchMode::Prefix)
            .like("memo", "q", MatchMode::Suffix)
            .like("tag", "q", MatchMode::Exact);
        assert_eq!(
            b.build(),
            "from Foo where name like ?1 and code like ?2 and memo like ?3 and tag like ?4"
        );
        assert_eq!(
            b.args(),
            vec![
                JpqlValue::from("%q%"),
                JpqlValue::from("q%"),
                JpqlValue::from("%q"),
                JpqlValue::from("q"),
            ]
        );
    }

    #[test]
    fn like_ignores_non_string_values() {
        let mut b = JpqlBuilder::new("from Foo");
        b.like("age", 30_i64, MatchMode::Anywhere);
        assert_eq!(b.build(), "from Foo");
        assert_eq!(b.args(), vec![]);
    }

    #[test]
    fn like_any_duplicates_value_per_field() {
        let mut b = JpqlBuilder::new("from Foo");
        b.like_any(["a", "b"], "q", MatchMode::Anywhere);
        assert_eq!(b.build(), "from Foo where (a like ?1 or b like ?2)");
        assert_eq!(
            b.args(),
            vec![JpqlValue::from("%q%"), JpqlValue::from("%q%")]
        );
    }

    #[test]
    fn like_any_with_empty_fields_is_noop() {
        let mut b = JpqlBuilder::new("from Foo");
        b.like_any(Vec::<String>::new(), "q", MatchMode::Anywhere);
        b.equal("name", "x");
        // 占位符编号没有被空字段列表消耗
        assert_eq!(b.build(), "from Foo where name = ?1");
    }

    #[test]
    fn in_binds_whole_collection_as_one_arg() {
        let mut b = JpqlBuilder::new("from Foo");
        b.in_("status", ["A", "B"]);
        assert_eq!(b.build(), "from Foo where status in ?1");
        assert_eq!(b.args(), vec![JpqlValue::list(["A", "B"])]);
    }

    #[test]
    fn between_allocates_two_placeholders() {
        let mut b = JpqlBuilder::new("from Foo");
        b.between("createdAt", date!(2024 - 01 - 01), date!(2024 - 12 - 31));
        assert_eq!(b.build(), "from Foo where createdAt between ?1 and ?2");
        assert_eq!(
            b.args(),
            vec![
                JpqlValue::Date(date!(2024 - 01 - 01)),
                JpqlValue::Date(date!(2024 - 12 - 31)),
            ]
        );
    }

    #[test]
    fn partial_between_keeps_index_untouched() {
        let mut b = JpqlBuilder::new("from Foo");
        b.between("createdAt", date!(2024 - 01 - 01), None::<time::Date>);
        assert_eq!(b.build(), "from Foo");
        assert_eq!(b.args(), vec![]);

        // 被跳过的 between 没有消耗编号，下一个条件仍然是 ?1
        b.equal("name", "x");
        assert_eq!(b.build(), "from Foo where name = ?1");
    }

    #[test]
    fn between_over_strings_checks_blank_bounds() {
        let mut b = JpqlBuilder::new("from Foo");
        b.between("code", "A", "  ");
        assert_eq!(b.build(), "from Foo");

        b.between("code", "A", "Z");
        assert_eq!(b.build(), "from Foo where code between ?1 and ?2");
    }

    #[test]
    fn comparison_fragments() {
        let mut b = JpqlBuilder::new("from Foo");
        b.gte("a", 1_i64).gt("b", 2_i64).lte("c", 3_i64).lt("d", 4_i64);
        assert_eq!(
            b.build(),
            "from Foo where a >= ?1 and b > ?2 and c <= ?3 and d < ?4"
        );
        assert_eq!(
            b.args(),
            vec![
                JpqlValue::I64(1),
                JpqlValue::I64(2),
                JpqlValue::I64(3),
                JpqlValue::I64(4),
            ]
        );
    }

    #[test]
    fn order_by_last_call_wins() {
        let mut b = JpqlBuilder::new("from Foo");
        b.order_by("name").order_by("id desc");
        assert_eq!(b.build(), "from Foo order by id desc");
    }

    #[test]
    fn blank_order_by_clears_previous() {
        let mut b = JpqlBuilder::new("from Foo");
        b.order_by("name").order_by("");
        assert_eq!(b.build(), "from Foo");
    }

    #[test]
    fn order_by_without_conditions() {
        let mut b = JpqlBuilder::new("from Foo");
        b.order_by("name");
        assert_eq!(b.build(), "from Foo order by name");
        assert_eq!(b.args(), vec![]);
    }

    #[test]
    fn build_without_anything_returns_base() {
        let b = JpqlBuilder::new("from Foo");
        assert_eq!(b.build(), "from Foo");
        assert_eq!(b.args(), vec![]);
    }

    #[test]
    fn args_is_idempotent() {
        let mut b = JpqlBuilder::new("from Foo");
        b.equal("name", "abc").in_("status", ["A"]);
        assert_eq!(b.args(), b.args());
    }
}
