//! JpqlBuilder：简易生成 JPQL 的构建器，专注 where 条件句的动态拼接。

use crate::macros::{IntoStrings, collect_into_strings};
use crate::match_mode::MatchMode;
use crate::string_builder::StringBuilder;
use crate::value::JpqlValue;

/// 动态拼接 JPQL 的构建器。
///
/// 一次查询构造一个实例：链式追加可选条件后，用 `build()` 取 JPQL、
/// `args()` 取按占位符顺序排列的执行参数。占位符编号从起始值起逐一递增，
/// 不会回收复用，因此参数位置只由追加顺序决定。
#[derive(Debug, Clone)]
pub struct JpqlBuilder {
    jpql: String,
    index: usize,
    conditions: Vec<String>,
    reserved_args: Vec<JpqlValue>,
    args: Vec<JpqlValue>,
    order_by: Option<String>,
}

impl JpqlBuilder {
    /// 基点 JPQL（不含 where / order by），占位符从 `?1` 开始。
    pub fn new(base_jpql: impl Into<String>) -> Self {
        Self {
            jpql: base_jpql.into(),
            index: 1,
            conditions: Vec::new(),
            reserved_args: Vec::new(),
            args: Vec::new(),
            order_by: None,
        }
    }

    /// 基点 JPQL 已含手工编号的占位符时使用。
    ///
    /// `from_index` 是下一个未用的编号（1 开始），
    /// `reserved` 按位置对应基点里已有的占位符。
    pub fn with_reserved(
        base_jpql: impl Into<String>,
        from_index: usize,
        reserved: Vec<JpqlValue>,
    ) -> Self {
        let mut b = Self::new(base_jpql);
        b.index = from_index;
        b.reserved_args = reserved;
        b
    }

    /// 附带一个无条件生效的静态条件句（如 `deletedAt is null`）。
    /// 空白条件会被忽略。
    pub fn with_static(base_jpql: impl Into<String>, static_condition: &str) -> Self {
        let mut b = Self::new(base_jpql);
        b.add(static_condition);
        b
    }

    /// [`Self::with_static`] 与 [`Self::with_reserved`] 的组合形式。
    pub fn with_static_reserved(
        base_jpql: impl Into<String>,
        static_condition: &str,
        from_index: usize,
        reserved: Vec<JpqlValue>,
    ) -> Self {
        let mut b = Self::with_reserved(base_jpql, from_index, reserved);
        b.add(static_condition);
        b
    }

    fn add(&mut self, condition: &str) {
        if !condition.trim().is_empty() {
            self.conditions.push(condition.to_string());
        }
    }

    fn next_index(&mut self) -> usize {
        let n = self.index;
        self.index += 1;
        n
    }

    fn if_present(
        &mut self,
        value: JpqlValue,
        f: impl FnOnce(&mut Self, JpqlValue),
    ) -> &mut Self {
        if value.is_present() {
            f(self, value);
        }
        self
    }

    /// 一致条件。值无效时忽略。
    pub fn equal(&mut self, field: &str, value: impl Into<JpqlValue>) -> &mut Self {
        self.if_present(value.into(), |b, v| {
            let n = b.next_index();
            b.conditions.push(format!("{field} = ?{n}"));
            b.args.push(v);
        })
    }

    /// 不一致条件。值无效时忽略。
    pub fn not_equal(&mut self, field: &str, value: impl Into<JpqlValue>) -> &mut Self {
        self.if_present(value.into(), |b, v| {
            let n = b.next_index();
            b.conditions.push(format!("{field} != ?{n}"));
            b.args.push(v);
        })
    }

    /// like 条件，按 `mode` 决定通配符位置。仅对字符串值生效，值无效时忽略。
    pub fn like(
        &mut self,
        field: &str,
        value: impl Into<JpqlValue>,
        mode: MatchMode,
    ) -> &mut Self {
        let value = value.into();
        if let Some(s) = value.as_str()
            && value.is_present()
        {
            let pattern = mode.to_match_string(s);
            let n = self.next_index();
            self.conditions.push(format!("{field} like ?{n}"));
            self.args.push(JpqlValue::from(pattern));
        }
        self
    }

    /// like 条件（多个字段 OR 结合）。同一个模式值按字段顺序逐一绑定；
    /// 值无效或字段列表为空时忽略。
    pub fn like_any<T>(
        &mut self,
        fields: T,
        value: impl Into<JpqlValue>,
        mode: MatchMode,
    ) -> &mut Self
    where
        T: IntoStrings,
    {
        let fields = collect_into_strings(fields);
        let value = value.into();
        if let Some(s) = value.as_str()
            && value.is_present()
            && !fields.is_empty()
        {
            let pattern = mode.to_match_string(s);
            let parts: Vec<String> = fields
                .iter()
                .map(|field| format!("{field} like ?{}", self.next_index()))
                .collect();
            let mut cond = StringBuilder::new();
            cond.write_char('(');
            cond.write_strings(&parts, " or ");
            cond.write_char(')');
            self.conditions.push(cond.into_string());
            for _ in &fields {
                self.args.push(JpqlValue::from(pattern.clone()));
            }
        }
        self
    }

    /// in 条件。整组值绑定到一个占位符，由执行层展开；空集合时忽略。
    pub fn in_(
        &mut self,
        field: &str,
        values: impl IntoIterator<Item = impl Into<JpqlValue>>,
    ) -> &mut Self {
        self.if_present(JpqlValue::list(values), |b, v| {
            let n = b.next_index();
            b.conditions.push(format!("{field} in ?{n}"));
            b.args.push(v);
        })
    }

    /// between 条件。两端都有效才生效；任一端缺失时整体忽略、不消耗占位符。
    pub fn between(
        &mut self,
        field: &str,
        from: impl Into<JpqlValue>,
        to: impl Into<JpqlValue>,
    ) -> &mut Self {
        let from = from.into();
        let to = to.into();
        if from.is_present() && to.is_present() {
            let n = self.next_index();
            let m = self.next_index();
            self.conditions.push(format!("{field} between ?{n} and ?{m}"));
            self.args.push(from);
            self.args.push(to);
        }
        self
    }

    /// `[字段] >= [值]` 条件。值无效时忽略。
    pub fn gte(&mut self, field: &str, value: impl Into<JpqlValue>) -> &mut Self {
        self.if_present(value.into(), |b, v| {
            let n = b.next_index();
            b.conditions.push(format!("{field} >= ?{n}"));
            b.args.push(v);
        })
    }

    /// `[字段] > [值]` 条件。值无效时忽略。
    pub fn gt(&mut self, field: &str, value: impl Into<JpqlValue>) -> &mut Self {
        self.if_present(value.into(), |b, v| {
            let n = b.next_index();
            b.conditions.push(format!("{field} > ?{n}"));
            b.args.push(v);
        })
    }

    /// `[字段] <= [值]` 条件。值无效时忽略。
    pub fn lte(&mut self, field: &str, value: impl Into<JpqlValue>) -> &mut Self {
        self.if_present(value.into(), |b, v| {
            let n = b.next_index();
            b.conditions.push(format!("{field} <= ?{n}"));
            b.args.push(v);
        })
    }

    /// `[字段] < [值]` 条件。值无效时忽略。
    pub fn lt(&mut self, field: &str, value: impl Into<JpqlValue>) -> &mut Self {
        self.if_present(value.into(), |b, v| {
            let n = b.next_index();
            b.conditions.push(format!("{field} < ?{n}"));
            b.args.push(v);
        })
    }

    /// order by 条件句，后设置的覆盖先设置的。传入空白值会清除排序。
    pub fn order_by(&mut self, order_by: impl Into<String>) -> &mut Self {
        let order_by = order_by.into();
        self.order_by = if order_by.trim().is_empty() {
            None
        } else {
            Some(order_by)
        };
        self
    }

    /// 生成 JPQL。
    pub fn build(&self) -> String {
        let mut buf = StringBuilder::new();
        buf.write_str(&self.jpql);
        if !self.conditions.is_empty() {
            buf.write_str(" where ");
            buf.write_strings(&self.conditions, " and ");
        }
        if let Some(order_by) = &self.order_by {
            buf.write_str(" order by ");
            buf.write_str(order_by);
        }
        buf.into_string()
    }

    /// 返回与 JPQL 占位符顺序一一对应的执行参数：预留参数在前，动态参数在后。
    pub fn args(&self) -> Vec<JpqlValue> {
        let mut all = Vec::with_capacity(self.reserved_args.len() + self.args.len());
        all.extend(self.reserved_args.iter().cloned());
        all.extend(self.args.iter().cloned());
        all
    }
}
