//! 条件评估器
//!
//! 实现五种操作符的评估逻辑。评估是全函数：任何输入组合都返回布尔值，
//! 字段缺失、类型不匹配、未识别操作符一律按"条件不成立"处理，
//! 保证单条规则配置错误不会让整次报价失败。

use crate::models::{AnswerSet, Condition};
use crate::operators::Operator;
use serde_json::Value;

/// 条件评估器
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// 评估单个条件
    ///
    /// 从答案集中取出 `condition.field` 对应的值，与 `condition.value`
    /// 按操作符语义比较。字段缺失时：排序比较与 includes 为 false，
    /// `==` 为 false，`!=` 为 true（缺失值与任何给定值不相等）。
    pub fn evaluate(condition: &Condition, answers: &AnswerSet) -> bool {
        let actual = answers.get(&condition.field);
        let expected = &condition.value;

        match &condition.operator {
            Operator::GreaterThan => Self::compare(actual, expected, |a, b| a > b),
            Operator::LessThan => Self::compare(actual, expected, |a, b| a < b),
            Operator::Equal => Self::loose_eq_opt(actual, expected),
            Operator::NotEqual => !Self::loose_eq_opt(actual, expected),
            Operator::Includes => Self::includes(actual, expected),
            Operator::Unrecognized(_) => false,
        }
    }

    /// 数值排序比较；任一侧无法转为数值即 false
    fn compare<F>(actual: Option<&Value>, expected: &Value, cmp: F) -> bool
    where
        F: Fn(f64, f64) -> bool,
    {
        match (actual.and_then(Self::as_f64), Self::as_f64(expected)) {
            (Some(a), Some(b)) => cmp(a, b),
            _ => false,
        }
    }

    fn loose_eq_opt(actual: Option<&Value>, expected: &Value) -> bool {
        match actual {
            Some(actual) => Self::loose_eq(actual, expected),
            None => false,
        }
    }

    /// 宽松相等
    ///
    /// 数值、数值字符串、布尔统一转为 f64 后比较（100 == "100"、1 == true），
    /// 任一侧不可转换则退回结构相等。同样的判据用于 includes 的成员匹配。
    fn loose_eq(actual: &Value, expected: &Value) -> bool {
        if let (Some(a), Some(b)) = (Self::as_f64(actual), Self::as_f64(expected)) {
            return (a - b).abs() < f64::EPSILON;
        }

        actual == expected
    }

    /// 数组成员检查：actual 必须是数组，且含有与 expected 宽松相等的元素
    fn includes(actual: Option<&Value>, expected: &Value) -> bool {
        match actual {
            Some(Value::Array(items)) => items.iter().any(|item| Self::loose_eq(item, expected)),
            _ => false,
        }
    }

    /// 尝试将值转为 f64：数值、可解析的字符串、布尔（true=1, false=0）
    ///
    /// null、数组、对象不参与数值转换。
    fn as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }
}
