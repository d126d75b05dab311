//! 条件操作符与动作类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 条件操作符
///
/// 封闭的五种操作符，规则 JSON 中未识别的标签保留在 `Unrecognized` 中，
/// 评估时按"条件不成立"处理而不是报错（fail-closed）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    GreaterThan,
    LessThan,
    Equal,
    NotEqual,
    Includes,
    /// 未识别的操作符标签，原样保留以便校验器报告
    Unrecognized(String),
}

impl Operator {
    /// 规范化的线上标签，序列化时使用
    pub fn as_tag(&self) -> &str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Includes => "includes",
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for Operator {
    fn from(tag: String) -> Self {
        // 同时接受符号标签和手写配置常用的单词别名
        match tag.as_str() {
            ">" | "gt" | "greater_than" => Self::GreaterThan,
            "<" | "lt" | "less_than" => Self::LessThan,
            "==" | "eq" | "equal" => Self::Equal,
            "!=" | "neq" | "not_equal" => Self::NotEqual,
            "includes" => Self::Includes,
            _ => Self::Unrecognized(tag),
        }
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_tag().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// 动作类型
///
/// 与操作符同样的封闭集合加 fail-closed 兜底：未识别的类型在应用时为空操作。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Add,
    Multiply,
    Percent,
    /// 未识别的动作类型标签
    Unrecognized(String),
}

impl ActionKind {
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Add => "ADD",
            Self::Multiply => "MULTIPLY",
            Self::Percent => "PERCENT",
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for ActionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ADD" | "add" => Self::Add,
            "MULTIPLY" | "multiply" => Self::Multiply,
            "PERCENT" | "percent" => Self::Percent,
            _ => Self::Unrecognized(tag),
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_tag().to_string()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
