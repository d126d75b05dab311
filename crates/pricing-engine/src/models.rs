//! 定价规则引擎领域模型

use crate::operators::{ActionKind, Operator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 报价明细中基础价格条目的标签
pub const BASE_PRICE_LABEL: &str = "Base price";

/// 条件节点
///
/// 对客户答案中某个字段的单个断言。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// 价格动作
///
/// 规则命中后对当前总价执行的一次变换，按声明顺序依次作用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub amount: f64,
}

impl Action {
    pub fn new(kind: ActionKind, amount: f64) -> Self {
        Self { kind, amount }
    }
}

/// 定价规则
///
/// 条件列表按 AND 组合；空条件列表视为恒真（规则总是命中）。
/// 动作列表顺序敏感：每个动作作用在前一个动作的输出上。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Rule {
    pub fn new(name: impl Into<String>, conditions: Vec<Condition>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            conditions,
            actions,
        }
    }
}

/// 客户答案集合
///
/// 调用方每次报价请求传入的弱类型字段包，引擎只读不改。
/// 字段缺失通过 `get` 返回 `None` 显式暴露，评估器据此走缺失分支。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl AnswerSet {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// 从任意 JSON 值构建；非对象输入得到空答案集，不报错
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self { fields: map },
            _ => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// 查询字段值，缺失返回 None
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Value> for AnswerSet {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// 报价明细条目
///
/// `amount` 是该动作对总价的边际贡献（带符号）；
/// 首条是合成的基础价格条目，其 amount 为基础价本身而非增量。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub amount: f64,
}

impl BreakdownItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// 报价结果
///
/// 最终总价加上按触发顺序排列的明细，可直接序列化进响应体。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub total: f64,
    pub breakdown: Vec<BreakdownItem>,
}
