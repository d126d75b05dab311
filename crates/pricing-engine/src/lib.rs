//! 定价规则引擎
//!
//! 根据客户答案和基础价格确定性地计算报价总额与明细，支持：
//! - 有序规则列表，条件按 AND 组合
//! - 五种条件操作符、三种价格动作
//! - 未识别标签 fail-closed：坏条件不命中、坏动作空操作，评估永不失败
//! - JSON 规则加载与配置时校验

pub mod applicator;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod models;
pub mod operators;
pub mod validator;

pub use applicator::ActionApplicator;
pub use engine::PricingEngine;
pub use error::{EngineError, Result};
pub use evaluator::ConditionEvaluator;
pub use loader::{default_rules, RuleLoader};
pub use models::{
    Action, AnswerSet, BreakdownItem, Condition, QuoteResult, Rule, BASE_PRICE_LABEL,
};
pub use operators::{ActionKind, Operator};
pub use validator::{IssueReason, RuleValidator, ValidationIssue};
