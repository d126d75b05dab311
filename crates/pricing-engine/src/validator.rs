//! 规则校验器
//!
//! 配置时（规则编写/导入）的预检。评估路径上坏配置会静默退化为
//! 不命中/空操作，这里负责把这些问题提前暴露给规则作者。
//! 校验不影响评估：带问题的规则集仍然可以运行。

use serde::Serialize;
use tracing::warn;

use crate::models::Rule;
use crate::operators::{ActionKind, Operator};

/// 单条校验问题
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// 问题所在规则的下标
    pub rule_index: usize,
    /// 问题所在规则名（可能为空串）
    pub rule_name: String,
    pub reason: IssueReason,
}

/// 校验问题原因
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueReason {
    /// 操作符标签未识别，评估时该条件永远不成立
    UnrecognizedOperator { tag: String, condition_index: usize },
    /// 动作类型未识别，评估时该动作为空操作
    UnrecognizedActionKind { tag: String, action_index: usize },
    /// 规则名为空，明细条目将没有可读标签
    EmptyRuleName,
    /// 规则没有任何动作，命中后不改变价格
    NoActions,
}

/// 规则校验器
pub struct RuleValidator;

impl RuleValidator {
    /// 校验整个规则集，返回所有发现的问题
    pub fn validate(rules: &[Rule]) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (rule_index, rule) in rules.iter().enumerate() {
            let push = |issues: &mut Vec<ValidationIssue>, reason: IssueReason| {
                issues.push(ValidationIssue {
                    rule_index,
                    rule_name: rule.name.clone(),
                    reason,
                });
            };

            if rule.name.trim().is_empty() {
                push(&mut issues, IssueReason::EmptyRuleName);
            }

            if rule.actions.is_empty() {
                push(&mut issues, IssueReason::NoActions);
            }

            for (condition_index, condition) in rule.conditions.iter().enumerate() {
                if let Operator::Unrecognized(tag) = &condition.operator {
                    push(
                        &mut issues,
                        IssueReason::UnrecognizedOperator {
                            tag: tag.clone(),
                            condition_index,
                        },
                    );
                }
            }

            for (action_index, action) in rule.actions.iter().enumerate() {
                if let ActionKind::Unrecognized(tag) = &action.kind {
                    push(
                        &mut issues,
                        IssueReason::UnrecognizedActionKind {
                            tag: tag.clone(),
                            action_index,
                        },
                    );
                }
            }
        }

        for issue in &issues {
            warn!(
                rule_index = issue.rule_index,
                rule = %issue.rule_name,
                reason = ?issue.reason,
                "规则配置问题"
            );
        }

        issues
    }
}
