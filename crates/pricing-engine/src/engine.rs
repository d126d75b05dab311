//! 定价规则引擎编排器
//!
//! 对规则列表做单趟折叠：逐条评估条件（AND 组合），命中的规则按顺序
//! 应用动作，并把每个动作的边际贡献记入明细。整个过程无 I/O、无共享
//! 状态，是三个输入的纯函数，跨请求并发调用天然安全。

use crate::applicator::ActionApplicator;
use crate::evaluator::ConditionEvaluator;
use crate::models::{AnswerSet, BreakdownItem, QuoteResult, Rule, BASE_PRICE_LABEL};
use tracing::debug;

/// 定价规则引擎
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算报价
    ///
    /// 从 `base_price` 出发按声明顺序评估规则。明细首条恒为基础价格，
    /// 之后每个触发的动作各占一行，同一规则的多个动作共享规则名作标签。
    /// 正常输入下不会失败：坏操作符/坏动作类型退化为不命中/空操作。
    pub fn quote(&self, rules: &[Rule], answers: &AnswerSet, base_price: f64) -> QuoteResult {
        let mut total = base_price;
        let mut breakdown = vec![BreakdownItem::new(BASE_PRICE_LABEL, base_price)];

        for rule in rules {
            let all_met = rule
                .conditions
                .iter()
                .all(|condition| ConditionEvaluator::evaluate(condition, answers));

            if !all_met {
                debug!(rule = %rule.name, "规则未命中，跳过");
                continue;
            }

            debug!(rule = %rule.name, actions = rule.actions.len(), "规则命中");

            for action in &rule.actions {
                let before = total;
                total = ActionApplicator::apply(action, total);
                breakdown.push(BreakdownItem::new(rule.name.clone(), total - before));
            }
        }

        debug!(total, items = breakdown.len(), "报价计算完成");

        QuoteResult { total, breakdown }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, Condition};
    use crate::operators::{ActionKind, Operator};
    use serde_json::json;

    #[test]
    fn test_empty_rule_with_no_conditions_always_fires() {
        let rules = vec![Rule::new(
            "Callout fee",
            vec![],
            vec![Action::new(ActionKind::Add, 25.0)],
        )];
        let result = PricingEngine::new().quote(&rules, &AnswerSet::default(), 100.0);

        assert_eq!(result.total, 125.0);
        assert_eq!(result.breakdown.len(), 2);
    }

    #[test]
    fn test_multiple_actions_share_rule_name_as_label() {
        let rules = vec![Rule::new(
            "Premium package",
            vec![],
            vec![
                Action::new(ActionKind::Percent, 10.0),
                Action::new(ActionKind::Add, 5.0),
            ],
        )];
        let result = PricingEngine::new().quote(&rules, &AnswerSet::default(), 100.0);

        assert_eq!(result.total, 115.0);
        assert_eq!(result.breakdown[1].label, "Premium package");
        assert_eq!(result.breakdown[2].label, "Premium package");
        assert_eq!(result.breakdown[1].amount, 10.0);
        assert_eq!(result.breakdown[2].amount, 5.0);
    }

    #[test]
    fn test_unrecognized_action_produces_zero_delta_line() {
        let rules = vec![Rule::new(
            "Broken rule",
            vec![],
            vec![Action::new(ActionKind::Unrecognized("SUBTRACT".into()), 50.0)],
        )];
        let result = PricingEngine::new().quote(&rules, &AnswerSet::default(), 100.0);

        assert_eq!(result.total, 100.0);
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown[1].amount, 0.0);
    }

    #[test]
    fn test_condition_order_does_not_matter_for_and() {
        let answers = AnswerSet::from_value(json!({ "a": 1, "b": 2 }));
        let c1 = Condition::new("a", Operator::Equal, 1);
        let c2 = Condition::new("b", Operator::Equal, 2);
        let actions = vec![Action::new(ActionKind::Add, 10.0)];

        let forward = PricingEngine::new().quote(
            &[Rule::new("r", vec![c1.clone(), c2.clone()], actions.clone())],
            &answers,
            100.0,
        );
        let backward =
            PricingEngine::new().quote(&[Rule::new("r", vec![c2, c1], actions)], &answers, 100.0);

        assert_eq!(forward.total, backward.total);
    }
}
