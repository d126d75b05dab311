//! 动作应用器
//!
//! 纯数值函数：给定一个动作和当前总价，返回新总价。
//! 不做任何舍入，浮点精度原样向下游传递；取整是展示层的事。

use crate::models::Action;
use crate::operators::ActionKind;

/// 动作应用器
pub struct ActionApplicator;

impl ActionApplicator {
    /// 将动作作用于当前总价
    ///
    /// 未识别的动作类型返回总价本身（空操作），不报错。
    pub fn apply(action: &Action, current_total: f64) -> f64 {
        match &action.kind {
            ActionKind::Add => current_total + action.amount,
            ActionKind::Multiply => current_total * action.amount,
            // 在当前总价上加 amount%；amount 为负即折扣
            ActionKind::Percent => current_total + current_total * action.amount / 100.0,
            ActionKind::Unrecognized(_) => current_total,
        }
    }
}
