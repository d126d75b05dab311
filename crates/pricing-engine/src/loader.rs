//! 规则加载器
//!
//! 从 JSON 字符串或文件加载规则集，并提供内置的默认规则集。
//! 未识别的操作符/动作标签在解析时保留为 `Unrecognized`，不会让整个
//! 规则集加载失败；是否告警交给校验器。

use std::path::Path;

use tracing::info;

use crate::error::{EngineError, Result};
use crate::models::{Action, Condition, Rule};
use crate::operators::{ActionKind, Operator};

/// 规则加载器
pub struct RuleLoader;

impl RuleLoader {
    /// 从 JSON 字符串解析规则集（顶层为规则数组）
    pub fn from_json(json: &str) -> Result<Vec<Rule>> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        Ok(rules)
    }

    /// 从文件加载规则集
    pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<Rule>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| EngineError::RuleFileRead {
            path: path.display().to_string(),
            source,
        })?;

        let rules = Self::from_json(&content)?;
        info!(path = %path.display(), count = rules.len(), "规则集加载完成");
        Ok(rules)
    }
}

/// 内置默认规则集
///
/// 出厂配置：大客户附加费 + 增值服务，未提供规则文件时使用。
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Large company surcharge",
            vec![Condition::new("companySize", Operator::GreaterThan, 50)],
            vec![Action::new(ActionKind::Add, 120.0)],
        ),
        Rule::new(
            "Extra service",
            vec![Condition::new("extraService", Operator::Equal, true)],
            vec![Action::new(ActionKind::Add, 50.0)],
        ),
    ]
}
