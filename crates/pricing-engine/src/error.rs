//! 定价引擎错误类型
//!
//! 评估本身是全函数不会失败，错误只出现在规则加载边界。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("规则文件读取失败 {path}: {source}")]
    RuleFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("规则 JSON 解析失败: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
