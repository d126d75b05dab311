//! QuotePilot 报价服务
//!
//! 定价引擎的 HTTP 外壳：接收客户答案，返回报价总额与明细。
//!
//! ## 模块结构
//!
//! - `config`: 分层配置加载
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由与中间件装配
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 配置：config（TOML + 环境变量）
//! - 日志：tracing / tracing-subscriber

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, PricingConfig};
pub use error::{ApiError, Result};
pub use state::AppState;
