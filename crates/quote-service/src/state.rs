//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use pricing_engine::{PricingEngine, Rule};

use crate::config::PricingConfig;

/// Axum 应用共享状态
///
/// 规则集启动时加载一次，通过 Arc 在 handler 间共享；
/// 引擎无内部状态，每个请求独立计算。
#[derive(Clone)]
pub struct AppState {
    pub engine: PricingEngine,
    pub rules: Arc<Vec<Rule>>,
    pub base_price: f64,
    pub currency: String,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(rules: Vec<Rule>, pricing: &PricingConfig) -> Self {
        Self {
            engine: PricingEngine::new(),
            rules: Arc::new(rules),
            base_price: pricing.base_price,
            currency: pricing.currency.clone(),
        }
    }
}
