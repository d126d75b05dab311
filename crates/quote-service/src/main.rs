//! QuotePilot 报价服务入口
//!
//! 加载配置与规则集，启动 HTTP 服务。

use pricing_engine::{default_rules, RuleLoader, RuleValidator};
use quote_service::{config::AppConfig, routes, state::AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("quote-service").unwrap_or_default();

    // RUST_LOG 优先，否则使用配置中的级别
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting quote-service on {}", config.server_addr());

    // 规则集：配置了文件路径则从文件加载，失败时退回内置默认规则集。
    // 单个坏文件不应让报价服务起不来。
    let rules = match &config.pricing.rules_path {
        Some(path) => match RuleLoader::from_file(path) {
            Ok(rules) => rules,
            Err(e) => {
                warn!(path = %path, error = %e, "规则文件加载失败，使用内置默认规则集");
                default_rules()
            }
        },
        None => default_rules(),
    };

    // 配置时预检：问题只告警，不阻止启动（评估路径 fail-closed）
    let issues = RuleValidator::validate(&rules);
    if !issues.is_empty() {
        warn!(count = issues.len(), "规则集存在配置问题，相关条件/动作将不生效");
    }

    info!(
        rules = rules.len(),
        base_price = config.pricing.base_price,
        currency = %config.pricing.currency,
        "规则集就绪"
    );

    if config.is_production() && config.cors_origins.trim() == "*" {
        warn!("cors_origins=\"*\" 在生产环境中不安全，请设置为具体域名");
    }

    let state = AppState::new(rules, &config.pricing);
    let router = routes::build_router(state, &config.cors_origins);

    let listener = TcpListener::bind(config.server_addr()).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
