//! 路由配置模块
//!
//! 定义 API 端点的路由映射并装配中间件层。

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::{handlers, state::AppState};

/// 构建 API 路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::index))
        .route("/api/health", get(handlers::health::health_check))
        .route("/api/quote", post(handlers::quote::create_quote))
}

/// 构建完整的应用路由（路由 + CORS + 请求日志）
pub fn build_router(state: AppState, allowed_origins: &str) -> Router {
    api_routes()
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS 配置
///
/// 逗号分隔的来源列表；"*" 放开所有来源（此时不能携带凭证）。
fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE];
    let headers = [header::CONTENT_TYPE, header::AUTHORIZATION];

    if allowed_origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|origin| {
            let origin = origin.trim();
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin, "无效的 CORS 来源，已忽略");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
}
