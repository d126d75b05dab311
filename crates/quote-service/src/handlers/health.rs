//! 健康检查与根路由处理器

use axum::Json;
use serde_json::{json, Value};

/// 根路由横幅
///
/// GET /
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "QuotePilot API running 🚀" }))
}

/// 健康检查
///
/// GET /api/health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
