//! 报价 API 处理器
//!
//! 接收客户的配置答案，调用定价引擎生成报价。

use axum::{extract::State, Json};
use pricing_engine::{AnswerSet, BreakdownItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// 报价请求体
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// 客户答案，任意键值对；缺失时返回 400
    pub answers: Option<Value>,
}

/// 报价响应体（与前端约定的线上格式，quote 内字段为 camelCase）
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub quote: QuoteBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBody {
    pub total_price: f64,
    pub currency: String,
    pub breakdown: Vec<BreakdownItem>,
}

/// 生成报价
///
/// POST /api/quote
pub async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let answers_value = req.answers.ok_or(ApiError::MissingAnswers)?;

    // 非对象输入得到空答案集：规则都不命中，返回基础价
    let answers = AnswerSet::from_value(answers_value);

    let result = state
        .engine
        .quote(&state.rules, &answers, state.base_price);

    info!(
        total = result.total,
        items = result.breakdown.len(),
        currency = %state.currency,
        "报价生成"
    );

    Ok(Json(QuoteResponse {
        success: true,
        quote: QuoteBody {
            total_price: result.total,
            currency: state.currency.clone(),
            breakdown: result.breakdown,
        },
    }))
}
