//! Ping Handler
//!
//! 健康检查

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// 账本健康状态
#[derive(Serialize)]
pub struct LedgerHealthResponse {
    pub ledger: &'static str,
}

/// Ping endpoint - 网关存活
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 账本服务是否可达
pub async fn ping_ledger(State(state): State<Arc<AppState>>) -> Json<LedgerHealthResponse> {
    let ledger = if state.ledger.health_check().await {
        "up"
    } else {
        "down"
    };
    Json(LedgerHealthResponse { ledger })
}
