//! Points HTTP Handlers

use axum::extract::State;
use std::sync::Arc;

use crate::application::{PayPoints, ReceivePoints};
use crate::infrastructure::http::dto::PointsRequest;
use crate::infrastructure::http::extract::JsonOrForm;
use crate::infrastructure::http::state::AppState;

use super::{reply, LedgerReply};

/// POST /receivePoints  {vin, points}
pub async fn receive_points(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<PointsRequest>,
) -> LedgerReply {
    let response = state.submit_handler.handle(ReceivePoints::from(req)).await?;
    Ok(reply(response))
}

/// POST /payPoints  {vin, points}
pub async fn pay_points(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<PointsRequest>,
) -> LedgerReply {
    let response = state.submit_handler.handle(PayPoints::from(req)).await?;
    Ok(reply(response))
}
