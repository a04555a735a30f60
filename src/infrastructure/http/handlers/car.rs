//! Car HTTP Handlers

use axum::extract::State;
use std::sync::Arc;

use crate::application::{AddCar, AddCarRecord, GetCar};
use crate::infrastructure::http::dto::{AddCarRecordRequest, AddCarRequest, VinParams};
use crate::infrastructure::http::extract::{ApiQuery, JsonOrForm};
use crate::infrastructure::http::state::AppState;

use super::{reply, LedgerReply};

/// POST /addCar  {vin, owner, model}
pub async fn add_car(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<AddCarRequest>,
) -> LedgerReply {
    let response = state.submit_handler.handle(AddCar::from(req)).await?;
    Ok(reply(response))
}

/// POST /addCarRecord  {vin, record}
pub async fn add_car_record(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<AddCarRecordRequest>,
) -> LedgerReply {
    let response = state.submit_handler.handle(AddCarRecord::from(req)).await?;
    Ok(reply(response))
}

/// GET /getCar?vin=
///
/// vin 必填，缺失时返回 400
pub async fn get_car(State(state): State<Arc<AppState>>, ApiQuery(params): ApiQuery<VinParams>) -> LedgerReply {
    let query = GetCar::new(params.vin)?;
    let response = state.evaluate_handler.handle(query).await?;
    Ok(reply(response))
}
