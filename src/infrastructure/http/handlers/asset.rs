//! abstore HTTP Handlers

use axum::extract::State;
use std::sync::Arc;

use crate::application::{DeleteAsset, InitAssets, QueryAllAssets, QueryAsset, TransferValue};
use crate::infrastructure::http::dto::{InitParams, InvokeParams, NameParams};
use crate::infrastructure::http::extract::ApiQuery;
use crate::infrastructure::http::state::AppState;

use super::{reply, LedgerReply};

/// GET /init?a=&aval=&b=&bval=
pub async fn init(State(state): State<Arc<AppState>>, ApiQuery(params): ApiQuery<InitParams>) -> LedgerReply {
    let response = state.submit_handler.handle(InitAssets::from(params)).await?;
    Ok(reply(response))
}

/// GET /invoke?a=&b=&value=
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<InvokeParams>,
) -> LedgerReply {
    let response = state.submit_handler.handle(TransferValue::from(params)).await?;
    Ok(reply(response))
}

/// GET /query?name=
pub async fn query(State(state): State<Arc<AppState>>, ApiQuery(params): ApiQuery<NameParams>) -> LedgerReply {
    let response = state.evaluate_handler.handle(QueryAsset::from(params)).await?;
    Ok(reply(response))
}

/// GET /delete?name=
pub async fn delete(State(state): State<Arc<AppState>>, ApiQuery(params): ApiQuery<NameParams>) -> LedgerReply {
    let response = state.submit_handler.handle(DeleteAsset::from(params)).await?;
    Ok(reply(response))
}

/// GET /queryAll
pub async fn query_all(State(state): State<Arc<AppState>>) -> LedgerReply {
    let response = state.evaluate_handler.handle(QueryAllAssets).await?;
    Ok(reply(response))
}
