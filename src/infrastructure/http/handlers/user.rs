//! User HTTP Handlers

use axum::extract::State;
use std::sync::Arc;

use crate::application::{CreateUser, GetUser};
use crate::infrastructure::http::dto::{CreateUserRequest, UserIdParams};
use crate::infrastructure::http::extract::{ApiQuery, JsonOrForm};
use crate::infrastructure::http::state::AppState;

use super::{reply, LedgerReply};

/// POST /createUser  {userId, name}
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<CreateUserRequest>,
) -> LedgerReply {
    let response = state.submit_handler.handle(CreateUser::from(req)).await?;
    Ok(reply(response))
}

/// GET /getUser?userId=
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<UserIdParams>,
) -> LedgerReply {
    let query = GetUser::new(params.user_id)?;
    let response = state.evaluate_handler.handle(query).await?;
    Ok(reply(response))
}
