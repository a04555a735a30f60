//! HTTP Handlers
//!
//! 每个 handler 只做三件事：按名字取参数、转成命令/查询、转发给账本

mod asset;
mod car;
mod ping;
mod points;
mod user;

pub use asset::*;
pub use car::*;
pub use ping::*;
pub use points::*;
pub use user::*;

use axum::Json;

use crate::application::LedgerResponse;
use crate::infrastructure::http::dto::{ApiResponse, TransactionResult};
use crate::infrastructure::http::error::ApiError;

/// 账本调用类接口的统一返回类型
pub type LedgerReply = Result<Json<ApiResponse<TransactionResult>>, ApiError>;

fn reply(response: LedgerResponse) -> Json<ApiResponse<TransactionResult>> {
    Json(ApiResponse::success(TransactionResult::from(response)))
}
