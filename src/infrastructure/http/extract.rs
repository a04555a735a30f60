//! Request Extractors
//!
//! - JsonOrForm: POST 接口同时接受 JSON 和 urlencoded 表单
//! - ApiQuery: query string 解析失败时也返回统一错误格式

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// JSON 或表单请求体
///
/// - 没有 Content-Type：按空请求体处理，所有参数取默认值（空字符串）
/// - urlencoded：按表单解析
/// - 其它：交给 axum 的 Json 判断，不是 JSON 类型时返回 415
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = match req.headers().get(CONTENT_TYPE) {
            None => return Ok(Self(T::default())),
            Some(value) => value
                .to_str()
                .map(|s| s.to_ascii_lowercase())
                .map_err(|_| ApiError::BadRequest("Invalid Content-Type header".to_string()))?,
        };

        if content_type.starts_with(FORM_CONTENT_TYPE) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return Ok(Self(value));
        }

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                Err(ApiError::UnsupportedMediaType(format!(
                    "Unsupported content type: {:?}, expected JSON or {}",
                    content_type, FORM_CONTENT_TYPE
                )))
            }
            Err(e) => Err(ApiError::BadRequest(e.body_text())),
        }
    }
}

/// Query string 参数
///
/// 与 axum 的 Query 相同，解析失败时返回 ApiError::BadRequest
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(value))
    }
}
