//! HTTP Ledger Client - 调用外部账本 SDK 服务
//!
//! 实现 LedgerPort trait，通过 HTTP 把调用转给持有身份与 Peer 连接的 SDK 服务
//!
//! 外部 SDK API:
//! POST {base_url}/transactions/submit
//! POST {base_url}/transactions/evaluate
//! Request: {"channel": "...", "chaincode": "...", "function": "AddCar", "args": ["..."]}
//! Response: 链码返回值（JSON 或纯文本），交易 ID 在 X-Transaction-Id header

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{LedgerError, LedgerPort, LedgerResponse};
use crate::domain::{CallMode, LedgerCall};

/// 交易 ID 响应头
pub const TRANSACTION_ID_HEADER: &str = "X-Transaction-Id";

/// 交易请求体 (JSON)
#[derive(Debug, Serialize)]
struct TransactionHttpRequest<'a> {
    channel: &'a str,
    chaincode: &'a str,
    function: &'static str,
    args: &'a [String],
}

/// HTTP 账本客户端配置
#[derive(Debug, Clone)]
pub struct HttpLedgerClientConfig {
    /// SDK 服务基础 URL
    pub base_url: String,
    /// 通道名
    pub channel: String,
    /// 链码名
    pub chaincode: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpLedgerClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            channel: "mychannel".to_string(),
            chaincode: "abstore".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpLedgerClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_chaincode(mut self, channel: impl Into<String>, chaincode: impl Into<String>) -> Self {
        self.channel = channel.into();
        self.chaincode = chaincode.into();
        self
    }
}

/// HTTP 账本客户端
pub struct HttpLedgerClient {
    client: Client,
    config: HttpLedgerClientConfig,
}

impl HttpLedgerClient {
    /// 创建新的 HTTP 账本客户端
    pub fn new(config: HttpLedgerClientConfig) -> Result<Self, LedgerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// 获取交易 URL
    fn transaction_url(&self, mode: CallMode) -> String {
        format!("{}/transactions/{}", self.base_url(), mode.as_str())
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/health", self.base_url())
    }
}

/// 链码返回值：能解析成 JSON 就用 JSON，否则按字符串透传
fn parse_payload(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[async_trait]
impl LedgerPort for HttpLedgerClient {
    async fn send(&self, call: LedgerCall) -> Result<LedgerResponse, LedgerError> {
        let url = self.transaction_url(call.mode);
        let http_request = TransactionHttpRequest {
            channel: &self.config.channel,
            chaincode: &self.config.chaincode,
            function: call.function.as_str(),
            args: &call.args,
        };

        tracing::debug!(
            url = %url,
            function = %call.function,
            arg_count = call.args.len(),
            "Sending ledger request"
        );

        let response = self
            .client
            .post(&url)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LedgerError::Timeout
                } else if e.is_connect() {
                    LedgerError::Unavailable(format!("Cannot connect to ledger service: {}", e))
                } else {
                    LedgerError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let transaction_id = response
            .headers()
            .get(TRANSACTION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response
            .text()
            .await
            .map_err(|e| LedgerError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(LedgerError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        tracing::debug!(
            function = %call.function,
            transaction_id = ?transaction_id,
            body_len = body.len(),
            "Ledger request completed"
        );

        Ok(LedgerResponse::new(transaction_id, parse_payload(&body)))
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(&self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChaincodeFunction, LedgerArg};
    use axum::{
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    /// 本地 SDK 服务：submit 带交易 ID，evaluate 返回纯文本或 404，/slow 超时
    async fn spawn_sdk() -> String {
        async fn submit(Json(body): Json<Value>) -> impl IntoResponse {
            let mut headers = HeaderMap::new();
            headers.insert(TRANSACTION_ID_HEADER, "tx1".parse().unwrap());
            (headers, Json(json!({"function": body["function"], "args": body["args"]})))
        }

        async fn evaluate(Json(body): Json<Value>) -> impl IntoResponse {
            if body["args"][0] == "missing" {
                (StatusCode::NOT_FOUND, "Car not found".to_string())
            } else {
                (StatusCode::OK, format!("plain {}", body["args"][0].as_str().unwrap_or_default()))
            }
        }

        async fn slow() -> &'static str {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "late"
        }

        let router = Router::new()
            .route("/transactions/submit", post(submit))
            .route("/transactions/evaluate", post(evaluate))
            .route("/slow/transactions/submit", post(slow))
            .route("/health", get(|| async { "ok" }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: String) -> HttpLedgerClient {
        HttpLedgerClient::new(HttpLedgerClientConfig::new(base_url).with_timeout(1)).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = HttpLedgerClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.channel, "mychannel");
        assert_eq!(config.chaincode, "abstore");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpLedgerClientConfig::new("http://sdk:9000")
            .with_timeout(5)
            .with_chaincode("carchannel", "carcc");
        assert_eq!(config.base_url, "http://sdk:9000");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.channel, "carchannel");
        assert_eq!(config.chaincode, "carcc");
    }

    #[test]
    fn test_transaction_urls() {
        let client = HttpLedgerClient::new(HttpLedgerClientConfig::new("http://sdk:9000/")).unwrap();
        assert_eq!(
            client.transaction_url(CallMode::Submit),
            "http://sdk:9000/transactions/submit"
        );
        assert_eq!(
            client.transaction_url(CallMode::Evaluate),
            "http://sdk:9000/transactions/evaluate"
        );
        assert_eq!(client.health_url(), "http://sdk:9000/health");
    }

    #[test]
    fn test_request_body_shape() {
        let args = vec!["V1".to_string(), "10".to_string()];
        let body = TransactionHttpRequest {
            channel: "mychannel",
            chaincode: "abstore",
            function: "ReceivePoints",
            args: &args,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "channel": "mychannel",
                "chaincode": "abstore",
                "function": "ReceivePoints",
                "args": ["V1", "10"]
            })
        );
    }

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload(r#"{"carId":"V1"}"#), json!({"carId": "V1"}));
        assert_eq!(parse_payload("100"), json!(100));
        assert_eq!(parse_payload("Car not found"), json!("Car not found"));
        assert_eq!(parse_payload(""), Value::Null);
    }

    #[tokio::test]
    async fn test_submit_reads_transaction_id() {
        let client = client(spawn_sdk().await);
        let call = LedgerCall::submit(
            ChaincodeFunction::AddCar,
            vec!["KMH1".into(), "park".into(), "ioniq".into()],
        );

        let response = client.send(call).await.unwrap();

        assert_eq!(response.transaction_id.as_deref(), Some("tx1"));
        assert_eq!(
            response.payload,
            json!({"function": "AddCar", "args": ["KMH1", "park", "ioniq"]})
        );
    }

    #[tokio::test]
    async fn test_evaluate_passes_plain_text_through() {
        let client = client(spawn_sdk().await);
        let call = LedgerCall::evaluate(ChaincodeFunction::GetCar, vec!["KMH1".into()]);

        let response = client.send(call).await.unwrap();

        assert!(response.transaction_id.is_none());
        assert_eq!(response.payload, json!("plain KMH1"));
    }

    #[tokio::test]
    async fn test_rejection_status_and_body_are_kept() {
        let client = client(spawn_sdk().await);
        let call = LedgerCall::evaluate(ChaincodeFunction::GetCar, vec!["missing".into()]);

        match client.send(call).await {
            Err(LedgerError::Rejected { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Car not found");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let client = client(format!("{}/slow", spawn_sdk().await));
        let call = LedgerCall::submit(ChaincodeFunction::Delete, vec!["a".into()]);

        assert!(matches!(client.send(call).await, Err(LedgerError::Timeout)));
    }

    #[tokio::test]
    async fn test_unused_port_is_unavailable() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client(format!("http://127.0.0.1:{}", port));
        let call = LedgerCall::evaluate(ChaincodeFunction::GetAllQuery, Vec::<LedgerArg>::new());

        assert!(matches!(client.send(call).await, Err(LedgerError::Unavailable(_))));
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn test_health_check() {
        let client = client(spawn_sdk().await);
        assert!(client.health_check().await);
    }
}
