//! Fake Ledger Client - 用于测试和本地开发的账本客户端
//!
//! 记录收到的每一次调用，返回固定的 payload，不模拟链码逻辑

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

use crate::application::ports::{LedgerError, LedgerPort, LedgerResponse};
use crate::domain::{CallMode, LedgerCall};

/// Fake Ledger Client
pub struct FakeLedgerClient {
    calls: Mutex<Vec<LedgerCall>>,
    payload: Value,
    /// 设置后所有调用都以该 (status, message) 被拒绝
    failure: Option<(u16, String)>,
}

impl Default for FakeLedgerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeLedgerClient {
    pub fn new() -> Self {
        tracing::info!("FakeLedgerClient initialized, ledger calls will only be recorded");
        Self {
            calls: Mutex::new(Vec::new()),
            payload: json!({ "ok": true }),
            failure: None,
        }
    }

    /// 固定返回的 payload
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// 让所有调用失败
    pub fn failing_with(mut self, status: u16, message: impl Into<String>) -> Self {
        self.failure = Some((status, message.into()));
        self
    }

    /// 已收到的全部调用（按到达顺序）
    pub fn calls(&self) -> Vec<LedgerCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// 最后一次调用
    pub fn last_call(&self) -> Option<LedgerCall> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }
}

#[async_trait]
impl LedgerPort for FakeLedgerClient {
    async fn send(&self, call: LedgerCall) -> Result<LedgerResponse, LedgerError> {
        tracing::debug!(call = %call, "FakeLedgerClient: recording call");

        let mode = call.mode;
        self.calls
            .lock()
            .map_err(|e| LedgerError::Transport(format!("call log poisoned: {}", e)))?
            .push(call);

        if let Some((status, message)) = &self.failure {
            return Err(LedgerError::Rejected {
                status: *status,
                message: message.clone(),
            });
        }

        let transaction_id = match mode {
            CallMode::Submit => Some(uuid::Uuid::new_v4().simple().to_string()),
            CallMode::Evaluate => None,
        };

        Ok(LedgerResponse::new(transaction_id, self.payload.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChaincodeFunction;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let fake = FakeLedgerClient::new();
        fake.send(LedgerCall::submit(ChaincodeFunction::Init, vec![]))
            .await
            .unwrap();
        fake.send(LedgerCall::evaluate(ChaincodeFunction::GetAllQuery, vec![]))
            .await
            .unwrap();

        let functions: Vec<_> = fake.calls().into_iter().map(|c| c.function).collect();
        assert_eq!(
            functions,
            vec![ChaincodeFunction::Init, ChaincodeFunction::GetAllQuery]
        );
    }

    #[tokio::test]
    async fn test_only_submit_gets_transaction_id() {
        let fake = FakeLedgerClient::new();
        let submitted = fake
            .send(LedgerCall::submit(ChaincodeFunction::Delete, vec!["a".into()]))
            .await
            .unwrap();
        let evaluated = fake
            .send(LedgerCall::evaluate(ChaincodeFunction::Query, vec!["a".into()]))
            .await
            .unwrap();

        assert_eq!(submitted.transaction_id.map(|id| id.len()), Some(32));
        assert!(evaluated.transaction_id.is_none());
    }

    #[tokio::test]
    async fn test_failure_still_records_call() {
        let fake = FakeLedgerClient::new().failing_with(503, "peer down");
        let result = fake
            .send(LedgerCall::evaluate(ChaincodeFunction::GetCar, vec!["V1".into()]))
            .await;

        assert!(matches!(result, Err(LedgerError::Rejected { status: 503, .. })));
        assert_eq!(fake.calls().len(), 1);
    }
}
