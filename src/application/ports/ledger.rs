//! Ledger Port - 账本 SDK 抽象
//!
//! 定义提交/查询交易的抽象接口，具体实现在 infrastructure/adapters 层。
//! 身份、钱包、Peer 连接、背书策略都属于 SDK 一侧，网关只负责转发。

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::LedgerCall;

/// 账本错误
#[derive(Debug, Error)]
pub enum LedgerError {
    /// SDK 服务返回非 2xx（链码错误、背书失败等）
    #[error("Ledger rejected call: HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    #[error("Ledger request timeout")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 账本响应
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerResponse {
    /// 交易 ID（evaluate 通常没有）
    pub transaction_id: Option<String>,
    /// 链码返回值，非 JSON 时为字符串
    pub payload: Value,
}

impl LedgerResponse {
    pub fn new(transaction_id: Option<String>, payload: Value) -> Self {
        Self {
            transaction_id,
            payload,
        }
    }
}

/// Ledger Port
///
/// 对应外部 SDK 的单一调用入口
#[async_trait]
pub trait LedgerPort: Send + Sync {
    /// 发送一次账本调用
    ///
    /// `call.mode` 决定提交交易还是只读查询
    async fn send(&self, call: LedgerCall) -> Result<LedgerResponse, LedgerError>;

    /// 检查账本服务是否可用
    async fn health_check(&self) -> bool {
        true
    }
}
