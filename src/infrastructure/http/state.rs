//! Application State
//!
//! 所有请求共享的只读句柄，请求之间没有可变共享状态

use std::sync::Arc;

use crate::application::{EvaluateTransactionHandler, LedgerPort, SubmitTransactionHandler};

/// 应用状态
pub struct AppState {
    pub ledger: Arc<dyn LedgerPort>,
    pub submit_handler: SubmitTransactionHandler,
    pub evaluate_handler: EvaluateTransactionHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(ledger: Arc<dyn LedgerPort>) -> Self {
        Self {
            ledger: ledger.clone(),
            submit_handler: SubmitTransactionHandler::new(ledger.clone()),
            evaluate_handler: EvaluateTransactionHandler::new(ledger),
        }
    }
}
