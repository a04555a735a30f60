//! Evaluate Handlers - 以 evaluate 模式发送查询

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{LedgerPort, LedgerResponse};
use crate::application::queries::LedgerQuery;
use crate::domain::LedgerCall;

/// EvaluateTransaction Handler
pub struct EvaluateTransactionHandler {
    ledger: Arc<dyn LedgerPort>,
}

impl EvaluateTransactionHandler {
    pub fn new(ledger: Arc<dyn LedgerPort>) -> Self {
        Self { ledger }
    }

    pub async fn handle<Q: LedgerQuery>(&self, query: Q) -> Result<LedgerResponse, ApplicationError> {
        let call = LedgerCall::evaluate(Q::FUNCTION, query.into_args());

        tracing::debug!(
            function = %call.function,
            args = ?call.args,
            "Evaluating transaction"
        );

        let function = call.function;
        self.ledger.send(call).await.map_err(|e| {
            tracing::warn!(function = %function, error = %e, "Transaction evaluate failed");
            ApplicationError::from(e)
        })
    }
}
