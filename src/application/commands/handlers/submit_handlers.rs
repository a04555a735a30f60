//! Submit Handlers - 以 submit 模式发送命令

use std::sync::Arc;

use crate::application::commands::LedgerCommand;
use crate::application::error::ApplicationError;
use crate::application::ports::{LedgerPort, LedgerResponse};
use crate::domain::LedgerCall;

/// SubmitTransaction Handler
pub struct SubmitTransactionHandler {
    ledger: Arc<dyn LedgerPort>,
}

impl SubmitTransactionHandler {
    pub fn new(ledger: Arc<dyn LedgerPort>) -> Self {
        Self { ledger }
    }

    pub async fn handle<C: LedgerCommand>(
        &self,
        command: C,
    ) -> Result<LedgerResponse, ApplicationError> {
        let call = LedgerCall::submit(C::FUNCTION, command.into_args());

        tracing::info!(
            function = %call.function,
            mode = %call.mode,
            arg_count = call.args.len(),
            "Submitting transaction"
        );
        tracing::debug!(args = ?call.args, "Transaction args");

        let function = call.function;
        let response = self.ledger.send(call).await.map_err(|e| {
            tracing::warn!(function = %function, error = %e, "Transaction submit failed");
            ApplicationError::from(e)
        })?;

        tracing::info!(
            function = %function,
            transaction_id = ?response.transaction_id,
            "Transaction committed"
        );

        Ok(response)
    }
}
