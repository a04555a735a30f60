//! Ledger Adapter - 账本 SDK 客户端实现

mod fake_ledger_client;
mod http_ledger_client;

pub use fake_ledger_client::FakeLedgerClient;
pub use http_ledger_client::*;
