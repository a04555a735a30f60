//! Application Ports - 出站端口定义
//!
//! 网关只有一个出站端口：账本 SDK

mod ledger;

pub use ledger::{LedgerError, LedgerPort, LedgerResponse};
