//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 账本 SDK 端口
//! - commands: 写命令（submit）及处理器
//! - queries: 读查询（evaluate）及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::SubmitTransactionHandler, AddCar, AddCarRecord, CreateUser, DeleteAsset, InitAssets,
    LedgerCommand, PayPoints, ReceivePoints, TransferValue,
};

pub use error::ApplicationError;

pub use ports::{LedgerError, LedgerPort, LedgerResponse};

pub use queries::{
    handlers::EvaluateTransactionHandler, GetCar, GetUser, LedgerQuery, QueryAllAssets, QueryAsset,
};
