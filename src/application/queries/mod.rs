//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：所有查询都以 evaluate 模式发往账本，不产生交易

mod asset_queries;
mod car_queries;
mod user_queries;

pub mod handlers;

pub use asset_queries::*;
pub use car_queries::*;
pub use user_queries::*;

use crate::domain::{ChaincodeFunction, LedgerArg};

/// 账本只读查询
pub trait LedgerQuery: Send {
    const FUNCTION: ChaincodeFunction;

    /// 按链码参数顺序展开
    fn into_args(self) -> Vec<LedgerArg>;
}
