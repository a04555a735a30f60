//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Ledger Context: 账本调用描述（函数名、模式、参数）
//!
//! 网关不拥有任何业务实体，车辆、积分等状态全部在链码里。

pub mod ledger;

pub use ledger::{CallMode, ChaincodeFunction, LedgerArg, LedgerCall};
