//! Ledger Context - 账本调用限界上下文
//!
//! 职责:
//! - 链码函数名与调用模式
//! - 路由参数到位置参数的显式映射载体

mod call;
mod value_objects;

pub use call::LedgerCall;
pub use value_objects::{CallMode, ChaincodeFunction, LedgerArg};
