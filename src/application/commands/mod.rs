//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：所有命令都以 submit 模式发往账本

mod asset_commands;
mod car_commands;
mod points_commands;
mod user_commands;

pub mod handlers;

pub use asset_commands::*;
pub use car_commands::*;
pub use points_commands::*;
pub use user_commands::*;

use crate::domain::{ChaincodeFunction, LedgerArg};

/// 账本写命令
///
/// 每个命令自己声明链码函数名和参数顺序，实现了本 trait 的类型
/// 一定以 submit 模式发送
pub trait LedgerCommand: Send {
    const FUNCTION: ChaincodeFunction;

    /// 按链码参数顺序展开
    fn into_args(self) -> Vec<LedgerArg>;
}
