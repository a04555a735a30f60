//! Ledger Context - LedgerCall

use serde::Serialize;

use super::value_objects::{CallMode, ChaincodeFunction, LedgerArg};

/// 一次账本调用的完整描述
///
/// 不变量:
/// - args 的顺序即链码函数的参数顺序
/// - mode 决定走 submit 还是 evaluate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerCall {
    pub mode: CallMode,
    pub function: ChaincodeFunction,
    pub args: Vec<String>,
}

impl LedgerCall {
    pub fn new(mode: CallMode, function: ChaincodeFunction, args: Vec<LedgerArg>) -> Self {
        Self {
            mode,
            function,
            args: args.into_iter().map(LedgerArg::into_inner).collect(),
        }
    }

    /// 提交交易
    pub fn submit(function: ChaincodeFunction, args: Vec<LedgerArg>) -> Self {
        Self::new(CallMode::Submit, function, args)
    }

    /// 只读查询
    pub fn evaluate(function: ChaincodeFunction, args: Vec<LedgerArg>) -> Self {
        Self::new(CallMode::Evaluate, function, args)
    }
}

impl std::fmt::Display for LedgerCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}({})", self.mode, self.function, self.args.join(", "))
    }
}
