//! Asset Commands - abstore 键值操作

use crate::domain::{ChaincodeFunction, LedgerArg};

use super::LedgerCommand;

/// 初始化两个账户及余额
#[derive(Debug, Clone, Default)]
pub struct InitAssets {
    pub a: LedgerArg,
    pub a_value: LedgerArg,
    pub b: LedgerArg,
    pub b_value: LedgerArg,
}

impl LedgerCommand for InitAssets {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::Init;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.a, self.a_value, self.b, self.b_value]
    }
}

/// 从 from 向 to 转移 value
#[derive(Debug, Clone, Default)]
pub struct TransferValue {
    pub from: LedgerArg,
    pub to: LedgerArg,
    pub value: LedgerArg,
}

impl LedgerCommand for TransferValue {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::Invoke;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.from, self.to, self.value]
    }
}

/// 删除账户
#[derive(Debug, Clone, Default)]
pub struct DeleteAsset {
    pub name: LedgerArg,
}

impl LedgerCommand for DeleteAsset {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::Delete;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<LedgerArg>) -> Vec<String> {
        args.into_iter().map(LedgerArg::into_inner).collect()
    }

    #[test]
    fn test_init_arg_order() {
        let cmd = InitAssets {
            a: "a".into(),
            a_value: "100".into(),
            b: "b".into(),
            b_value: "200".into(),
        };
        assert_eq!(InitAssets::FUNCTION, ChaincodeFunction::Init);
        assert_eq!(strings(cmd.into_args()), vec!["a", "100", "b", "200"]);
    }

    #[test]
    fn test_transfer_arg_order() {
        let cmd = TransferValue {
            from: "a".into(),
            to: "b".into(),
            value: "10".into(),
        };
        assert_eq!(TransferValue::FUNCTION, ChaincodeFunction::Invoke);
        assert_eq!(strings(cmd.into_args()), vec!["a", "b", "10"]);
    }

    #[test]
    fn test_delete_args() {
        let cmd = DeleteAsset { name: "a".into() };
        assert_eq!(DeleteAsset::FUNCTION, ChaincodeFunction::Delete);
        assert_eq!(strings(cmd.into_args()), vec!["a"]);
    }
}
