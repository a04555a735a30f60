//! User Commands

use crate::domain::{ChaincodeFunction, LedgerArg};

use super::LedgerCommand;

/// 创建积分用户（初始余额为 0）
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub user_id: LedgerArg,
    pub name: LedgerArg,
}

impl LedgerCommand for CreateUser {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::CreateUser;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.user_id, self.name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_arg_order() {
        let cmd = CreateUser {
            user_id: "u-1".into(),
            name: "lee".into(),
        };
        assert_eq!(cmd.into_args(), vec![LedgerArg::from("u-1"), LedgerArg::from("lee")]);
    }
}
