//! Points Commands - 积分发放与消费

use crate::domain::{ChaincodeFunction, LedgerArg};

use super::LedgerCommand;

/// 领取积分
#[derive(Debug, Clone, Default)]
pub struct ReceivePoints {
    pub vin: LedgerArg,
    pub points: LedgerArg,
}

impl LedgerCommand for ReceivePoints {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::ReceivePoints;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.vin, self.points]
    }
}

/// 使用积分
///
/// 余额不足由链码拒绝，网关不做检查
#[derive(Debug, Clone, Default)]
pub struct PayPoints {
    pub vin: LedgerArg,
    pub points: LedgerArg,
}

impl LedgerCommand for PayPoints {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::PayPoints;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.vin, self.points]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_commands_share_order() {
        let receive = ReceivePoints {
            vin: "V1".into(),
            points: "30".into(),
        };
        let pay = PayPoints {
            vin: "V1".into(),
            points: "30".into(),
        };
        assert_eq!(ReceivePoints::FUNCTION, ChaincodeFunction::ReceivePoints);
        assert_eq!(PayPoints::FUNCTION, ChaincodeFunction::PayPoints);
        assert_eq!(receive.into_args(), pay.into_args());
    }
}
