//! Car Commands - 车辆登记与维修记录

use crate::domain::{ChaincodeFunction, LedgerArg};

use super::LedgerCommand;

/// 登记车辆
#[derive(Debug, Clone, Default)]
pub struct AddCar {
    pub vin: LedgerArg,
    pub owner: LedgerArg,
    pub model: LedgerArg,
}

impl LedgerCommand for AddCar {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::AddCar;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.vin, self.owner, self.model]
    }
}

/// 追加维修记录
#[derive(Debug, Clone, Default)]
pub struct AddCarRecord {
    pub vin: LedgerArg,
    pub record: LedgerArg,
}

impl LedgerCommand for AddCarRecord {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::AddCarRecord;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.vin, self.record]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_car_arg_order() {
        let cmd = AddCar {
            vin: "KMHxx".into(),
            owner: "kim".into(),
            model: "avante".into(),
        };
        let args: Vec<String> = cmd.into_args().into_iter().map(LedgerArg::into_inner).collect();
        assert_eq!(AddCar::FUNCTION.as_str(), "AddCar");
        assert_eq!(args, vec!["KMHxx", "kim", "avante"]);
    }

    #[test]
    fn test_add_car_record_arg_order() {
        let cmd = AddCarRecord {
            vin: "KMHxx".into(),
            record: "oil change".into(),
        };
        let args: Vec<String> = cmd.into_args().into_iter().map(LedgerArg::into_inner).collect();
        assert_eq!(AddCarRecord::FUNCTION.as_str(), "AddCarRecord");
        assert_eq!(args, vec!["KMHxx", "oil change"]);
    }
}
