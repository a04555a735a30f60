//! Car Queries

use crate::application::error::ApplicationError;
use crate::domain::{ChaincodeFunction, LedgerArg};

use super::LedgerQuery;

/// 查询车辆及其维修记录
///
/// 不变量: vin 非空
#[derive(Debug, Clone)]
pub struct GetCar {
    vin: LedgerArg,
}

impl GetCar {
    pub fn new(vin: LedgerArg) -> Result<Self, ApplicationError> {
        if vin.is_empty() {
            return Err(ApplicationError::missing_param("vin"));
        }
        Ok(Self { vin })
    }

    pub fn vin(&self) -> &LedgerArg {
        &self.vin
    }
}

impl LedgerQuery for GetCar {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::GetCar;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.vin]
    }
}
