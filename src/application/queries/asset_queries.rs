//! Asset Queries - abstore 键值查询

use crate::domain::{ChaincodeFunction, LedgerArg};

use super::LedgerQuery;

/// 查询单个账户
#[derive(Debug, Clone, Default)]
pub struct QueryAsset {
    pub name: LedgerArg,
}

impl LedgerQuery for QueryAsset {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::Query;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.name]
    }
}

/// 查询全部账户
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryAllAssets;

impl LedgerQuery for QueryAllAssets {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::GetAllQuery;

    fn into_args(self) -> Vec<LedgerArg> {
        Vec::new()
    }
}
