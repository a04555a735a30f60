//! User Queries

use crate::application::error::ApplicationError;
use crate::domain::{ChaincodeFunction, LedgerArg};

use super::LedgerQuery;

/// 查询积分用户
#[derive(Debug, Clone)]
pub struct GetUser {
    user_id: LedgerArg,
}

impl GetUser {
    pub fn new(user_id: LedgerArg) -> Result<Self, ApplicationError> {
        if user_id.is_empty() {
            return Err(ApplicationError::missing_param("userId"));
        }
        Ok(Self { user_id })
    }
}

impl LedgerQuery for GetUser {
    const FUNCTION: ChaincodeFunction = ChaincodeFunction::GetUser;

    fn into_args(self) -> Vec<LedgerArg> {
        vec![self.user_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_user_requires_id() {
        assert!(GetUser::new(LedgerArg::default()).is_err());
        let query = GetUser::new("u-1".into()).unwrap();
        assert_eq!(query.into_args(), vec![LedgerArg::from("u-1")]);
    }
}
