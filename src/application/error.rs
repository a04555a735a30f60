//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::LedgerError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（缺少必填参数）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 账本拒绝调用，status 原样透传
    #[error("Ledger rejected call: HTTP {status}: {message}")]
    LedgerRejected { status: u16, message: String },

    /// 账本服务不可用
    #[error("Ledger unavailable: {0}")]
    LedgerUnavailable(String),

    /// 账本请求超时
    #[error("Ledger request timeout")]
    LedgerTimeout,

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 缺少必填参数
    pub fn missing_param(name: &str) -> Self {
        Self::ValidationError(format!("{} is required", name))
    }
}

impl From<LedgerError> for ApplicationError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Rejected { status, message } => Self::LedgerRejected { status, message },
            LedgerError::Unavailable(msg) => Self::LedgerUnavailable(msg),
            LedgerError::Timeout => Self::LedgerTimeout,
            LedgerError::Transport(msg) => Self::LedgerUnavailable(msg),
            LedgerError::InvalidResponse(msg) => Self::InternalError(msg),
        }
    }
}
