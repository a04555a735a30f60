//! carledger - 车辆账本 REST 网关
//!
//! 把 REST 请求翻译成链码的 submit/evaluate 调用，交给外部账本 SDK 执行。
//! 网关本身不持有任何业务状态。
//!
//! 领域层 (domain/):
//! - Ledger Context: 链码函数名、调用模式、位置参数
//!
//! 应用层 (application/):
//! - Ports: LedgerPort
//! - Commands: 写命令（submit）
//! - Queries: 读查询（evaluate）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: REST 路由 + 静态文件
//! - Adapters: HTTP 账本客户端、Fake 账本客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
