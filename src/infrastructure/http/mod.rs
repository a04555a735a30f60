//! HTTP Layer - REST 网关
//!
//! 路由参数 → 命令/查询 → 账本调用，以及 client 目录静态文件

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
