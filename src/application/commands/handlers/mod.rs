//! Command Handlers 实现

mod submit_handlers;

pub use submit_handlers::*;
