//! Query Handlers 实现

mod evaluate_handlers;

pub use evaluate_handlers::*;
