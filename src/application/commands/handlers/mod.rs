//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod blog_handlers;

pub use blog_handlers::*;
