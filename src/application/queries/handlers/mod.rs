//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod blog_handlers;

pub use blog_handlers::*;
