//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（BlogStore）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CreateBlogHandler, DeleteBlogHandler, UpdateBlogHandler},
    CreateBlog, DeleteBlog, UpdateBlog,
};

pub use error::ApplicationError;

pub use ports::BlogStorePort;

pub use queries::{
    handlers::{GetBlogHandler, ListBlogsHandler},
    GetBlog, ListBlogs,
};
