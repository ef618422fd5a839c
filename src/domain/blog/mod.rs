//! Blog Context - 博客限界上下文
//!
//! 职责:
//! - Blog 聚合管理
//! - 创建草稿校验与部分更新

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Blog;
pub use errors::BlogError;
pub use value_objects::{BlogDraft, BlogId, BlogPatch};
