//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Blog Context: 博客管理

pub mod blog;
