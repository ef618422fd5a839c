//! Blogd - 内存博客服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Blog Context: 博客记录、创建草稿、部分更新
//!
//! 应用层 (application/):
//! - Ports: 端口定义（BlogStore）
//! - Commands: CreateBlog / UpdateBlog / DeleteBlog
//! - Queries: GetBlog / ListBlogs
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: BlogStore 内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
