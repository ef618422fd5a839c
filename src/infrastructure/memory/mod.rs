//! Memory Layer - In-Memory State Management
//!
//! 实现 BlogStore，进程内保存博客集合，进程退出即丢失

mod blog_store;

pub use blog_store::InMemoryBlogStore;
