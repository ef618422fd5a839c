//! Application State
//!
//! 包含 BlogStore 以及所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateBlogHandler, DeleteBlogHandler, UpdateBlogHandler,
    // Query handlers
    GetBlogHandler, ListBlogsHandler,
    // Ports
    BlogStorePort,
};
use crate::infrastructure::memory::InMemoryBlogStore;

/// 应用状态
///
/// store 由调用方注入，每个 AppState 可以拥有独立的博客集合
pub struct AppState {
    // ========== Ports ==========
    pub blog_store: Arc<dyn BlogStorePort>,

    // ========== Command Handlers ==========
    pub create_blog_handler: CreateBlogHandler,
    pub update_blog_handler: UpdateBlogHandler,
    pub delete_blog_handler: DeleteBlogHandler,

    // ========== Query Handlers ==========
    pub get_blog_handler: GetBlogHandler,
    pub list_blogs_handler: ListBlogsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(blog_store: Arc<dyn BlogStorePort>) -> Self {
        Self {
            // Ports
            blog_store: blog_store.clone(),

            // Command handlers
            create_blog_handler: CreateBlogHandler::new(blog_store.clone()),
            update_blog_handler: UpdateBlogHandler::new(blog_store.clone()),
            delete_blog_handler: DeleteBlogHandler::new(blog_store.clone()),

            // Query handlers
            get_blog_handler: GetBlogHandler::new(blog_store.clone()),
            list_blogs_handler: ListBlogsHandler::new(blog_store),
        }
    }

    /// 使用全新的内存 store 创建应用状态
    pub fn in_memory() -> Self {
        Self::new(InMemoryBlogStore::new().arc())
    }
}
