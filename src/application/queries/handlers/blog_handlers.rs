//! Blog Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BlogStorePort;
use crate::application::queries::{GetBlog, ListBlogs};
use crate::domain::blog::Blog;

/// GetBlog Handler
pub struct GetBlogHandler {
    blog_store: Arc<dyn BlogStorePort>,
}

impl GetBlogHandler {
    pub fn new(blog_store: Arc<dyn BlogStorePort>) -> Self {
        Self { blog_store }
    }

    pub fn handle(&self, query: GetBlog) -> Result<Blog, ApplicationError> {
        self.blog_store
            .get_by_id(query.blog_id)
            .ok_or_else(|| ApplicationError::not_found("Blog", query.blog_id))
    }
}

/// ListBlogs Handler
pub struct ListBlogsHandler {
    blog_store: Arc<dyn BlogStorePort>,
}

impl ListBlogsHandler {
    pub fn new(blog_store: Arc<dyn BlogStorePort>) -> Self {
        Self { blog_store }
    }

    pub fn handle(&self, _query: ListBlogs) -> Vec<Blog> {
        self.blog_store.list_all()
    }
}
