//! Blog Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBlog, DeleteBlog, UpdateBlog};
use crate::application::error::ApplicationError;
use crate::application::ports::BlogStorePort;
use crate::domain::blog::{Blog, BlogDraft, BlogPatch};

// ============================================================================
// CreateBlog
// ============================================================================

/// CreateBlog Handler
pub struct CreateBlogHandler {
    blog_store: Arc<dyn BlogStorePort>,
}

impl CreateBlogHandler {
    pub fn new(blog_store: Arc<dyn BlogStorePort>) -> Self {
        Self { blog_store }
    }

    /// 校验必填字段后写入 store，校验失败时不触碰 store
    pub fn handle(&self, command: CreateBlog) -> Result<Blog, ApplicationError> {
        let draft = BlogDraft::new(command.title, command.content, command.author)?;
        Ok(self.blog_store.create(draft))
    }
}

// ============================================================================
// UpdateBlog
// ============================================================================

/// UpdateBlog Handler
pub struct UpdateBlogHandler {
    blog_store: Arc<dyn BlogStorePort>,
}

impl UpdateBlogHandler {
    pub fn new(blog_store: Arc<dyn BlogStorePort>) -> Self {
        Self { blog_store }
    }

    pub fn handle(&self, command: UpdateBlog) -> Result<Blog, ApplicationError> {
        let patch = BlogPatch::new(command.title, command.content, command.author);
        if patch.is_empty() {
            tracing::debug!(blog_id = %command.blog_id, "Update without fields");
        }

        self.blog_store
            .update(command.blog_id, patch)
            .ok_or_else(|| ApplicationError::not_found("Blog", command.blog_id))
    }
}

// ============================================================================
// DeleteBlog
// ============================================================================

/// DeleteBlog Handler
pub struct DeleteBlogHandler {
    blog_store: Arc<dyn BlogStorePort>,
}

impl DeleteBlogHandler {
    pub fn new(blog_store: Arc<dyn BlogStorePort>) -> Self {
        Self { blog_store }
    }

    pub fn handle(&self, command: DeleteBlog) -> Result<(), ApplicationError> {
        if self.blog_store.delete(command.blog_id) {
            Ok(())
        } else {
            Err(ApplicationError::not_found("Blog", command.blog_id))
        }
    }
}
