//! In-Memory Blog Store Implementation

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::ports::BlogStorePort;
use crate::domain::blog::{Blog, BlogDraft, BlogId, BlogPatch};

/// 集合与计数器，始终在同一把锁下修改
struct BlogTable {
    /// id 单调递增，因此 key 顺序即插入顺序
    blogs: BTreeMap<BlogId, Blog>,
    next_id: BlogId,
}

impl BlogTable {
    fn empty() -> Self {
        Self {
            blogs: BTreeMap::new(),
            next_id: BlogId::FIRST,
        }
    }
}

/// 内存博客存储
pub struct InMemoryBlogStore {
    table: Mutex<BlogTable>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(BlogTable::empty()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn lock(&self) -> MutexGuard<'_, BlogTable> {
        // 所有修改都不会在中途 panic，被污染的锁内数据仍然一致
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogStorePort for InMemoryBlogStore {
    fn create(&self, draft: BlogDraft) -> Blog {
        let mut table = self.lock();
        let id = table.next_id;
        table.next_id = id.next();

        let blog = Blog::new(id, draft);
        table.blogs.insert(id, blog.clone());
        tracing::info!(blog_id = %id, title = %blog.title(), "Blog created");
        blog
    }

    fn list_all(&self) -> Vec<Blog> {
        self.lock().blogs.values().cloned().collect()
    }

    fn get_by_id(&self, id: BlogId) -> Option<Blog> {
        self.lock().blogs.get(&id).cloned()
    }

    fn update(&self, id: BlogId, patch: BlogPatch) -> Option<Blog> {
        let mut table = self.lock();
        let blog = table.blogs.get_mut(&id)?;
        blog.apply(patch);
        tracing::debug!(blog_id = %id, "Blog updated");
        Some(blog.clone())
    }

    fn delete(&self, id: BlogId) -> bool {
        let removed = self.lock().blogs.remove(&id).is_some();
        if removed {
            tracing::info!(blog_id = %id, "Blog deleted");
        }
        removed
    }

    fn reset(&self) {
        *self.lock() = BlogTable::empty();
        tracing::debug!("Blog store reset");
    }
}
