//! Blog Queries

use crate::domain::blog::BlogId;

/// 获取博客详情查询
#[derive(Debug, Clone)]
pub struct GetBlog {
    pub blog_id: BlogId,
}

/// 列出所有博客查询
#[derive(Debug, Clone)]
pub struct ListBlogs;
