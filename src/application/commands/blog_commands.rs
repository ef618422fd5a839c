//! Blog Commands

use crate::domain::blog::BlogId;

/// 创建博客命令
///
/// 字段原样来自请求，缺失或为空由 handler 拒绝
#[derive(Debug, Clone, Default)]
pub struct CreateBlog {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// 更新博客命令（部分更新）
#[derive(Debug, Clone)]
pub struct UpdateBlog {
    pub blog_id: BlogId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// 删除博客命令
#[derive(Debug, Clone)]
pub struct DeleteBlog {
    pub blog_id: BlogId,
}
