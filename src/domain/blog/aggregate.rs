//! Blog Context - Aggregate Root

use chrono::{DateTime, Utc};

use super::{BlogDraft, BlogId, BlogPatch};

/// Blog 聚合根
///
/// 不变量:
/// - id 与 created_at 创建后不可变
/// - 只有 title / content / author 可被修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    id: BlogId,
    title: String,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
}

impl Blog {
    /// 创建新博客，记录当前时间
    pub fn new(id: BlogId, draft: BlogDraft) -> Self {
        Self::with_created_at(id, draft, Utc::now())
    }

    pub fn with_created_at(id: BlogId, draft: BlogDraft, created_at: DateTime<Utc>) -> Self {
        let (title, content, author) = draft.into_parts();
        Self {
            id,
            title,
            content,
            author,
            created_at,
        }
    }

    /// 应用部分更新，未提供的字段保持不变
    pub fn apply(&mut self, patch: BlogPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
    }

    // Getters
    pub fn id(&self) -> BlogId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str, author: &str) -> BlogDraft {
        BlogDraft::new(
            Some(title.to_string()),
            Some(content.to_string()),
            Some(author.to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_blog_creation() {
        let before = Utc::now();
        let blog = Blog::new(BlogId::FIRST, draft("Test Blog", "Test Content", "Test Author"));

        assert_eq!(blog.id(), BlogId::FIRST);
        assert_eq!(blog.title(), "Test Blog");
        assert_eq!(blog.content(), "Test Content");
        assert_eq!(blog.author(), "Test Author");
        assert!(blog.created_at() >= before);
    }

    #[test]
    fn test_apply_title_only() {
        let mut blog = Blog::new(BlogId::FIRST, draft("Old Title", "Content", "Author"));
        let created_at = blog.created_at();

        blog.apply(BlogPatch::title("New Title"));

        assert_eq!(blog.title(), "New Title");
        assert_eq!(blog.content(), "Content");
        assert_eq!(blog.author(), "Author");
        assert_eq!(blog.id(), BlogId::FIRST);
        assert_eq!(blog.created_at(), created_at);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut blog = Blog::new(BlogId::FIRST, draft("Title", "Content", "Author"));
        let before = blog.clone();

        blog.apply(BlogPatch::default());

        assert_eq!(blog, before);
    }
}
