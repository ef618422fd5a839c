//! Blog Store Port - 博客记录存储
//!
//! 定义博客集合的抽象接口，具体实现在 infrastructure/memory 层

use crate::domain::blog::{Blog, BlogDraft, BlogId, BlogPatch};

/// Blog Store Port
///
/// 持有博客集合与 id 计数器。各操作之间互相原子，
/// 未找到记录返回 None / false 而不是错误
pub trait BlogStorePort: Send + Sync {
    /// 分配下一个 id，记录创建时间并追加
    fn create(&self, draft: BlogDraft) -> Blog;

    /// 按插入顺序返回所有博客
    fn list_all(&self) -> Vec<Blog>;

    /// 根据 id 查找
    fn get_by_id(&self, id: BlogId) -> Option<Blog>;

    /// 就地应用部分更新，返回更新后的博客
    fn update(&self, id: BlogId, patch: BlogPatch) -> Option<Blog>;

    /// 删除博客，返回是否确实删除了记录
    fn delete(&self, id: BlogId) -> bool;

    /// 清空集合并把 id 计数器重置为 1（仅用于测试/引导）
    fn reset(&self);
}
