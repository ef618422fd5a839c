//! Blog Context - Value Objects

use std::num::ParseIntError;
use std::str::FromStr;

/// 博客唯一标识（从 1 开始递增，不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlogId(u64);

impl BlogId {
    /// 第一个分配的标识
    pub const FIRST: BlogId = BlogId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 下一个标识
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// 宽松解析路径中的 id
    ///
    /// 接受首尾空白、`+` 号、整数值的小数或指数形式（`1.0`、`1e0`）
    /// 以及 `0x` / `0o` / `0b` 前缀，其余一律视为无效
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(id) = raw.parse::<u64>() {
            return Some(Self(id));
        }

        let lower = raw.to_ascii_lowercase();
        for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
            if let Some(digits) = lower.strip_prefix(prefix) {
                return u64::from_str_radix(digits, radix).ok().map(Self);
            }
        }

        let value = raw.parse::<f64>().ok()?;
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
            return None;
        }
        Some(Self(value as u64))
    }
}

impl FromStr for BlogId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl std::fmt::Display for BlogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 创建博客所需的字段
///
/// 不变量: title / content / author 均非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    content: String,
    author: String,
}

impl BlogDraft {
    /// 三个字段缺一不可，空字符串视为缺失
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> Result<Self, super::BlogError> {
        match (present(title), present(content), present(author)) {
            (Some(title), Some(content), Some(author)) => Ok(Self {
                title,
                content,
                author,
            }),
            _ => Err(super::BlogError::MissingFields),
        }
    }

    pub(super) fn into_parts(self) -> (String, String, String) {
        (self.title, self.content, self.author)
    }
}

/// 部分更新
///
/// 只保留提供且非空的字段，id 与 created_at 不在可更新范围内
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub(super) title: Option<String>,
    pub(super) content: Option<String>,
    pub(super) author: Option<String>,
}

impl BlogPatch {
    pub fn new(title: Option<String>, content: Option<String>, author: Option<String>) -> Self {
        Self {
            title: present(title),
            content: present(content),
            author: present(author),
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self::new(Some(title.into()), None, None)
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self::new(None, Some(content.into()), None)
    }

    pub fn author(author: impl Into<String>) -> Self {
        Self::new(None, None, Some(author.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blog::BlogError;

    #[test]
    fn test_blog_id_parse() {
        assert_eq!("42".parse::<BlogId>().unwrap(), BlogId::new(42));
        assert!("abc".parse::<BlogId>().is_err());
        assert!("-1".parse::<BlogId>().is_err());
        assert!("".parse::<BlogId>().is_err());
    }

    #[test]
    fn test_blog_id_parse_lenient() {
        for raw in ["1", " 1 ", "+1", "1.0", "1e0", "0x1", "0X1", "0b1", "0o1"] {
            assert_eq!(BlogId::parse_lenient(raw), Some(BlogId::new(1)), "{raw:?}");
        }
        for raw in ["abc", "", "1.5", "-1", "NaN", "inf", "Infinity", "0x", "1 2", "0xg"] {
            assert_eq!(BlogId::parse_lenient(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn test_blog_id_next() {
        assert_eq!(BlogId::FIRST.next(), BlogId::new(2));
    }

    #[test]
    fn test_draft_requires_all_fields() {
        let ok = BlogDraft::new(
            Some("Title".to_string()),
            Some("Content".to_string()),
            Some("Author".to_string()),
        );
        assert!(ok.is_ok());

        let missing_author = BlogDraft::new(
            Some("Title".to_string()),
            Some("Content".to_string()),
            None,
        );
        assert!(matches!(missing_author, Err(BlogError::MissingFields)));

        let empty_title = BlogDraft::new(
            Some(String::new()),
            Some("Content".to_string()),
            Some("Author".to_string()),
        );
        assert!(matches!(empty_title, Err(BlogError::MissingFields)));
    }

    #[test]
    fn test_patch_drops_empty_fields() {
        let patch = BlogPatch::new(Some("New".to_string()), Some(String::new()), None);
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert!(patch.content.is_none());
        assert!(patch.author.is_none());
        assert!(!patch.is_empty());

        assert!(BlogPatch::new(None, Some(String::new()), None).is_empty());
    }
}
