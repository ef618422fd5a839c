//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::blog::{BlogError, BlogId};

/// 应用层错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: BlogId,
    },

    /// 验证错误
    #[error("{0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: BlogId) -> Self {
        Self::NotFound { resource_type, id }
    }
}

impl From<BlogError> for ApplicationError {
    fn from(err: BlogError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
