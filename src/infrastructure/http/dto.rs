//! Data Transfer Objects

use axum::body::Bytes;
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use chrono::SecondsFormat;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::domain::blog::Blog;

// ============================================================================
// Blog DTOs
// ============================================================================

/// 博客 JSON 表示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    /// RFC 3339，毫秒精度，UTC（`Z` 结尾）
    pub created_at: String,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id().value(),
            title: blog.title().to_string(),
            content: blog.content().to_string(),
            author: blog.author().to_string(),
            created_at: blog
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// 创建请求
///
/// 字段不限定 JSON 类型，由 [`field_text`] 统一转换
#[derive(Debug, Default, Deserialize)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
}

/// 更新请求（部分更新）
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlogRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
}

/// 把请求字段转为文本
///
/// `null`、`false`、`0`、`""` 视为未提供；字符串原样保留，
/// 其他值使用其 JSON 文本
pub fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Content-Type 是否为 JSON（`application/json` 或 `+json` 后缀）
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// 解析 JSON 请求体
///
/// 非 JSON Content-Type 或空请求体按 `{}` 处理；顶层为数组时同样没有字段
pub fn parse_json_body<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let invalid = |e: serde_json::Error| ApiError::BadRequest(format!("Invalid JSON body: {}", e));
    match serde_json::from_slice::<Value>(body).map_err(invalid)? {
        value @ Value::Object(_) => serde_json::from_value(value).map_err(invalid),
        Value::Array(_) => Ok(T::default()),
        _ => Err(ApiError::BadRequest(
            "Invalid JSON body: expected an object".to_string(),
        )),
    }
}
