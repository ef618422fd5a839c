//! Root Handler

/// 根路径 - 存活检查
pub async fn index() -> &'static str {
    "Hello World!"
}
