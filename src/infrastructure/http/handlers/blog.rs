//! Blog HTTP Handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::application::{CreateBlog, DeleteBlog, GetBlog, ListBlogs, UpdateBlog};
use crate::domain::blog::BlogId;
use crate::infrastructure::http::dto::{
    field_text, parse_json_body, BlogResponse, CreateBlogRequest, MessageResponse,
    UpdateBlogRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 非数字 id 按不存在处理
fn parse_blog_id(raw: &str) -> Result<BlogId, ApiError> {
    BlogId::parse_lenient(raw).ok_or_else(|| {
        tracing::debug!(raw_id = %raw, "Unparseable blog id");
        ApiError::blog_not_found()
    })
}

/// 获取博客列表
pub async fn list_blogs(State(state): State<Arc<AppState>>) -> Json<Vec<BlogResponse>> {
    let blogs = state.list_blogs_handler.handle(ListBlogs);
    Json(blogs.into_iter().map(BlogResponse::from).collect())
}

/// 创建博客
pub async fn create_blog(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<BlogResponse>), ApiError> {
    let request: CreateBlogRequest = parse_json_body(&headers, &body)?;

    let command = CreateBlog {
        title: field_text(request.title),
        content: field_text(request.content),
        author: field_text(request.author),
    };
    let blog = state.create_blog_handler.handle(command)?;

    Ok((StatusCode::CREATED, Json(BlogResponse::from(blog))))
}

/// 获取博客详情
pub async fn get_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let blog_id = parse_blog_id(&id)?;
    let blog = state.get_blog_handler.handle(GetBlog { blog_id })?;
    Ok(Json(BlogResponse::from(blog)))
}

/// 更新博客（部分更新）
pub async fn update_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BlogResponse>, ApiError> {
    let request: UpdateBlogRequest = parse_json_body(&headers, &body)?;
    let blog_id = parse_blog_id(&id)?;

    let command = UpdateBlog {
        blog_id,
        title: field_text(request.title),
        content: field_text(request.content),
        author: field_text(request.author),
    };
    let blog = state.update_blog_handler.handle(command)?;

    Ok(Json(BlogResponse::from(blog)))
}

/// 删除博客
pub async fn delete_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let blog_id = parse_blog_id(&id)?;
    state.delete_blog_handler.handle(DeleteBlog { blog_id })?;
    Ok(Json(MessageResponse::new("Blog deleted successfully")))
}
