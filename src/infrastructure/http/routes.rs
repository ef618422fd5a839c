//! HTTP Routes
//!
//! API Endpoints:
//! - /               GET     存活检查
//! - /blogs          GET     列出所有博客
//! - /blogs          POST    创建博客
//! - /blogs/{id}     GET     获取博客详情
//! - /blogs/{id}     PUT     更新博客（部分更新）
//! - /blogs/{id}     DELETE  删除博客

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/blogs",
            get(handlers::list_blogs).post(handlers::create_blog),
        )
        .route(
            "/blogs/:id",
            get(handlers::get_blog)
                .put(handlers::update_blog)
                .delete(handlers::delete_blog),
        )
}
