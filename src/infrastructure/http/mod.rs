//! HTTP Layer - RESTful API
//!
//! 将 /blogs 请求映射为 Command/Query，并把结果映射为状态码与 JSON

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
