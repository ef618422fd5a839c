//! Blogd - 内存博客服务
//!
//! 启动流程: 配置 -> 日志 -> BlogStore -> HTTP 服务器（Ctrl-C 优雅关闭）

use blogd::config::{load_config, print_config, LogConfig};
use blogd::infrastructure::http::{AppState, HttpServer, ServerConfig};
use blogd::infrastructure::InMemoryBlogStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：PORT > BLOGD_ 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Blogd - in-memory blog service");
    print_config(&config);

    // 每个进程持有一个独立的内存 store，重启即清空
    let blog_store = InMemoryBlogStore::new().arc();
    let state = AppState::new(blog_store);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, addr = %config.server.addr(), "HTTP server failed");
            e
        })?;

    tracing::info!("Server closed");

    Ok(())
}

/// 初始化日志（RUST_LOG 优先）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},blogd={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        // 无法监听信号时保持运行
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down gracefully...");
}
