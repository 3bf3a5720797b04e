//! # produtos-crud
//!
//! 基于 Axum 的产品与员工 CRUD 服务：
//! - `/produto` 与 `/funcionario` 资源，按 `nome` 查找、更新和删除
//! - 可替换的文档存储（内存或 PostgreSQL JSONB）
//! - 由路由注解生成的 OpenAPI 3.0 文档

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use std::time::Duration;

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use app::AppState;
pub use config::Config;

/// 组装完整的应用：资源路由、文档路由和中间件
pub fn build_app(state: AppState, config: &Config) -> Router {
    let mut routes = app::create_routes();
    if config.docs.enabled {
        routes = routes.merge(app::docs::docs_routes(&config.docs.path));
    }

    // 自外向内：trace -> CORS -> 超时 -> 请求日志
    // CorsLayer 要求内层响应体实现 Default，trace 必须在它外层
    routes
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(Duration::from_secs(config.http.timeout_seconds)))
                .layer(middleware::from_fn(crate::core::middleware::request_logging_middleware)),
        )
        .with_state(state)
}
