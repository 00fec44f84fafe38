//! API 路由模块
//!
//! # 结构
//!
//! - [`graphql`] - GraphQL 接口 (登录、注册、员工增删改查)
//! - [`health`] - 健康检查

pub mod graphql;
pub mod health;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: "http_access",
        "{} {} {} ({}ms)",
        method,
        uri,
        response.status(),
        started.elapsed().as_millis()
    );

    response
}

/// Build the Axum router (without state)
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(graphql::router(state))
        .merge(health::router())
}

/// 组装完整路由: 注入状态, 再套上 CORS 和访问日志中间件
pub fn router(state: ServerState) -> Router {
    build_app(&state)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}
