//! 核心中间件模块

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 请求日志中间件
///
/// 沿用客户端给出的 `x-request-id`，没有时生成一个，并写回响应头。
pub async fn request_logging_middleware(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        });
    req.headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let id = request_id.to_str().unwrap_or("unknown").to_string();

    if status.is_server_error() {
        warn!(request_id = %id, %method, %uri, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        info!(request_id = %id, %method, %uri, status = status.as_u16(), elapsed_ms, "request handled");
    }

    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
    response
}
