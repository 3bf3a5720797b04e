//! 请求体提取器

use axum::extract::FromRequest;

use super::error::CoreError;

/// 与 `axum::Json` 相同，但拒绝时返回统一的 [`CoreError`] 错误体
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CoreError))]
pub struct JsonBody<T>(pub T);
