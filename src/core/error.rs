//! 核心错误处理模块

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::infrastructure::store::StoreError;

/// 创建时缺少必填字段的提示
pub const MISSING_FIELDS: &str = "Todos os campos são obrigatórios!";

/// 处理器边界上的错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// 创建请求缺少必填字段 (422)
    #[error("{message}")]
    Validation { message: String, fields: Vec<String> },
    /// 请求本身不合法 (400)
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// 存储失败 (500)，消息原样返回给客户端
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 错误响应结构，所有失败路径共用
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "error": "Todos os campos são obrigatórios!", "fields": ["preco"] }))]
pub struct ErrorResponse {
    pub error: String,
    /// 缺失的字段，仅在 422 时出现
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            CoreError::Validation { message, fields } => ErrorResponse {
                error: message,
                fields,
            },
            CoreError::Store(err) => {
                error!("Store error: {}", err);
                ErrorResponse {
                    error: err.to_string(),
                    fields: Vec::new(),
                }
            }
            other => ErrorResponse {
                error: other.to_string(),
                fields: Vec::new(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// 校验规则的 `code` 填写字段的 JSON 键名，`fields` 据此列出客户端可见的名字
impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = err
            .field_errors()
            .into_iter()
            .map(|(field, errors)| match errors.first() {
                Some(error) => error.code.to_string(),
                None => field.to_string(),
            })
            .collect();
        fields.sort();
        fields.dedup();

        CoreError::Validation {
            message: MISSING_FIELDS.to_string(),
            fields,
        }
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation = CoreError::Validation {
            message: MISSING_FIELDS.to_string(),
            fields: vec!["nome".to_string()],
        };
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            CoreError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CoreError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            CoreError::from(StoreError::Database("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_message_is_passed_through() {
        let err = CoreError::from(StoreError::Database("connection refused".into()));
        assert_eq!(err.to_string(), "database error: connection refused");
    }

    #[test]
    fn test_validation_fields_use_json_keys() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("price", validator::ValidationError::new("preco"));
        errors.add("hired", validator::ValidationError::new("contratado"));

        match CoreError::from(errors) {
            CoreError::Validation { message, fields } => {
                assert_eq!(message, MISSING_FIELDS);
                assert_eq!(fields, vec!["contratado", "preco"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
