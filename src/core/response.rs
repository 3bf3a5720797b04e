//! 核心响应处理模块

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::infrastructure::store::DeleteResult;

/// 只带提示信息的响应（创建成功）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "message": "Produto cadastrado com sucesso!" }))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 按名称删除成功后的响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "result": { "acknowledged": true, "deletedCount": 1 },
    "message": "Produto deletado com sucesso!"
}))]
pub struct DeleteResponse {
    pub result: DeleteResult,
    pub message: String,
}

impl DeleteResponse {
    pub fn new(result: DeleteResult, message: impl Into<String>) -> Self {
        Self {
            result,
            message: message.into(),
        }
    }
}
