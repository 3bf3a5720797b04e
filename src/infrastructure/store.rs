//! 文档存储端口
//!
//! 资源服务只通过 [`DocumentStore`] 访问持久化层。文档是无模式的 JSON 对象，
//! 以集合名分组，通过字段相等过滤器查询。

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// 存储中的一条文档
pub type Document = Map<String, Value>;

/// 文档主键字段名
pub const ID_FIELD: &str = "_id";

/// 存储错误类型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
    #[error("document in collection '{collection}' is not a JSON object")]
    CorruptDocument { collection: String },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store backend '{0}' is not available in this build")]
    Unavailable(String),
}

/// 字段相等过滤器，所有条件同时满足才算匹配；空过滤器匹配全部文档
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Document,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().and(field, value)
    }

    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }

    /// 过滤条件本身作为 JSON 对象（供 JSONB 包含查询使用）
    pub fn as_document(&self) -> &Document {
        &self.conditions
    }
}

/// 删除操作结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn deleted(count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: count,
        }
    }
}

/// 文档存储协作者
///
/// 按名称查找类操作都是"第一条匹配"语义：按插入顺序返回或修改第一条满足过滤器的文档。
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 插入文档；缺少 `_id` 时由存储分配 UUID。返回实际保存的文档。
    async fn insert_one(&self, collection: &str, document: Document)
        -> Result<Document, StoreError>;

    /// 按插入顺序返回所有匹配文档
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    async fn find_one(&self, collection: &str, filter: &Filter)
        -> Result<Option<Document>, StoreError>;

    /// 将 `patch` 中的字段写入第一条匹配文档并返回更新后的文档。
    /// `patch` 中的 `_id` 会被忽略。
    async fn find_one_and_update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
    ) -> Result<Option<Document>, StoreError>;

    async fn delete_one(&self, collection: &str, filter: &Filter)
        -> Result<DeleteResult, StoreError>;

    /// 连通性检查
    async fn ping(&self) -> Result<(), StoreError>;
}

/// 把类型化记录编码为文档
pub fn encode<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(document) => Ok(document),
        _ => Err(StoreError::Serialization(serde::ser::Error::custom(
            "record did not serialize to a JSON object",
        ))),
    }
}

/// 把文档解码为类型化记录
pub fn decode<T: DeserializeOwned>(document: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

/// 确保文档带有 `_id`，返回最终的主键
pub(crate) fn ensure_id(document: &mut Document) -> String {
    match document.get(ID_FIELD).and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => {
            let id = uuid::Uuid::new_v4().to_string();
            document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
            id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_filter_matches_all_conditions() {
        let document = doc(json!({ "nome": "Mouse", "cor": "preto", "peso": 0.1 }));

        assert!(Filter::new().matches(&document));
        assert!(Filter::eq("nome", "Mouse").matches(&document));
        assert!(Filter::eq("nome", "Mouse").and("cor", "preto").matches(&document));
        assert!(!Filter::eq("nome", "Mouse").and("cor", "branco").matches(&document));
        assert!(!Filter::eq("nome", "mouse").matches(&document));
        assert!(!Filter::eq("tipo", "perif").matches(&document));
    }

    #[test]
    fn test_ensure_id_keeps_existing_id() {
        let mut document = doc(json!({ "_id": "abc", "nome": "Ana" }));
        assert_eq!(ensure_id(&mut document), "abc");

        let mut fresh = doc(json!({ "nome": "Ana" }));
        let id = ensure_id(&mut fresh);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_eq!(fresh[ID_FIELD], json!(id));
    }

    #[test]
    fn test_encode_rejects_non_objects() {
        assert!(encode(&42).is_err());
        assert!(encode(&json!({ "a": 1 })).is_ok());
    }

    #[test]
    fn test_delete_result_wire_format() {
        let value = serde_json::to_value(DeleteResult::deleted(1)).unwrap();
        assert_eq!(value, json!({ "acknowledged": true, "deletedCount": 1 }));
    }
}
