//! 产品数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 产品文档所在集合
pub const PRODUCT_COLLECTION: &str = "produtos";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "_id": "5f1d7a8e-4c67-4b1e-a0a4-8f3b7f9a2c11",
    "nome": "Teclado Mecânico RGB",
    "descricao": "Teclado com switches blue e iluminação customizável",
    "cor": "Preto",
    "peso": 1.2,
    "tipo": "Periféricos",
    "preco": 450.0,
    "dataCadastro": "2024-05-01T12:00:00Z"
}))]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "preco")]
    pub price: f64,
    /// 服务端写入的创建时间，客户端无法设置
    #[serde(rename = "dataCadastro")]
    pub registered_at: DateTime<Utc>,
}

/// 创建产品请求
///
/// 文本字段不能为空；`peso` 和 `preco` 只检查是否存在，0 是合法值。
/// 请求中的 `dataCadastro` 会被忽略。
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "nome": "Teclado Mecânico RGB",
    "descricao": "Teclado com switches blue e iluminação customizável",
    "cor": "Preto",
    "peso": 1.2,
    "tipo": "Periféricos",
    "preco": 450.0
}))]
pub struct CreateProductRequest {
    #[serde(rename = "nome")]
    #[validate(required(code = "nome"), length(min = 1, code = "nome"))]
    pub name: Option<String>,
    #[serde(rename = "descricao")]
    #[validate(required(code = "descricao"), length(min = 1, code = "descricao"))]
    pub description: Option<String>,
    #[serde(rename = "cor")]
    #[validate(required(code = "cor"), length(min = 1, code = "cor"))]
    pub color: Option<String>,
    #[serde(rename = "peso")]
    #[validate(required(code = "peso"))]
    pub weight: Option<f64>,
    #[serde(rename = "tipo")]
    #[validate(required(code = "tipo"), length(min = 1, code = "tipo"))]
    pub kind: Option<String>,
    #[serde(rename = "preco")]
    #[validate(required(code = "preco"))]
    pub price: Option<f64>,
}

/// 更新产品请求，至少提供一个字段；`nome` 不可修改
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(example = json!({ "preco": 79.9 }))]
pub struct UpdateProductRequest {
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "cor")]
    pub color: Option<String>,
    #[serde(rename = "peso")]
    pub weight: Option<f64>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<f64>,
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "cor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "peso", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "preco", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            description: non_empty(self.description),
            color: non_empty(self.color),
            weight: self.weight,
            kind: non_empty(self.kind),
            price: self.price,
        }
    }
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductUpdatedResponse {
    pub message: String,
    #[serde(rename = "produto")]
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_only_carries_provided_fields() {
        let request: UpdateProductRequest =
            serde_json::from_value(json!({ "preco": 79.9, "cor": "", "nome": "Outro" })).unwrap();
        let patch = request.into_patch();

        assert!(!patch.is_empty());
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "preco": 79.9 }));
    }

    #[test]
    fn test_zero_values_count_as_provided() {
        let request: UpdateProductRequest =
            serde_json::from_value(json!({ "peso": 0 })).unwrap();
        assert_eq!(request.into_patch().weight, Some(0.0));

        let empty: UpdateProductRequest =
            serde_json::from_value(json!({ "descricao": "", "tipo": "" })).unwrap();
        assert!(empty.into_patch().is_empty());
    }
}
