//! 产品业务服务

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::model::{CreateProductRequest, Product, UpdateProductRequest, PRODUCT_COLLECTION};
use crate::app::{NAME_FIELD, NAME_REQUIRED, NO_UPDATE_FIELDS};
use crate::core::error::{CoreError, MISSING_FIELDS};
use crate::infrastructure::store::{decode, encode, DeleteResult, DocumentStore, Filter};

pub const PRODUCT_CREATED: &str = "Produto cadastrado com sucesso!";
pub const PRODUCT_UPDATED: &str = "Produto atualizado com sucesso!";
pub const PRODUCT_DELETED: &str = "Produto deletado com sucesso!";
pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado!";

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn DocumentStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateProductRequest) -> Result<Product, CoreError> {
        if let Err(errors) = request.validate() {
            warn!("产品创建请求缺少字段: {}", errors);
            return Err(errors.into());
        }

        let CreateProductRequest {
            name: Some(name),
            description: Some(description),
            color: Some(color),
            weight: Some(weight),
            kind: Some(kind),
            price: Some(price),
        } = request
        else {
            return Err(CoreError::Validation {
                message: MISSING_FIELDS.to_string(),
                fields: Vec::new(),
            });
        };

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            color,
            weight,
            kind,
            price,
            registered_at: Utc::now(),
        };

        self.store
            .insert_one(PRODUCT_COLLECTION, encode(&product)?)
            .await?;
        info!("Created product: {} ({})", product.name, product.id);

        Ok(product)
    }

    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        let documents = self.store.find(PRODUCT_COLLECTION, &Filter::new()).await?;
        let products = documents
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<Product>, _>>()?;
        Ok(products)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Product, CoreError> {
        if name.is_empty() {
            return Err(CoreError::BadRequest(NAME_REQUIRED.to_string()));
        }

        let document = self
            .store
            .find_one(PRODUCT_COLLECTION, &Filter::eq(NAME_FIELD, name))
            .await?
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        Ok(decode(document)?)
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<DeleteResult, CoreError> {
        if name.is_empty() {
            return Err(CoreError::BadRequest(NAME_REQUIRED.to_string()));
        }

        let filter = Filter::eq(NAME_FIELD, name);
        if self.store.find_one(PRODUCT_COLLECTION, &filter).await?.is_none() {
            return Err(CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()));
        }

        let result = self.store.delete_one(PRODUCT_COLLECTION, &filter).await?;
        info!("Deleted product: {} (deleted={})", name, result.deleted_count);
        Ok(result)
    }

    pub async fn update_by_name(
        &self,
        name: &str,
        request: UpdateProductRequest,
    ) -> Result<Product, CoreError> {
        if name.is_empty() {
            return Err(CoreError::BadRequest(NAME_REQUIRED.to_string()));
        }

        let patch = request.into_patch();
        if patch.is_empty() {
            return Err(CoreError::BadRequest(NO_UPDATE_FIELDS.to_string()));
        }

        let updated = self
            .store
            .find_one_and_update(
                PRODUCT_COLLECTION,
                &Filter::eq(NAME_FIELD, name),
                encode(&patch)?,
            )
            .await?
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        let product: Product = decode(updated)?;
        info!("Updated product: {} ({})", product.name, product.id);
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::FailingStore;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    fn mouse() -> CreateProductRequest {
        CreateProductRequest {
            name: Some("Mouse".to_string()),
            description: Some("x".to_string()),
            color: Some("preto".to_string()),
            weight: Some(0.1),
            kind: Some("perif".to_string()),
            price: Some(99.9),
        }
    }

    fn service() -> (Arc<InMemoryDocumentStore>, ProductService) {
        let store = Arc::new(InMemoryDocumentStore::new());
        (store.clone(), ProductService::new(store))
    }

    #[tokio::test]
    async fn test_create_stamps_registration_time() {
        let (_, service) = service();
        let before = Utc::now();

        let created = service.create(mouse()).await.unwrap();
        assert!(created.registered_at >= before);

        let fetched = service.get_by_name("Mouse").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_accepts_zero_weight_and_price() {
        let (store, service) = service();

        let request = CreateProductRequest {
            weight: Some(0.0),
            price: Some(0.0),
            ..mouse()
        };
        service.create(request).await.unwrap();
        assert_eq!(store.count(PRODUCT_COLLECTION).await, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_persisting() {
        let (store, service) = service();

        let cases = [
            CreateProductRequest { name: None, ..mouse() },
            CreateProductRequest { description: Some(String::new()), ..mouse() },
            CreateProductRequest { color: None, ..mouse() },
            CreateProductRequest { weight: None, ..mouse() },
            CreateProductRequest { kind: Some(String::new()), ..mouse() },
            CreateProductRequest { price: None, ..mouse() },
            CreateProductRequest::default(),
        ];
        for request in cases {
            let err = service.create(request).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation { .. }), "{err:?}");
        }
        assert_eq!(store.count(PRODUCT_COLLECTION).await, 0);
    }

    #[tokio::test]
    async fn test_update_price_leaves_other_fields() {
        let (_, service) = service();
        let created = service.create(mouse()).await.unwrap();

        let updated = service
            .update_by_name(
                "Mouse",
                UpdateProductRequest {
                    price: Some(79.9),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 79.9);
        assert_eq!(
            Product {
                price: created.price,
                ..updated
            },
            created
        );
    }

    #[tokio::test]
    async fn test_update_without_fields_is_rejected() {
        let (_, service) = service();
        let created = service.create(mouse()).await.unwrap();

        let err = service
            .update_by_name("Mouse", UpdateProductRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::BadRequest(_)));
        assert_eq!(service.get_by_name("Mouse").await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let (_, service) = service();

        assert!(matches!(
            service.get_by_name("Ghost").await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_by_name("Ghost").await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update_by_name(
                    "Ghost",
                    UpdateProductRequest {
                        color: Some("azul".to_string()),
                        ..Default::default()
                    }
                )
                .await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let (_, service) = service();
        service.create(mouse()).await.unwrap();

        let result = service.delete_by_name("Mouse").await.unwrap();
        assert_eq!(result.deleted_count, 1);
        assert!(matches!(
            service.get_by_name("Mouse").await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failures_surface_as_store_errors() {
        let service = ProductService::new(Arc::new(FailingStore));

        assert!(matches!(service.create(mouse()).await, Err(CoreError::Store(_))));
        assert!(matches!(service.get_by_name("Mouse").await, Err(CoreError::Store(_))));
        assert!(matches!(
            service
                .update_by_name(
                    "Mouse",
                    UpdateProductRequest {
                        price: Some(1.0),
                        ..Default::default()
                    }
                )
                .await,
            Err(CoreError::Store(_))
        ));
    }
}
