//! HTTP 应用：资源路由、共享状态和 API 文档

pub mod docs;
pub mod employee;
pub mod health;
pub mod product;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::infrastructure::store::DocumentStore;
use employee::service::EmployeeService;
use product::service::ProductService;

/// 两种资源共用的查找字段
pub const NAME_FIELD: &str = "nome";
pub const NAME_REQUIRED: &str = "O parâmetro 'nome' é obrigatório!";
pub const NO_UPDATE_FIELDS: &str = "Ao menos um campo para atualização deve ser fornecido!";

/// 处理器共享状态；存储客户端由宿主进程创建后注入
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub employee_service: EmployeeService,
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            employee_service: EmployeeService::new(store.clone()),
            product_service: ProductService::new(store.clone()),
            store,
        }
    }
}

/// 资源路由
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/funcionario",
            post(employee::handler::create_employee).get(employee::handler::list_employees),
        )
        .route(
            "/funcionario/:nome",
            put(employee::handler::update_employee)
                .delete(employee::handler::delete_employee),
        )
        .route(
            "/produto",
            post(product::handler::create_product).get(product::handler::list_products),
        )
        .route(
            "/produto/:nome",
            get(product::handler::get_product)
                .put(product::handler::update_product)
                .delete(product::handler::delete_product),
        )
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;

    use crate::infrastructure::store::{DeleteResult, Document, DocumentStore, Filter, StoreError};

    /// 所有操作都失败的存储，用于验证 500 路径
    pub struct FailingStore;

    fn down() -> StoreError {
        StoreError::Database("connection refused".to_string())
    }

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn insert_one(&self, _: &str, _: Document) -> Result<Document, StoreError> {
            Err(down())
        }

        async fn find(&self, _: &str, _: &Filter) -> Result<Vec<Document>, StoreError> {
            Err(down())
        }

        async fn find_one(&self, _: &str, _: &Filter) -> Result<Option<Document>, StoreError> {
            Err(down())
        }

        async fn find_one_and_update(
            &self,
            _: &str,
            _: &Filter,
            _: Document,
        ) -> Result<Option<Document>, StoreError> {
            Err(down())
        }

        async fn delete_one(&self, _: &str, _: &Filter) -> Result<DeleteResult, StoreError> {
            Err(down())
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Err(down())
        }
    }
}
