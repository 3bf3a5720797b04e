//! 员工业务服务

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::model::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest, EMPLOYEE_COLLECTION};
use crate::app::{NAME_FIELD, NAME_REQUIRED, NO_UPDATE_FIELDS};
use crate::core::error::{CoreError, MISSING_FIELDS};
use crate::infrastructure::store::{decode, encode, DeleteResult, DocumentStore, Filter};

pub const EMPLOYEE_CREATED: &str = "Funcionário cadastrado com sucesso!";
pub const EMPLOYEE_UPDATED: &str = "Funcionário atualizado com sucesso!";
pub const EMPLOYEE_DELETED: &str = "Funcionário deletado com sucesso!";
pub const EMPLOYEE_NOT_FOUND: &str = "Funcionário não encontrado!";

#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn DocumentStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, CoreError> {
        if let Err(errors) = request.validate() {
            warn!("员工创建请求缺少字段: {}", errors);
            return Err(errors.into());
        }

        let (Some(name), Some(role), Some(salary), Some(hired)) =
            (request.name, request.role, request.salary, request.hired)
        else {
            return Err(CoreError::Validation {
                message: MISSING_FIELDS.to_string(),
                fields: Vec::new(),
            });
        };

        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            name,
            role,
            salary,
            hired,
        };

        self.store
            .insert_one(EMPLOYEE_COLLECTION, encode(&employee)?)
            .await?;
        info!("Created employee: {} ({})", employee.name, employee.id);

        Ok(employee)
    }

    pub async fn list(&self) -> Result<Vec<Employee>, CoreError> {
        let documents = self.store.find(EMPLOYEE_COLLECTION, &Filter::new()).await?;
        Ok(documents
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<Employee>, _>>()?)
    }

    /// 删除第一条同名员工
    pub async fn delete_by_name(&self, name: &str) -> Result<DeleteResult, CoreError> {
        if name.is_empty() {
            return Err(CoreError::BadRequest(NAME_REQUIRED.to_string()));
        }

        let filter = Filter::eq(NAME_FIELD, name);
        if self.store.find_one(EMPLOYEE_COLLECTION, &filter).await?.is_none() {
            return Err(CoreError::NotFound(EMPLOYEE_NOT_FOUND.to_string()));
        }

        let result = self.store.delete_one(EMPLOYEE_COLLECTION, &filter).await?;
        info!("Deleted employee: {} (deleted={})", name, result.deleted_count);
        Ok(result)
    }

    /// 稀疏更新第一条同名员工，返回更新后的记录
    pub async fn update_by_name(
        &self,
        name: &str,
        request: UpdateEmployeeRequest,
    ) -> Result<Employee, CoreError> {
        if name.is_empty() {
            return Err(CoreError::BadRequest(NAME_REQUIRED.to_string()));
        }

        let patch = request.into_patch();
        if patch.is_empty() {
            return Err(CoreError::BadRequest(NO_UPDATE_FIELDS.to_string()));
        }

        let updated = self
            .store
            .find_one_and_update(EMPLOYEE_COLLECTION, &Filter::eq(NAME_FIELD, name), encode(&patch)?)
            .await?
            .ok_or_else(|| CoreError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))?;

        let employee: Employee = decode(updated)?;
        info!("Updated employee: {} ({})", employee.name, employee.id);
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::FailingStore;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    fn ana() -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            name: Some("Ana".to_string()),
            role: Some("Dev".to_string()),
            salary: Some(0.0),
            hired: Some(false),
        }
    }

    fn service() -> (Arc<InMemoryDocumentStore>, EmployeeService) {
        let store = Arc::new(InMemoryDocumentStore::new());
        (store.clone(), EmployeeService::new(store))
    }

    #[tokio::test]
    async fn test_create_accepts_zero_salary_and_not_hired() {
        let (store, service) = service();

        let employee = service.create(ana()).await.unwrap();
        assert_eq!(employee.salary, 0.0);
        assert!(!employee.hired);
        assert_eq!(store.count(EMPLOYEE_COLLECTION).await, 1);

        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec![employee]);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_persisting() {
        let (store, service) = service();

        let cases = [
            CreateEmployeeRequest { name: None, ..ana() },
            CreateEmployeeRequest { name: Some(String::new()), ..ana() },
            CreateEmployeeRequest { role: Some(String::new()), ..ana() },
            CreateEmployeeRequest { salary: None, ..ana() },
            CreateEmployeeRequest { hired: None, ..ana() },
        ];
        for request in cases {
            let err = service.create(request).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation { .. }), "{err:?}");
        }
        assert_eq!(store.count(EMPLOYEE_COLLECTION).await, 0);
    }

    #[tokio::test]
    async fn test_update_requires_a_field() {
        let (_, service) = service();
        service.create(ana()).await.unwrap();

        let empty_role = UpdateEmployeeRequest {
            role: Some(String::new()),
            ..Default::default()
        };
        let err = service.update_by_name("Ana", empty_role).await.unwrap_err();
        assert!(matches!(err, CoreError::BadRequest(_)));

        let unchanged = service.list().await.unwrap();
        assert_eq!(unchanged[0].role, "Dev");
    }

    #[tokio::test]
    async fn test_update_is_sparse() {
        let (_, service) = service();
        let created = service.create(ana()).await.unwrap();

        let updated = service
            .update_by_name(
                "Ana",
                UpdateEmployeeRequest {
                    hired: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.hired);
        assert_eq!(updated.role, created.role);
        assert_eq!(updated.salary, created.salary);
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_name() {
        let (_, service) = service();

        let err = service
            .update_by_name(
                "Ghost",
                UpdateEmployeeRequest {
                    salary: Some(1.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));

        let err = service.delete_by_name("Ghost").await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));

        let err = service.delete_by_name("").await.unwrap_err();
        assert!(matches!(err, CoreError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let (store, service) = service();
        service.create(ana()).await.unwrap();

        let result = service.delete_by_name("Ana").await.unwrap();
        assert_eq!(result, DeleteResult::deleted(1));
        assert_eq!(store.count(EMPLOYEE_COLLECTION).await, 0);
    }

    #[tokio::test]
    async fn test_store_failures_surface_as_store_errors() {
        let service = EmployeeService::new(Arc::new(FailingStore));

        assert!(matches!(service.create(ana()).await, Err(CoreError::Store(_))));
        assert!(matches!(service.list().await, Err(CoreError::Store(_))));
        assert!(matches!(
            service.delete_by_name("Ana").await,
            Err(CoreError::Store(_))
        ));
    }
}
