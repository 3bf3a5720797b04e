//! 员工处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{CreateEmployeeRequest, Employee, EmployeeUpdatedResponse, UpdateEmployeeRequest};
use super::service::{EMPLOYEE_CREATED, EMPLOYEE_DELETED, EMPLOYEE_UPDATED};
use crate::app::AppState;
use crate::core::{
    error::{CoreError, ErrorResponse},
    extract::JsonBody,
    response::{DeleteResponse, MessageResponse},
};

/// 创建员工
#[utoipa::path(
    post,
    path = "/funcionario",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Funcionário cadastrado com sucesso", body = MessageResponse),
        (status = 400, description = "Corpo da requisição inválido", body = ErrorResponse),
        (status = 422, description = "Campos obrigatórios ausentes", body = ErrorResponse),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "funcionarios"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), CoreError> {
    state.employee_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(EMPLOYEE_CREATED))))
}

/// 获取所有员工
#[utoipa::path(
    get,
    path = "/funcionario",
    responses(
        (status = 200, description = "Lista de funcionários", body = Vec<Employee>),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "funcionarios"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, CoreError> {
    Ok(Json(state.employee_service.list().await?))
}

/// 按名称删除员工
#[utoipa::path(
    delete,
    path = "/funcionario/{nome}",
    params(("nome" = String, Path, description = "Nome do funcionário")),
    responses(
        (status = 200, description = "Funcionário deletado", body = DeleteResponse),
        (status = 400, description = "Parâmetro 'nome' ausente", body = ErrorResponse),
        (status = 404, description = "Funcionário não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "funcionarios"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse>, CoreError> {
    let result = state.employee_service.delete_by_name(&name).await?;
    Ok(Json(DeleteResponse::new(result, EMPLOYEE_DELETED)))
}

/// 按名称更新员工
#[utoipa::path(
    put,
    path = "/funcionario/{nome}",
    params(("nome" = String, Path, description = "Nome do funcionário")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Funcionário atualizado", body = EmployeeUpdatedResponse),
        (status = 400, description = "Nenhum campo para atualizar", body = ErrorResponse),
        (status = 404, description = "Funcionário não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "funcionarios"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonBody(payload): JsonBody<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeUpdatedResponse>, CoreError> {
    let employee = state.employee_service.update_by_name(&name, payload).await?;
    Ok(Json(EmployeeUpdatedResponse {
        message: EMPLOYEE_UPDATED.to_string(),
        employee,
    }))
}
