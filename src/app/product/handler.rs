//! 产品处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{CreateProductRequest, Product, ProductUpdatedResponse, UpdateProductRequest};
use super::service::{PRODUCT_CREATED, PRODUCT_DELETED, PRODUCT_UPDATED};
use crate::app::AppState;
use crate::core::{
    error::{CoreError, ErrorResponse},
    extract::JsonBody,
    response::{DeleteResponse, MessageResponse},
};

/// 创建产品
#[utoipa::path(
    post,
    path = "/produto",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Produto cadastrado com sucesso", body = MessageResponse),
        (status = 400, description = "Corpo da requisição inválido", body = ErrorResponse),
        (status = 422, description = "Campos obrigatórios ausentes", body = ErrorResponse),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "produtos"
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), CoreError> {
    state.product_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(PRODUCT_CREATED))))
}

/// 获取所有产品
#[utoipa::path(
    get,
    path = "/produto",
    responses(
        (status = 200, description = "Lista de produtos", body = Vec<Product>),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "produtos"
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, CoreError> {
    Ok(Json(state.product_service.list().await?))
}

/// 按名称获取产品
#[utoipa::path(
    get,
    path = "/produto/{nome}",
    params(("nome" = String, Path, description = "Nome do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = Product),
        (status = 404, description = "Produto não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "produtos"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Product>, CoreError> {
    Ok(Json(state.product_service.get_by_name(&name).await?))
}

/// 按名称删除产品
#[utoipa::path(
    delete,
    path = "/produto/{nome}",
    params(("nome" = String, Path, description = "Nome do produto")),
    responses(
        (status = 200, description = "Produto deletado", body = DeleteResponse),
        (status = 404, description = "Produto não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "produtos"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse>, CoreError> {
    let result = state.product_service.delete_by_name(&name).await?;
    Ok(Json(DeleteResponse::new(result, PRODUCT_DELETED)))
}

/// 按名称更新产品
#[utoipa::path(
    put,
    path = "/produto/{nome}",
    params(("nome" = String, Path, description = "Nome do produto")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Produto atualizado", body = ProductUpdatedResponse),
        (status = 400, description = "Nenhum campo para atualizar", body = ErrorResponse),
        (status = 404, description = "Produto não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro no armazenamento", body = ErrorResponse)
    ),
    tag = "produtos"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> Result<Json<ProductUpdatedResponse>, CoreError> {
    let product = state.product_service.update_by_name(&name, payload).await?;
    Ok(Json(ProductUpdatedResponse {
        message: PRODUCT_UPDATED.to_string(),
        product,
    }))
}
