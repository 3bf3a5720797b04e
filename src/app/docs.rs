//! OpenAPI 3.0 文档
//!
//! 文档由各处理器上的 `#[utoipa::path]` 注解生成。`{path}/openapi.json` 返回 JSON 描述，
//! `{path}` 返回加载该描述的 Swagger UI 页面。

use axum::{
    response::{Html, Json},
    routing::get,
    Router,
};
use utoipa::OpenApi;

use super::{employee, health, product, AppState};
use crate::core::{
    error::ErrorResponse,
    response::{DeleteResponse, MessageResponse},
};
use crate::infrastructure::store::DeleteResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Produtos CRUD API",
        version = "0.1.0",
        description = "API para gerenciamento de produtos e funcionários."
    ),
    paths(
        employee::handler::create_employee,
        employee::handler::list_employees,
        employee::handler::delete_employee,
        employee::handler::update_employee,
        product::handler::create_product,
        product::handler::list_products,
        product::handler::get_product,
        product::handler::delete_product,
        product::handler::update_product,
        health::health_check,
    ),
    components(schemas(
        employee::model::Employee,
        employee::model::CreateEmployeeRequest,
        employee::model::UpdateEmployeeRequest,
        employee::model::EmployeeUpdatedResponse,
        product::model::Product,
        product::model::CreateProductRequest,
        product::model::UpdateProductRequest,
        product::model::ProductUpdatedResponse,
        health::HealthResponse,
        MessageResponse,
        DeleteResponse,
        DeleteResult,
        ErrorResponse,
    )),
    tags(
        (name = "funcionarios", description = "Cadastro de funcionários"),
        (name = "produtos", description = "API para gerenciamento de produtos."),
        (name = "health", description = "Estado do serviço")
    )
)]
pub struct ApiDoc;

/// 文档路由：`path` 为 Swagger UI 页面，`{path}/openapi.json` 为描述文件
pub fn docs_routes(path: &str) -> Router<AppState> {
    let spec_url = format!("{path}/openapi.json");
    let page = swagger_page(&spec_url);

    Router::new()
        .route(
            path,
            get(move || {
                let page = page.clone();
                async move { Html(page) }
            }),
        )
        .route(&spec_url, get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn swagger_page(spec_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8" />
  <title>Produtos CRUD API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{spec_url}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/funcionario", "/funcionario/{nome}", "/produto", "/produto/{nome}", "/health"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_swagger_page_loads_openapi_json() {
        let page = swagger_page("/api-docs/openapi.json");
        assert!(page.contains(r#"url: "/api-docs/openapi.json""#));
        assert!(page.contains(r##"dom_id: "#swagger-ui""##));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
