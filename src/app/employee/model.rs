//! 员工数据模型

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 员工文档所在集合
pub const EMPLOYEE_COLLECTION: &str = "funcionarios";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "_id": "0b7c3c1e-6f0e-4a51-9a53-2f4d1f1c2a10",
    "nome": "Ana",
    "cargo": "Dev",
    "salario": 0,
    "contratado": false
}))]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "contratado")]
    pub hired: bool,
}

/// 创建员工请求，所有字段必填；数值和布尔字段只检查是否存在
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[schema(example = json!({ "nome": "Ana", "cargo": "Dev", "salario": 0, "contratado": false }))]
pub struct CreateEmployeeRequest {
    #[serde(rename = "nome")]
    #[validate(required(code = "nome"), length(min = 1, code = "nome"))]
    pub name: Option<String>,
    #[serde(rename = "cargo")]
    #[validate(required(code = "cargo"), length(min = 1, code = "cargo"))]
    pub role: Option<String>,
    #[serde(rename = "salario")]
    #[validate(required(code = "salario"))]
    pub salary: Option<f64>,
    #[serde(rename = "contratado")]
    #[validate(required(code = "contratado"))]
    pub hired: Option<bool>,
}

/// 更新员工请求，至少提供一个字段
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(example = json!({ "salario": 5200.0 }))]
pub struct UpdateEmployeeRequest {
    #[serde(rename = "cargo")]
    pub role: Option<String>,
    #[serde(rename = "salario")]
    pub salary: Option<f64>,
    #[serde(rename = "contratado")]
    pub hired: Option<bool>,
}

/// 稀疏更新：只序列化调用方提供的字段
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct EmployeePatch {
    #[serde(rename = "cargo", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "salario", skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(rename = "contratado", skip_serializing_if = "Option::is_none")]
    pub hired: Option<bool>,
}

impl UpdateEmployeeRequest {
    /// 空字符串的 `cargo` 视为未提供
    pub fn into_patch(self) -> EmployeePatch {
        EmployeePatch {
            role: self.role.filter(|role| !role.is_empty()),
            salary: self.salary,
            hired: self.hired,
        }
    }
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.salary.is_none() && self.hired.is_none()
    }
}

/// 更新成功后的响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeUpdatedResponse {
    pub message: String,
    #[serde(rename = "funcionario")]
    pub employee: Employee,
}
