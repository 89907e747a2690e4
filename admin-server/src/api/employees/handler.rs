//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_code, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /employee - 获取所有在职员工
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// GET /employee/:id - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {} not found", id))
    })?;
    Ok(Json(employee))
}

/// POST /employee - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    validate_code(&payload.username, "username")?;
    validate_required_text(&payload.display_name, "display_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.role, "role", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.create(payload).await?;

    let id = employee.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    audit_log!("create", id.as_str());

    Ok(Json(employee))
}

/// PUT /employee/:id - 更新员工
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if let Some(name) = &payload.display_name {
        validate_required_text(name, "display_name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.role, "role", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.update(&id, payload).await?;
    audit_log!("update", id.as_str());
    Ok(Json(employee))
}

/// DELETE /employee/:id - 删除员工
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    audit_log!("delete", id.as_str());
    Ok(Json(result))
}
