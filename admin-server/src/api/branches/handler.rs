//! Branch API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::core::ServerState;
use crate::db::models::{Branch, BranchCreate, BranchUpdate, DiningTable};
use crate::db::repository::{BranchRepository, DiningTableRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /branch - 获取所有门店
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Branch>>> {
    let repo = BranchRepository::new(state.db.clone());
    let branches = repo.find_all().await?;
    Ok(Json(branches))
}

/// GET /branch/:id - 获取单个门店
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Branch>> {
    let repo = BranchRepository::new(state.db.clone());
    let branch = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::BranchNotFound, format!("Branch {} not found", id))
    })?;
    Ok(Json(branch))
}

/// GET /branch/:id/tables - 门店下的桌台
pub async fn list_tables(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let tables = repo.find_by_branch(&id).await?;
    Ok(Json(tables))
}

/// POST /branch - 创建门店
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BranchCreate>,
) -> AppResult<Json<Branch>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = BranchRepository::new(state.db.clone());
    let branch = repo.create(payload).await?;

    let id = branch.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    audit_log!("create", id.as_str());

    Ok(Json(branch))
}

/// PUT /branch/:id - 更新门店
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BranchUpdate>,
) -> AppResult<Json<Branch>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = BranchRepository::new(state.db.clone());
    let branch = repo.update(&id, payload).await?;
    audit_log!("update", id.as_str());
    Ok(Json(branch))
}

/// DELETE /branch/:id - 删除门店 (仍有桌台时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = BranchRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    audit_log!("delete", id.as_str());
    Ok(Json(result))
}
