//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::core::ServerState;
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use crate::db::repository::DiningTableRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_capacity(capacity: Option<i32>) -> AppResult<()> {
    match capacity {
        Some(c) if c < 1 => Err(AppError::validation("capacity must be at least 1")),
        _ => Ok(()),
    }
}

/// GET /table - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let tables = repo.find_all().await?;
    Ok(Json(tables))
}

/// GET /table/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::TableNotFound, format!("Dining table {} not found", id))
    })?;
    Ok(Json(table))
}

/// POST /table - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_capacity(payload.capacity)?;

    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.create(payload).await?;

    let id = table.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    audit_log!("create", id.as_str());

    Ok(Json(table))
}

/// PUT /table/:id - 更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_capacity(payload.capacity)?;

    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.update(&id, payload).await?;
    audit_log!("update", id.as_str());
    Ok(Json(table))
}

/// DELETE /table/:id - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    audit_log!("delete", id.as_str());
    Ok(Json(result))
}
