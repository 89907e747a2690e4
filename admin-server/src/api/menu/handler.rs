//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::filter::{
    CategoryGroupMapping, FilterConfig, FilterDescriptor, ProductDetailView, compute_visible_rows,
};
use shared::models::ProductRecord;

use crate::audit_log;
use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::MenuItemRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_code,
    validate_non_negative, validate_optional_non_negative, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

async fn records(state: &ServerState) -> AppResult<Vec<ProductRecord>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_all().await?;
    Ok(items.iter().map(MenuItem::to_record).collect())
}

async fn find(state: &ServerState, id: &str) -> AppResult<MenuItem> {
    let repo = MenuItemRepository::new(state.db.clone());
    repo.find_by_id(id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {} not found", id))
    })
}

/// GET /menu - 获取商品列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductRecord>>> {
    Ok(Json(records(&state).await?))
}

/// POST /menu/query - 按搜索词和分组筛选商品
pub async fn query(
    State(state): State<ServerState>,
    Json(descriptor): Json<FilterDescriptor>,
) -> AppResult<Json<Vec<ProductRecord>>> {
    let all = records(&state).await?;
    let visible = compute_visible_rows(&all, &descriptor, &CategoryGroupMapping::default());
    tracing::debug!(
        total = all.len(),
        visible = visible.len(),
        search = %descriptor.search(),
        "Menu query"
    );
    Ok(Json(visible))
}

/// GET /menu/filters - 侧栏分组与列定义
pub async fn filters() -> Json<FilterConfig> {
    Json(FilterConfig::products())
}

/// GET /menu/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(find(&state, &id).await?))
}

/// GET /menu/:id/detail - 详情面板
pub async fn detail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductDetailView>> {
    let item = find(&state, &id).await?;
    Ok(Json(ProductDetailView::from_record(&item.to_record())))
}

fn validate_details(
    category: &Option<String>,
    item_type: &Option<String>,
    weight: &Option<String>,
    description: &Option<String>,
    order_note: &Option<String>,
    image_url: &Option<String>,
) -> AppResult<()> {
    validate_optional_text(category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(item_type, "item_type", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(weight, "weight", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(order_note, "order_note", MAX_NOTE_LEN)?;
    validate_optional_text(image_url, "image_url", MAX_URL_LEN)?;
    Ok(())
}

/// POST /menu - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_code(&payload.code, "code")?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.menu_type, "menu_type", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(payload.price, "price")?;
    validate_optional_non_negative(payload.stock, "stock")?;
    validate_optional_non_negative(payload.stock_limit, "stock_limit")?;
    validate_optional_non_negative(payload.cost, "cost")?;
    validate_details(
        &payload.category,
        &payload.item_type,
        &payload.weight,
        &payload.description,
        &payload.order_note,
        &payload.image_url,
    )?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload).await?;
    let resource = format!("menu_item:{}", item.code);
    audit_log!("create", resource.as_str());
    Ok(Json(item))
}

/// PUT /menu/:id - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(menu_type) = &payload.menu_type {
        validate_required_text(menu_type, "menu_type", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_non_negative(payload.price, "price")?;
    validate_optional_non_negative(payload.stock, "stock")?;
    validate_optional_non_negative(payload.stock_limit, "stock_limit")?;
    validate_optional_non_negative(payload.cost, "cost")?;
    validate_details(
        &payload.category,
        &payload.item_type,
        &payload.weight,
        &payload.description,
        &payload.order_note,
        &payload.image_url,
    )?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await?;
    let resource = format!("menu_item:{}", item.code);
    audit_log!("update", resource.as_str());
    Ok(Json(item))
}

/// DELETE /menu/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    audit_log!("delete", id.as_str());
    Ok(Json(result))
}
