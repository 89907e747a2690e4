//! Menu Item Model
//!
//! Stored form of a product. The record key is the product code
//! (`menu_item:SP000018`); amounts and quantities are integers (VND, units)
//! and only become display strings in [`MenuItem::to_record`].

use super::{default_true, serde_helpers};
use serde::{Deserialize, Serialize};
use shared::models::{ProductDetails, ProductRecord};
use surrealdb::RecordId;

use crate::utils::format::format_thousands;

pub const DEFAULT_MENU_TYPE: &str = "Khác";

/// Menu item entity (hàng hóa / 菜品)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub code: String,
    pub name: String,
    /// Loại thực đơn
    pub menu_type: String,
    pub price: i64,
    #[serde(default)]
    pub stock: i64,
    /// Nhóm hàng
    #[serde(default)]
    pub category: Option<String>,
    /// Loại hàng
    #[serde(default)]
    pub item_type: Option<String>,
    /// Định mức tồn
    #[serde(default)]
    pub stock_limit: Option<i64>,
    /// Giá vốn
    #[serde(default)]
    pub cost: Option<i64>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order_note: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

impl MenuItem {
    /// Display row for the products page
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            id: self.code.clone(),
            name: self.name.clone(),
            menu_type: self.menu_type.clone(),
            price: format_thousands(self.price),
            stock: format_thousands(self.stock),
            details: ProductDetails {
                image_url: self.image_url.clone(),
                category: self.category.clone(),
                item_type: self.item_type.clone(),
                stock_limit: self.stock_limit.map(format_thousands),
                cost: self.cost.map(format_thousands),
                weight: self.weight.clone(),
                description: self.description.clone(),
                order_note: self.order_note.clone(),
            },
        }
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub code: String,
    pub name: String,
    /// Defaults to [`DEFAULT_MENU_TYPE`]
    pub menu_type: Option<String>,
    pub price: i64,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub item_type: Option<String>,
    pub stock_limit: Option<i64>,
    pub cost: Option<i64>,
    pub weight: Option<String>,
    pub description: Option<String>,
    pub order_note: Option<String>,
    pub image_url: Option<String>,
}

impl MenuItemCreate {
    pub(crate) fn into_item(self) -> MenuItem {
        MenuItem {
            id: None,
            code: self.code,
            name: self.name,
            menu_type: self
                .menu_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MENU_TYPE.to_string()),
            price: self.price,
            stock: self.stock.unwrap_or(0),
            category: self.category,
            item_type: self.item_type,
            stock_limit: self.stock_limit,
            cost: self.cost,
            weight: self.weight,
            description: self.description,
            order_note: self.order_note,
            image_url: self.image_url,
            is_active: true,
        }
    }
}

/// Update menu item payload
///
/// The code is the record key and cannot change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
