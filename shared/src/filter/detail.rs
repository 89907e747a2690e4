//! Product detail panel
//!
//! Flattens a [`ProductRecord`] into labelled entries. Unknown values render
//! as [`MISSING_VALUE`] and carry `missing = true`, so the panel never shows
//! an empty or undefined cell.

use serde::{Deserialize, Serialize};

use crate::models::ProductRecord;

/// Placeholder for a detail value the product does not have
pub const MISSING_VALUE: &str = "-";

/// Visual emphasis of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Plain,
    /// blue
    Highlight,
    /// bold green
    Price,
    /// red
    Cost,
    /// italic
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    pub label: String,
    pub value: String,
    pub missing: bool,
    pub emphasis: Emphasis,
}

impl DetailEntry {
    fn new(label: &str, value: Option<&str>, emphasis: Emphasis) -> Self {
        let value = value.filter(|v| !v.trim().is_empty());
        Self {
            label: label.to_string(),
            value: value.unwrap_or(MISSING_VALUE).to_string(),
            missing: value.is_none(),
            emphasis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetailView {
    pub product_name: String,
    pub image_url: Option<String>,
    pub entries: Vec<DetailEntry>,
}

impl ProductDetailView {
    pub fn from_record(record: &ProductRecord) -> Self {
        let d = &record.details;
        let entries = vec![
            DetailEntry::new("Mã hàng hóa", Some(record.id.as_str()), Emphasis::Plain),
            DetailEntry::new("Loại thực đơn", Some(record.menu_type.as_str()), Emphasis::Plain),
            DetailEntry::new("Nhóm hàng", d.category.as_deref(), Emphasis::Plain),
            DetailEntry::new("Loại hàng", d.item_type.as_deref(), Emphasis::Plain),
            DetailEntry::new("Định mức tồn", d.stock_limit.as_deref(), Emphasis::Highlight),
            DetailEntry::new("Giá bán", Some(record.price.as_str()), Emphasis::Price),
            DetailEntry::new("Giá vốn", d.cost.as_deref(), Emphasis::Cost),
            DetailEntry::new("Trọng lượng", d.weight.as_deref(), Emphasis::Plain),
            DetailEntry::new("Mô tả", d.description.as_deref(), Emphasis::Note),
            DetailEntry::new("Ghi chú đặt hàng", d.order_note.as_deref(), Emphasis::Plain),
        ];

        Self {
            product_name: record.name.clone(),
            image_url: d.image_url.clone(),
            entries,
        }
    }

    /// Entry by label
    pub fn entry(&self, label: &str) -> Option<&DetailEntry> {
        self.entries.iter().find(|e| e.label == label)
    }
}
