//! Column descriptors for the products table

use serde::{Deserialize, Serialize};

use crate::models::ProductField;

/// One table column: source field, header and sizing
///
/// Exactly one of `width` / `flex_grow` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub field: ProductField,
    pub header_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<u8>,
}

impl ColumnDescriptor {
    fn fixed(field: ProductField, header: &str, width: u16) -> Self {
        Self {
            field,
            header_name: header.to_string(),
            width: Some(width),
            flex_grow: None,
        }
    }

    fn flexible(field: ProductField, header: &str, flex_grow: u8) -> Self {
        Self {
            field,
            header_name: header.to_string(),
            width: None,
            flex_grow: Some(flex_grow),
        }
    }
}

/// Columns of the products table, in display order
pub fn product_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::fixed(ProductField::Id, "Mã hàng hóa", 150),
        ColumnDescriptor::flexible(ProductField::Name, "Tên hàng", 1),
        ColumnDescriptor::fixed(ProductField::MenuType, "Loại thực đơn", 150),
        ColumnDescriptor::fixed(ProductField::Price, "Giá bán", 120),
        ColumnDescriptor::fixed(ProductField::Stock, "Tồn kho", 120),
    ]
}
