//! Product Model
//!
//! The row shape shown on the products page, plus the optional detail fields
//! rendered by the expandable detail panel.

use serde::{Deserialize, Serialize};

/// Product row (hàng hóa)
///
/// `price` and `stock` are display strings already formatted by the backend
/// (e.g. `"30,000"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product code, e.g. `SP000023`
    pub id: String,
    pub name: String,
    /// Menu type label (Loại thực đơn)
    #[serde(rename = "type")]
    pub menu_type: String,
    pub price: String,
    pub stock: String,
    #[serde(default)]
    pub details: ProductDetails,
}

/// Detail panel fields; any of them may be unknown for a given product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDetails {
    pub image_url: Option<String>,
    /// Nhóm hàng
    pub category: Option<String>,
    /// Loại hàng
    pub item_type: Option<String>,
    /// Định mức tồn
    pub stock_limit: Option<String>,
    /// Giá vốn
    pub cost: Option<String>,
    pub weight: Option<String>,
    pub description: Option<String>,
    pub order_note: Option<String>,
}

/// Addressable product fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Id,
    Name,
    #[serde(rename = "type")]
    MenuType,
    Price,
    Stock,
    Category,
    ItemType,
}

impl ProductField {
    /// Fields of the table row, in column order. Free-text search runs over these.
    pub const ROW: [ProductField; 5] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::MenuType,
        ProductField::Price,
        ProductField::Stock,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::MenuType => "type",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::Category => "category",
            Self::ItemType => "item_type",
        }
    }
}

impl ProductRecord {
    /// Value of a field, `None` when an optional detail field is unset
    pub fn field(&self, field: ProductField) -> Option<&str> {
        match field {
            ProductField::Id => Some(&self.id),
            ProductField::Name => Some(&self.name),
            ProductField::MenuType => Some(&self.menu_type),
            ProductField::Price => Some(&self.price),
            ProductField::Stock => Some(&self.stock),
            ProductField::Category => self.details.category.as_deref(),
            ProductField::ItemType => self.details.item_type.as_deref(),
        }
    }

    /// Row values in column order
    pub fn row_values(&self) -> impl Iterator<Item = &str> {
        ProductField::ROW.into_iter().filter_map(|f| self.field(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_row_without_details() {
        let json = r#"{"id":"SP000018","name":"Mint Tea","type":"Khác","price":"15,000","stock":"1,007"}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.menu_type, "Khác");
        assert_eq!(record.details, ProductDetails::default());
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let record = ProductRecord {
            id: "SP1".into(),
            name: "Trà".into(),
            menu_type: "Đồ uống".into(),
            price: "10,000".into(),
            stock: "5".into(),
            details: ProductDetails::default(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Đồ uống");
        assert!(json.get("menu_type").is_none());
    }

    #[test]
    fn test_field_access() {
        let mut record: ProductRecord = serde_json::from_str(
            r#"{"id":"SP1","name":"Cơm","type":"Đồ ăn","price":"1","stock":"2"}"#,
        )
        .unwrap();
        assert_eq!(record.field(ProductField::Name), Some("Cơm"));
        assert_eq!(record.field(ProductField::ItemType), None);

        record.details.item_type = Some("Chế biến".into());
        assert_eq!(record.field(ProductField::ItemType), Some("Chế biến"));
        assert_eq!(
            record.row_values().collect::<Vec<_>>(),
            vec!["SP1", "Cơm", "Đồ ăn", "1", "2"]
        );
    }
}
