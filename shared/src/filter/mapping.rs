//! Accordion group configuration
//!
//! Static lookup from a sidebar group title to the product field it filters,
//! plus the option labels each group offers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::ProductField;

/// Menu type group (Loại thực đơn)
pub const GROUP_MENU_TYPE: &str = "Loại thực đơn";
/// Item type group (Loại hàng)
pub const GROUP_ITEM_TYPE: &str = "Loại hàng";

/// Group title -> filtered field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroupMapping {
    groups: BTreeMap<String, ProductField>,
}

impl CategoryGroupMapping {
    /// Mapping without any group
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Add or replace a group
    pub fn with_group(mut self, title: impl Into<String>, field: ProductField) -> Self {
        self.groups.insert(title.into(), field);
        self
    }

    /// Field filtered by a group, `None` for unknown titles
    pub fn field_for(&self, title: &str) -> Option<ProductField> {
        self.groups.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// "Loại thực đơn" -> `type`, "Loại hàng" -> `item_type`
///
/// "Loại hàng" options are item kinds ("Chế biến", "Dịch vụ", ...), so the
/// group matches the detail field and never the product name.
impl Default for CategoryGroupMapping {
    fn default() -> Self {
        Self::empty()
            .with_group(GROUP_MENU_TYPE, ProductField::MenuType)
            .with_group(GROUP_ITEM_TYPE, ProductField::ItemType)
    }
}

/// One selectable option of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub label: String,
}

/// A collapsible sidebar group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionGroup {
    pub title: String,
    pub items: Vec<AccordionItem>,
}

impl AccordionGroup {
    pub fn new(title: impl Into<String>, labels: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: labels
                .iter()
                .map(|label| AccordionItem {
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}

/// Sidebar groups of the products page
pub fn product_accordion_groups() -> Vec<AccordionGroup> {
    vec![
        AccordionGroup::new(GROUP_MENU_TYPE, &["Đồ ăn", "Đồ uống", "Khác"]),
        AccordionGroup::new(
            GROUP_ITEM_TYPE,
            &["Hàng hóa thường", "Chế biến", "Dịch vụ", "Combo - Đóng gói"],
        ),
    ]
}
