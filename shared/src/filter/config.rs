//! Products page layout: sidebar groups plus table columns

use serde::{Deserialize, Serialize};

use crate::filter::{AccordionGroup, ColumnDescriptor, product_accordion_groups, product_columns};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub groups: Vec<AccordionGroup>,
    pub columns: Vec<ColumnDescriptor>,
}

impl FilterConfig {
    pub fn products() -> Self {
        Self {
            groups: product_accordion_groups(),
            columns: product_columns(),
        }
    }
}
