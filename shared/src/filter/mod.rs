//! Products page filtering
//!
//! - [`FilterDescriptor`] - search text + accordion selections
//! - [`CategoryGroupMapping`] - group title -> product field
//! - [`compute_visible_rows`] - row filter engine
//! - [`FilterState`] - holder that recomputes on every update
//! - [`FilterConfig`] / [`ProductDetailView`] - table, sidebar and detail panel shape

mod columns;
mod config;
mod descriptor;
mod detail;
mod engine;
mod mapping;
mod state;

pub use columns::{ColumnDescriptor, product_columns};
pub use config::FilterConfig;
pub use descriptor::{AccordionSelection, FilterDescriptor};
pub use detail::{DetailEntry, Emphasis, MISSING_VALUE, ProductDetailView};
pub use engine::compute_visible_rows;
pub use mapping::{
    AccordionGroup, AccordionItem, CategoryGroupMapping, GROUP_ITEM_TYPE, GROUP_MENU_TYPE,
    product_accordion_groups,
};
pub use state::FilterState;
