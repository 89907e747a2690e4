//! Database Models

pub mod serde_helpers;

pub mod branch;
pub mod dining_table;
pub mod employee;
pub mod menu_item;

pub use branch::{Branch, BranchCreate, BranchUpdate};
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};

fn default_true() -> bool {
    true
}
