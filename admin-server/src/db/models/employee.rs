//! Employee Model

use super::{default_true, serde_helpers};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub const DEFAULT_ROLE: &str = "staff";

/// Employee entity (员工)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub username: String,
    pub display_name: String,
    /// Role label, e.g. "manager", "cashier"
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

/// Create employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub username: String,
    pub display_name: String,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
