//! Branch Model

use super::{default_true, serde_helpers};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Branch entity (chi nhánh / 门店)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

/// Create branch payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchCreate {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Update branch payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
