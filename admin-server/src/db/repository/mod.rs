//! Repository Module
//!
//! CRUD operations over the SurrealDB tables.
//!
//! IDs travel as `"table:key"` strings. Path parameters may also carry the
//! bare key (`SP000018` for `menu_item:SP000018`), see [`parse_record_id`].

pub mod branch;
pub mod dining_table;
pub mod employee;
pub mod menu_item;

pub use branch::BranchRepository;
pub use dining_table::DiningTableRepository;
pub use employee::EmployeeRepository;
pub use menu_item::MenuItemRepository;

use serde::Deserialize;
use shared::error::ErrorCode;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
///
/// Variants that map to a client-visible condition carry the specific
/// [`ErrorCode`] reported to the API caller.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{message}")]
    NotFound { code: ErrorCode, message: String },

    #[error("{message}")]
    Duplicate { code: ErrorCode, message: String },

    #[error("{message}")]
    Conflict { code: ErrorCode, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl RepoError {
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        RepoError::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn duplicate(code: ErrorCode, message: impl Into<String>) -> Self {
        RepoError::Duplicate {
            code,
            message: message.into(),
        }
    }

    pub fn conflict(code: ErrorCode, message: impl Into<String>) -> Self {
        RepoError::Conflict {
            code,
            message: message.into(),
        }
    }
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse `"table:key"` or a bare `"key"` into a RecordId of `table`
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    if !id.contains(':') {
        if id.trim().is_empty() {
            return Err(RepoError::Validation("Empty ID".to_string()));
        }
        return Ok(RecordId::from_table_key(table, id));
    }

    let thing: RecordId = id
        .parse()
        .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
    if thing.table() != table {
        return Err(RepoError::Validation(format!(
            "ID {} does not belong to table {}",
            id, table
        )));
    }
    Ok(thing)
}

/// Row of a `SELECT count() AS total ... GROUP ALL` query
#[derive(Debug, Deserialize)]
pub(crate) struct CountRow {
    pub total: i64,
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Run a counting query that yields at most one [`CountRow`]
    pub(crate) async fn count(&self, query: &'static str, bindings: Vec<(&'static str, RecordId)>) -> RepoResult<i64> {
        let mut q = self.db.query(query);
        for binding in bindings {
            q = q.bind(binding);
        }
        let row: Option<CountRow> = q.await?.take(0)?;
        Ok(row.map(|r| r.total).unwrap_or(0))
    }
}
