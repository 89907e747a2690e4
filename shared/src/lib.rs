//! Shared types for the POS admin backend
//!
//! Common types used by admin-server and admin-client: error types,
//! response structures, product models and the products page filtering.

pub mod error;
pub mod filter;
pub mod fixtures;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use filter::{CategoryGroupMapping, FilterDescriptor, FilterState, compute_visible_rows};
pub use models::{ProductDetails, ProductField, ProductRecord};
