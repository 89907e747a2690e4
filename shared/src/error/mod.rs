//! Unified error system for the admin backend
//!
//! - [`ErrorCode`]: numeric codes shared by server and client
//! - [`ErrorCategory`]: code range classification
//! - [`AppError`]: code, message and details
//! - [`ApiResponse`]: JSON error envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Menu errors
//! - 7xxx: Table and branch errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::BranchNotFound, "Branch branch:q1 not found")
//!     .with_detail("id", "branch:q1");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 7101);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
