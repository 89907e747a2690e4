//! 工具模块
//!
//! - [`error`] - 统一错误类型 (re-exported from shared)
//! - [`logger`] - tracing 日志初始化, 审计日志
//! - [`validation`] - 输入校验
//! - [`format`] - 金额/数量格式化

pub mod error;
pub mod format;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use logger::{init_logger, init_logger_with_file};
