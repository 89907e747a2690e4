//! 服务层
//!
//! - [`http`] - Router 组装与 HTTP 中间件

pub mod http;

pub use http::build_app;
