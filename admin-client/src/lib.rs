//! Admin client - HTTP access to the admin server plus the products page model
//!
//! ```no_run
//! use admin_client::{ClientConfig, ProductsPage};
//!
//! # async fn demo() -> admin_client::ClientResult<()> {
//! let client = ClientConfig::new("http://localhost:3000").build_http_client()?;
//! let mut page = ProductsPage::new();
//! page.reload(&client).await;
//! page.set_search("mint");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod products;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, decode_rows};
pub use products::{LoadStatus, ProductsPage};

// Re-export shared types
pub use shared::filter::{FilterConfig, FilterDescriptor, ProductDetailView};
pub use shared::models::ProductRecord;
