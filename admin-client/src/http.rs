//! HTTP client for the admin server API

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::ApiResponse;
use shared::filter::{FilterConfig, FilterDescriptor, ProductDetailView};
use shared::models::ProductRecord;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the admin server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Map non-success statuses to [`ClientError`], decode the body otherwise
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Prefer the server's error envelope message over the raw body
            let message = serde_json::from_str::<ApiResponse>(&text)
                .map(|r| r.message)
                .unwrap_or(text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                StatusCode::SERVICE_UNAVAILABLE | StatusCode::REQUEST_TIMEOUT => {
                    Err(ClientError::Unavailable(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Menu API ==========

    /// Fetch all products
    ///
    /// Rows that do not decode as a [`ProductRecord`] are dropped with a
    /// warning; the rest of the list is kept.
    pub async fn fetch_products(&self) -> ClientResult<Vec<ProductRecord>> {
        let rows: Vec<Value> = self.get("/menu").await?;
        Ok(decode_rows(rows))
    }

    /// Server-side filtering with the same engine as [`shared::filter::FilterState`]
    pub async fn query_products(&self, descriptor: &FilterDescriptor) -> ClientResult<Vec<ProductRecord>> {
        let rows: Vec<Value> = self.post("/menu/query", descriptor).await?;
        Ok(decode_rows(rows))
    }

    /// Sidebar groups and table columns
    pub async fn filter_config(&self) -> ClientResult<FilterConfig> {
        self.get("/menu/filters").await
    }

    /// Detail panel of one product
    pub async fn product_detail(&self, id: &str) -> ClientResult<ProductDetailView> {
        self.get(&format!("/menu/{}/detail", id)).await
    }
}

/// Decode rows one by one, skipping malformed entries
pub fn decode_rows(rows: Vec<Value>) -> Vec<ProductRecord> {
    let total = rows.len();
    let records: Vec<ProductRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<ProductRecord>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "Dropping malformed product row");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            total,
            kept = records.len(),
            "Product list contained malformed rows"
        );
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_rows_drops_only_malformed() {
        let rows = vec![
            json!({ "id": "SP000018", "name": "Mint Tea", "type": "Khác", "price": "15,000", "stock": "1,007" }),
            json!({ "id": "SP000099", "name": "No price", "type": "Khác", "stock": "1" }),
            json!("not an object"),
            json!({ "id": "SP000023", "name": "Thuốc lá Vinataba", "type": "Khác", "price": "30,000", "stock": "25,177",
                    "details": { "category": "Thuốc lá" } }),
        ];

        let records = decode_rows(rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "SP000018");
        assert_eq!(records[1].details.category.as_deref(), Some("Thuốc lá"));
    }

    #[test]
    fn test_url_joins_single_slash() {
        let client = ClientConfig::new("http://localhost:3000/").build_http_client().unwrap();
        assert_eq!(client.url("/menu"), "http://localhost:3000/menu");
        assert_eq!(client.url("menu/query"), "http://localhost:3000/menu/query");
    }
}
