//! Products page model
//!
//! Wraps a [`FilterState`] with the fetch lifecycle and the row selected for
//! the detail panel. Search and sidebar callbacks go straight to the filter
//! state; a reload swaps the record list and keeps the current filters.

use shared::filter::{AccordionSelection, FilterDescriptor, FilterState, ProductDetailView};
use shared::models::ProductRecord;

use crate::{ClientError, HttpClient};

/// Record fetch status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// `retryable` drives the retry affordance
    Failed { message: String, retryable: bool },
}

#[derive(Debug, Clone)]
pub struct ProductsPage {
    filter: FilterState,
    status: LoadStatus,
    selected: Option<String>,
}

impl Default for ProductsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductsPage {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Page preloaded with `records` (status stays `Idle`)
    pub fn with_records(records: Vec<ProductRecord>) -> Self {
        Self {
            filter: FilterState::new(records),
            status: LoadStatus::Idle,
            selected: None,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn descriptor(&self) -> &FilterDescriptor {
        self.filter.descriptor()
    }

    pub fn visible_rows(&self) -> &[ProductRecord] {
        self.filter.visible_rows()
    }

    pub fn records(&self) -> &[ProductRecord] {
        self.filter.records()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.set_search(text);
    }

    pub fn set_accordion_filters(&mut self, accordion: AccordionSelection) {
        self.filter.set_accordion_filters(accordion);
    }

    /// Fetch the record list through `client`
    pub async fn reload(&mut self, client: &HttpClient) {
        self.status = LoadStatus::Loading;
        let result = client.fetch_products().await;
        self.apply_load(result);
    }

    /// Apply a fetch result
    ///
    /// On failure the previous rows stay visible.
    pub fn apply_load(&mut self, result: Result<Vec<ProductRecord>, ClientError>) {
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Products loaded");
                self.filter.set_records(records);
                if let Some(id) = &self.selected
                    && !self.filter.records().iter().any(|r| &r.id == id)
                {
                    self.selected = None;
                }
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load products");
                self.status = LoadStatus::Failed {
                    retryable: e.is_retryable(),
                    message: e.to_string(),
                };
            }
        }
    }

    /// Select a row for the detail panel; unknown ids clear the selection
    pub fn select(&mut self, id: &str) -> Option<ProductDetailView> {
        self.selected = self
            .filter
            .records()
            .iter()
            .any(|r| r.id == id)
            .then(|| id.to_string());
        self.selected_detail()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_detail(&self) -> Option<ProductDetailView> {
        let id = self.selected.as_ref()?;
        self.filter
            .records()
            .iter()
            .find(|r| &r.id == id)
            .map(ProductDetailView::from_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::fixtures::product_rows;

    #[test]
    fn test_failed_load_keeps_rows() {
        let mut page = ProductsPage::with_records(product_rows());
        page.set_search("thuốc");

        page.apply_load(Err(ClientError::Unavailable("restarting".into())));

        assert!(matches!(
            page.status(),
            LoadStatus::Failed { retryable: true, .. }
        ));
        assert_eq!(page.records().len(), 4);
        assert_eq!(page.visible_rows().len(), 3);
    }

    #[test]
    fn test_non_retryable_failure() {
        let mut page = ProductsPage::new();
        page.apply_load(Err(ClientError::InvalidResponse("html".into())));
        match page.status() {
            LoadStatus::Failed { message, retryable } => {
                assert!(!retryable);
                assert!(message.contains("html"));
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_load_keeps_filters() {
        let mut page = ProductsPage::new();
        page.set_search("mint");
        assert!(page.visible_rows().is_empty());

        page.apply_load(Ok(product_rows()));
        assert_eq!(page.status(), &LoadStatus::Loaded);
        assert_eq!(page.visible_rows().len(), 1);
        assert_eq!(page.descriptor().search(), "mint");
    }

    #[test]
    fn test_selection_follows_records() {
        let mut page = ProductsPage::with_records(product_rows());
        let detail = page.select("SP000024").unwrap();
        assert_eq!(detail.product_name, "Thuốc lá Marlboro");

        assert!(page.select("SP404").is_none());
        assert!(page.selected_detail().is_none());

        page.select("SP000024");
        let remaining: Vec<_> = product_rows()
            .into_iter()
            .filter(|r| r.id != "SP000024")
            .collect();
        page.apply_load(Ok(remaining));
        assert!(page.selected_detail().is_none());
    }
}
