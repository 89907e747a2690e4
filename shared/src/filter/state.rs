//! Filter state holder
//!
//! Owns the record list and the current [`FilterDescriptor`]. Every update
//! replaces the descriptor wholesale and recomputes the visible rows
//! synchronously, so `visible_rows()` is never stale.

use crate::filter::{AccordionSelection, CategoryGroupMapping, FilterDescriptor, compute_visible_rows};
use crate::models::ProductRecord;

#[derive(Debug, Clone)]
pub struct FilterState {
    records: Vec<ProductRecord>,
    mapping: CategoryGroupMapping,
    descriptor: FilterDescriptor,
    visible: Vec<ProductRecord>,
}

impl FilterState {
    /// State over `records` with the default group mapping and no filters
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self::with_mapping(records, CategoryGroupMapping::default())
    }

    pub fn with_mapping(records: Vec<ProductRecord>, mapping: CategoryGroupMapping) -> Self {
        let visible = records.clone();
        Self {
            records,
            mapping,
            descriptor: FilterDescriptor::new(),
            visible,
        }
    }

    /// Search-input callback
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.descriptor = self.descriptor.with_search(text);
        self.recompute();
    }

    /// Accordion callback, receives the complete current selection
    pub fn set_accordion_filters(&mut self, accordion: AccordionSelection) {
        self.descriptor = self.descriptor.with_accordion(accordion);
        self.recompute();
    }

    /// Replace the record list (e.g. after a backend fetch), keeping filters
    pub fn set_records(&mut self, records: Vec<ProductRecord>) {
        self.records = records;
        self.recompute();
    }

    pub fn descriptor(&self) -> &FilterDescriptor {
        &self.descriptor
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn mapping(&self) -> &CategoryGroupMapping {
        &self.mapping
    }

    pub fn visible_rows(&self) -> &[ProductRecord] {
        &self.visible
    }

    fn recompute(&mut self) {
        self.visible = compute_visible_rows(&self.records, &self.descriptor, &self.mapping);
        tracing::debug!(
            total = self.records.len(),
            visible = self.visible.len(),
            search = %self.descriptor.search(),
            "Filtered product rows"
        );
    }
}
