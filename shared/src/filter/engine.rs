//! Row filter engine
//!
//! Pure function of (records, descriptor, mapping). Always recomputed over the
//! full record list, in two stages:
//!
//! 1. search: keep a record when any row field contains the search text,
//!    case-insensitively. Skipped when the text is empty.
//! 2. category: for every group with a non-empty selection and a known
//!    mapping, keep a record only when its mapped field is one of the
//!    selected labels. Groups combine with AND; unmapped groups are ignored.

use crate::filter::{CategoryGroupMapping, FilterDescriptor};
use crate::models::{ProductField, ProductRecord};

/// Visible subset of `records` under `descriptor`, in original order
pub fn compute_visible_rows(
    records: &[ProductRecord],
    descriptor: &FilterDescriptor,
    mapping: &CategoryGroupMapping,
) -> Vec<ProductRecord> {
    let needle = descriptor.search().to_lowercase();
    let constraints: Vec<(ProductField, &[String])> = descriptor
        .active_groups()
        .filter_map(|(group, labels)| mapping.field_for(group).map(|field| (field, labels)))
        .collect();

    records
        .iter()
        .filter(|record| needle.is_empty() || matches_search(record, &needle))
        .filter(|record| {
            constraints
                .iter()
                .all(|(field, labels)| matches_selection(record, *field, labels))
        })
        .cloned()
        .collect()
}

/// `needle` must already be lowercase
fn matches_search(record: &ProductRecord, needle: &str) -> bool {
    record
        .row_values()
        .any(|value| value.to_lowercase().contains(needle))
}

fn matches_selection(record: &ProductRecord, field: ProductField, labels: &[String]) -> bool {
    match record.field(field) {
        Some(value) => labels.iter().any(|label| label == value),
        None => false,
    }
}
