//! Filter descriptor: free-text search plus accordion selections

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected option labels per accordion group
pub type AccordionSelection = BTreeMap<String, Vec<String>>;

/// Combined filter state of the products page
///
/// Immutable value: every update produces a new descriptor with exactly one
/// field replaced. Selection lists keep their first-seen order and never hold
/// the same label twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDescriptor")]
pub struct FilterDescriptor {
    search: String,
    accordion: AccordionSelection,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawDescriptor {
    search: String,
    accordion: AccordionSelection,
}

impl From<RawDescriptor> for FilterDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        Self {
            search: raw.search,
            accordion: normalize(raw.accordion),
        }
    }
}

impl FilterDescriptor {
    /// Descriptor with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this descriptor with the search text replaced
    pub fn with_search(&self, text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            accordion: self.accordion.clone(),
        }
    }

    /// Copy of this descriptor with the accordion selection replaced
    pub fn with_accordion(&self, accordion: AccordionSelection) -> Self {
        Self {
            search: self.search.clone(),
            accordion: normalize(accordion),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn accordion(&self) -> &AccordionSelection {
        &self.accordion
    }

    /// Groups with at least one selected label
    pub fn active_groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.accordion
            .iter()
            .filter(|(_, labels)| !labels.is_empty())
            .map(|(group, labels)| (group.as_str(), labels.as_slice()))
    }

    /// True when neither stage would drop a record
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.active_groups().next().is_none()
    }
}

fn normalize(accordion: AccordionSelection) -> AccordionSelection {
    accordion
        .into_iter()
        .map(|(group, labels)| {
            let mut unique: Vec<String> = Vec::with_capacity(labels.len());
            for label in labels {
                if !unique.contains(&label) {
                    unique.push(label);
                }
            }
            (group, unique)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(group: &str, labels: &[&str]) -> AccordionSelection {
        let mut map = AccordionSelection::new();
        map.insert(
            group.to_string(),
            labels.iter().map(|l| l.to_string()).collect(),
        );
        map
    }

    #[test]
    fn test_with_search_keeps_accordion() {
        let d = FilterDescriptor::new().with_accordion(selection("Loại thực đơn", &["Khác"]));
        let next = d.with_search("mint");

        assert_eq!(next.search(), "mint");
        assert_eq!(next.accordion(), d.accordion());
        // the original value is untouched
        assert_eq!(d.search(), "");
    }

    #[test]
    fn test_with_accordion_keeps_search() {
        let d = FilterDescriptor::new().with_search("thuốc");
        let next = d.with_accordion(selection("Loại hàng", &["Dịch vụ"]));

        assert_eq!(next.search(), "thuốc");
        assert_eq!(next.accordion()["Loại hàng"], vec!["Dịch vụ".to_string()]);
    }

    #[test]
    fn test_duplicate_labels_are_dropped_in_order() {
        let d = FilterDescriptor::new()
            .with_accordion(selection("Loại thực đơn", &["Khác", "Đồ ăn", "Khác"]));
        assert_eq!(
            d.accordion()["Loại thực đơn"],
            vec!["Khác".to_string(), "Đồ ăn".to_string()]
        );
    }

    #[test]
    fn test_active_groups_skip_empty_selection() {
        let mut map = selection("Loại thực đơn", &[]);
        map.insert("Loại hàng".into(), vec!["Chế biến".into()]);
        let d = FilterDescriptor::new().with_accordion(map);

        let active: Vec<_> = d.active_groups().map(|(g, _)| g).collect();
        assert_eq!(active, vec!["Loại hàng"]);
        assert!(!d.is_unconstrained());

        let empty = FilterDescriptor::new().with_accordion(selection("Loại hàng", &[]));
        assert!(empty.is_unconstrained());
    }

    #[test]
    fn test_deserialize_partial_and_normalized() {
        let d: FilterDescriptor = serde_json::from_str(r#"{"search":"mint"}"#).unwrap();
        assert_eq!(d.search(), "mint");
        assert!(d.accordion().is_empty());

        let d: FilterDescriptor =
            serde_json::from_str(r#"{"accordion":{"Loại thực đơn":["Khác","Khác"]}}"#).unwrap();
        assert_eq!(d.search(), "");
        assert_eq!(d.accordion()["Loại thực đơn"].len(), 1);
    }
}
