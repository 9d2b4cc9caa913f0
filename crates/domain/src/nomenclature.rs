//! Nomenclature registry — entries of the regulatory medical-service
//! classification.
//!
//! Unlike the priced datasets the registry is loaded in a single
//! server-ordered request and is not cached; filtering happens in memory.

use serde::{Deserialize, Serialize};

use crate::catalog::contains_ci;

/// One entry of the regulatory nomenclature registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomenclatureItem {
    pub id: String,
    /// Top-level chapter of the registry.
    pub section: String,
    pub service_type: String,
    pub service_class: String,
    /// Registry code assigned by the health ministry.
    pub code: String,
    pub name: String,
}

/// Filters for nomenclature entries.
///
/// The three classification conditions are exact matches (they come from
/// tree selection); `search` is a case-insensitive substring match against
/// every column.
#[derive(Debug, Default, Clone)]
pub struct NomenclatureFilter {
    pub section: Option<String>,
    pub service_type: Option<String>,
    pub service_class: Option<String>,
    pub search: Option<String>,
}

impl NomenclatureFilter {
    /// Whether `item` satisfies every present condition.
    #[must_use]
    pub fn matches(&self, item: &NomenclatureItem) -> bool {
        if let Some(section) = &self.section {
            if &item.section != section {
                return false;
            }
        }
        if let Some(service_type) = &self.service_type {
            if &item.service_type != service_type {
                return false;
            }
        }
        if let Some(service_class) = &self.service_class {
            if &item.service_class != service_class {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let any = contains_ci(&item.section, search)
                || contains_ci(&item.service_type, search)
                || contains_ci(&item.service_class, search)
                || contains_ci(&item.code, search)
                || contains_ci(&item.name, search);
            if !any {
                return false;
            }
        }
        true
    }
}

/// Retain the entries satisfying `filter`, preserving order.
#[must_use]
pub fn filter_nomenclature(
    items: &[NomenclatureItem],
    filter: &NomenclatureFilter,
) -> Vec<NomenclatureItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}
