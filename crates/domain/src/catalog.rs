//! Pure collection pipelines over a loaded dataset.
//!
//! The remote source is only ever asked for full, server-ordered snapshots;
//! everything a catalog view needs on top of that — per-column filters, a
//! global search box, column sorting, fixed-size pages, and the section
//! hierarchy — is computed here, in memory.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::service::ServiceItem;

/// Optional per-column and global filters for service items.
///
/// Every present condition is a case-insensitive substring match; all
/// present conditions must hold. `search` matches against every column.
#[derive(Debug, Default, Clone)]
pub struct ServiceFilter {
    pub section: Option<String>,
    pub subsection1: Option<String>,
    pub subsection2: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub search: Option<String>,
}

pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl ServiceFilter {
    /// Whether no condition is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.section.is_none()
            && self.subsection1.is_none()
            && self.subsection2.is_none()
            && self.code.is_none()
            && self.name.is_none()
            && self.search.is_none()
    }

    /// Whether `item` satisfies every present condition.
    #[must_use]
    pub fn matches(&self, item: &ServiceItem) -> bool {
        let columns = [
            (&self.section, &item.section),
            (&self.subsection1, &item.subsection1),
            (&self.subsection2, &item.subsection2),
            (&self.code, &item.code),
            (&self.name, &item.name),
        ];
        for (needle, value) in columns {
            if let Some(needle) = needle {
                if !contains_ci(value, needle) {
                    return false;
                }
            }
        }
        if let Some(search) = &self.search {
            let any = contains_ci(&item.section, search)
                || contains_ci(&item.subsection1, search)
                || contains_ci(&item.subsection2, search)
                || contains_ci(&item.code, search)
                || contains_ci(&item.name, search)
                || contains_ci(&item.cost.to_string(), search);
            if !any {
                return false;
            }
        }
        true
    }
}

/// Retain the items satisfying `filter`, preserving order.
#[must_use]
pub fn filter_services(items: &[ServiceItem], filter: &ServiceFilter) -> Vec<ServiceItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Sortable service-item column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Section,
    Subsection1,
    Subsection2,
    Code,
    Name,
    Cost,
}

/// Error returned when parsing an unknown sort field.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort field `{0}` (expected section, subsection1, subsection2, code, name, or cost)")]
pub struct ParseSortFieldError(pub String);

impl std::str::FromStr for SortField {
    type Err = ParseSortFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "section" => Ok(Self::Section),
            "subsection1" => Ok(Self::Subsection1),
            "subsection2" => Ok(Self::Subsection2),
            "code" => Ok(Self::Code),
            "name" => Ok(Self::Name),
            "cost" => Ok(Self::Cost),
            other => Err(ParseSortFieldError(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Stable in-place sort by one column.
pub fn sort_services(items: &mut [ServiceItem], field: SortField, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = match field {
            SortField::Section => a.section.cmp(&b.section),
            SortField::Subsection1 => a.subsection1.cmp(&b.subsection1),
            SortField::Subsection2 => a.subsection2.cmp(&b.subsection2),
            SortField::Code => a.code.cmp(&b.code),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Cost => a.cost.total_cmp(&b.cost),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Return the 1-based `page` of `items`, `page_size` rows per page.
///
/// Out-of-range pages (including page 0) yield an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + page_size, items.len());
    &items[start..end]
}

/// One node of the section hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    pub name: String,
    pub children: Vec<SectionNode>,
}

/// Build the unique section → subsection1 → subsection2 hierarchy.
///
/// Levels are name-sorted; empty labels (and everything below them) are
/// skipped.
#[must_use]
pub fn section_tree(items: &[ServiceItem]) -> Vec<SectionNode> {
    let mut sections: BTreeMap<&str, BTreeMap<&str, BTreeSet<&str>>> = BTreeMap::new();
    for item in items {
        if item.section.is_empty() {
            continue;
        }
        let subsections = sections.entry(&item.section).or_default();
        if item.subsection1.is_empty() {
            continue;
        }
        let leaves = subsections.entry(&item.subsection1).or_default();
        if !item.subsection2.is_empty() {
            leaves.insert(&item.subsection2);
        }
    }

    sections
        .into_iter()
        .map(|(section, subsections)| SectionNode {
            name: section.to_string(),
            children: subsections
                .into_iter()
                .map(|(subsection, leaves)| SectionNode {
                    name: subsection.to_string(),
                    children: leaves
                        .into_iter()
                        .map(|leaf| SectionNode {
                            name: leaf.to_string(),
                            children: Vec::new(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
