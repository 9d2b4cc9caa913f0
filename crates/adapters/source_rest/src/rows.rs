//! Wire row shapes — source-specific field names mapped into domain types.
//!
//! The backing tables use their own column names (the laboratory table
//! suffixes everything with `_lab`); conversion into the common domain
//! shape happens here, at the adapter boundary, including stringifying the
//! integer ids, defaulting null subsections to the empty string, and
//! stamping the dataset's fixed type discriminator.

use serde::Deserialize;

use pricelist_domain::nomenclature::NomenclatureItem;
use pricelist_domain::service::{ServiceItem, ServiceType};

/// Row of `ambulatory_stationary_services`.
#[derive(Debug, Deserialize)]
pub(crate) struct AmbulatoryRow {
    pub id: i64,
    pub section: String,
    #[serde(default)]
    pub subsection_1: Option<String>,
    #[serde(default)]
    pub subsection_2: Option<String>,
    pub kod_eru: String,
    pub name_eru: String,
    pub price: f64,
}

impl From<AmbulatoryRow> for ServiceItem {
    fn from(row: AmbulatoryRow) -> Self {
        Self {
            id: row.id.to_string(),
            section: row.section,
            subsection1: row.subsection_1.unwrap_or_default(),
            subsection2: row.subsection_2.unwrap_or_default(),
            code: row.kod_eru,
            name: row.name_eru,
            cost: row.price,
            service_type: ServiceType::OutpatientInpatient,
        }
    }
}

/// Row of `laboratory_services`.
#[derive(Debug, Deserialize)]
pub(crate) struct LaboratoryRow {
    pub id: i64,
    pub section_lab: String,
    #[serde(default)]
    pub subsection_1_lab: Option<String>,
    #[serde(default)]
    pub subsection_2_lab: Option<String>,
    pub kod_eru_lab: String,
    pub name_eru_lab: String,
    pub price_lab: f64,
}

impl From<LaboratoryRow> for ServiceItem {
    fn from(row: LaboratoryRow) -> Self {
        Self {
            id: row.id.to_string(),
            section: row.section_lab,
            subsection1: row.subsection_1_lab.unwrap_or_default(),
            subsection2: row.subsection_2_lab.unwrap_or_default(),
            code: row.kod_eru_lab,
            name: row.name_eru_lab,
            cost: row.price_lab,
            service_type: ServiceType::Laboratory,
        }
    }
}

/// Row of `nomenclature_medical_services` (selected columns only).
#[derive(Debug, Deserialize)]
pub(crate) struct NomenclatureRow {
    pub id: i64,
    pub chapter: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(rename = "class")]
    pub service_class: String,
    pub kod_nomen: String,
    pub name_nomen: String,
}

impl From<NomenclatureRow> for NomenclatureItem {
    fn from(row: NomenclatureRow) -> Self {
        Self {
            id: row.id.to_string(),
            section: row.chapter,
            service_type: row.service_type,
            service_class: row.service_class,
            code: row.kod_nomen,
            name: row.name_nomen,
        }
    }
}
