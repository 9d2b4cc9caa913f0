//! Service item — one priced medical service from a logical dataset.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ValidationError};

/// Which kind of dataset an item was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Outpatient and inpatient services.
    #[serde(rename = "outpatient-inpatient")]
    OutpatientInpatient,
    /// Laboratory services.
    #[serde(rename = "laboratory")]
    Laboratory,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutpatientInpatient => f.write_str("outpatient-inpatient"),
            Self::Laboratory => f.write_str("laboratory"),
        }
    }
}

/// One priced medical service.
///
/// `id` is opaque and unique within its source dataset. The classification
/// hierarchy is free text; subsections may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub section: String,
    pub subsection1: String,
    pub subsection2: String,
    /// Registry code identifying the service.
    pub code: String,
    /// Display name from the registry.
    pub name: String,
    /// Non-negative price in decimal form.
    pub cost: f64,
    pub service_type: ServiceType,
}

impl ServiceItem {
    /// Create a builder for constructing a [`ServiceItem`].
    #[must_use]
    pub fn builder() -> ServiceItemBuilder {
        ServiceItemBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when `id` or `code` is empty or
    /// `cost` is negative or non-finite.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.code.is_empty() {
            return Err(ValidationError::EmptyCode.into());
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(ValidationError::InvalidCost.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`ServiceItem`].
#[derive(Debug)]
pub struct ServiceItemBuilder {
    id: Option<String>,
    section: Option<String>,
    subsection1: Option<String>,
    subsection2: Option<String>,
    code: Option<String>,
    name: Option<String>,
    cost: f64,
    service_type: ServiceType,
}

impl Default for ServiceItemBuilder {
    fn default() -> Self {
        Self {
            id: None,
            section: None,
            subsection1: None,
            subsection2: None,
            code: None,
            name: None,
            cost: 0.0,
            service_type: ServiceType::OutpatientInpatient,
        }
    }
}

impl ServiceItemBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn subsection1(mut self, subsection1: impl Into<String>) -> Self {
        self.subsection1 = Some(subsection1.into());
        self
    }

    #[must_use]
    pub fn subsection2(mut self, subsection2: impl Into<String>) -> Self {
        self.subsection2 = Some(subsection2.into());
        self
    }

    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = service_type;
        self
    }

    /// Consume the builder, validate, and return a [`ServiceItem`].
    ///
    /// Missing subsections default to the empty string, matching how the
    /// remote source reports them.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if invariants fail.
    pub fn build(self) -> Result<ServiceItem, CatalogError> {
        let item = ServiceItem {
            id: self.id.unwrap_or_default(),
            section: self.section.unwrap_or_default(),
            subsection1: self.subsection1.unwrap_or_default(),
            subsection2: self.subsection2.unwrap_or_default(),
            code: self.code.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            cost: self.cost,
            service_type: self.service_type,
        };
        item.validate()?;
        Ok(item)
    }
}
