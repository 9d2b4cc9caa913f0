//! Remote tabular source ports — ranged queries against the hosted backend.

use std::future::Future;

use pricelist_domain::dataset::Dataset;
use pricelist_domain::error::CatalogError;
use pricelist_domain::nomenclature::NomenclatureItem;
use pricelist_domain::service::ServiceItem;

/// Source of the priced service datasets.
///
/// Implementations must order every page by a fixed per-dataset field so
/// that page boundaries are stable across requests, and must map source
/// rows into the domain shape (including the dataset's fixed type
/// discriminator) before returning them.
pub trait ServiceSource {
    /// Fetch one page of `dataset`, `limit` rows starting at `offset`.
    ///
    /// A page shorter than `limit` (possibly empty) signals the end of the
    /// dataset.
    fn fetch_page(
        &self,
        dataset: Dataset,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<ServiceItem>, CatalogError>> + Send;

    /// Exact row count of the dataset's backing table.
    fn count(&self, dataset: Dataset) -> impl Future<Output = Result<u64, CatalogError>> + Send;
}

impl<T: ServiceSource + Send + Sync> ServiceSource for std::sync::Arc<T> {
    fn fetch_page(
        &self,
        dataset: Dataset,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<ServiceItem>, CatalogError>> + Send {
        (**self).fetch_page(dataset, offset, limit)
    }

    fn count(&self, dataset: Dataset) -> impl Future<Output = Result<u64, CatalogError>> + Send {
        (**self).count(dataset)
    }
}

/// Source of the regulatory nomenclature registry.
pub trait NomenclatureSource {
    /// Fetch the whole registry, server-ordered by chapter.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<NomenclatureItem>, CatalogError>> + Send;
}

impl<T: NomenclatureSource + Send + Sync> NomenclatureSource for std::sync::Arc<T> {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<NomenclatureItem>, CatalogError>> + Send {
        (**self).fetch_all()
    }
}
