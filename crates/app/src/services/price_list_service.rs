//! Price-list service — memoized full snapshots of the logical datasets.
//!
//! The remote source caps row counts per request, so a dataset is loaded as
//! a sequence of ranged, server-ordered pages and assembled into one
//! in-memory snapshot. Snapshots are kept per dataset and served without
//! network access until the freshness window elapses.

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::{Mutex, broadcast};

use pricelist_domain::dataset::Dataset;
use pricelist_domain::error::CatalogError;
use pricelist_domain::refresh::RefreshEvent;
use pricelist_domain::service::ServiceItem;
use pricelist_domain::time::Timestamp;

use crate::ports::{Clock, ServiceSource};
use crate::refresh_bus::RefreshBus;

/// Rows requested per page during a reload.
const DEFAULT_CHUNK_SIZE: u64 = 1000;

/// Broadcast capacity for refresh notifications.
const BUS_CAPACITY: usize = 16;

struct CacheEntry {
    items: Arc<Vec<ServiceItem>>,
    loaded_at: Timestamp,
}

type Slot = Mutex<Option<CacheEntry>>;

/// Application service providing the current full contents of a logical
/// dataset, transparently refreshing from the remote source when stale.
///
/// The cache is explicitly constructed state: one value, built at startup
/// with an injected source and clock, shared by reference. Each dataset has
/// its own slot guarded by an async mutex that is held across the reload,
/// so concurrent callers for the same dataset serialize — the first
/// performs the reload, later callers re-check freshness under the lock and
/// serve the freshly stored snapshot. Datasets never block each other.
pub struct PriceListService<S, C> {
    source: S,
    clock: C,
    ttl: Duration,
    chunk_size: u64,
    bus: RefreshBus,
    ambulatory: Slot,
    laboratory: Slot,
}

impl<S, C> PriceListService<S, C>
where
    S: ServiceSource + Send + Sync,
    C: Clock,
{
    /// Create a service with the default freshness window (5 minutes) and
    /// chunk size (1000 rows).
    pub fn new(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            ttl: Duration::minutes(5),
            chunk_size: DEFAULT_CHUNK_SIZE,
            bus: RefreshBus::new(BUS_CAPACITY),
            ambulatory: Mutex::new(None),
            laboratory: Mutex::new(None),
        }
    }

    /// Override the freshness window.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the reload chunk size.
    ///
    /// # Panics
    ///
    /// Panics when `chunk_size` is zero.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        self.chunk_size = chunk_size;
        self
    }

    /// Subscribe to reload notifications.
    ///
    /// Every reload publishes [`RefreshEvent::started`] before the first
    /// page request and [`RefreshEvent::finished`] after the reload
    /// completes or fails. Dropping the receiver unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RefreshEvent> {
        self.bus.subscribe()
    }

    /// Current full contents of `dataset`.
    ///
    /// A cached snapshot younger than the freshness window is returned
    /// unchanged with no network access. Otherwise the dataset is reloaded
    /// in full and the snapshot replaced wholesale.
    ///
    /// # Errors
    ///
    /// Propagates the first page failure of a reload. The previous snapshot
    /// (if any) is left untouched, and the `finished` notification still
    /// fires.
    pub async fn get(&self, dataset: Dataset) -> Result<Arc<Vec<ServiceItem>>, CatalogError> {
        let mut slot = self.slot(dataset).lock().await;
        if let Some(entry) = slot.as_ref() {
            if self.clock.now() - entry.loaded_at < self.ttl {
                tracing::debug!(%dataset, rows = entry.items.len(), "serving cached snapshot");
                return Ok(Arc::clone(&entry.items));
            }
        }

        self.bus.publish(RefreshEvent::started(dataset));
        let result = self.reload(dataset).await;
        self.bus.publish(RefreshEvent::finished(dataset));

        let items = Arc::new(result?);
        *slot = Some(CacheEntry {
            items: Arc::clone(&items),
            loaded_at: self.clock.now(),
        });
        Ok(items)
    }

    /// The cached snapshot for `dataset`, regardless of age.
    ///
    /// Never touches the network and never notifies. Callers that prefer
    /// stale-but-available data over a failing reload use this after a
    /// [`get`](Self::get) error.
    pub async fn cached(&self, dataset: Dataset) -> Option<Arc<Vec<ServiceItem>>> {
        let slot = self.slot(dataset).lock().await;
        slot.as_ref().map(|entry| Arc::clone(&entry.items))
    }

    /// Exact row count of the dataset's backing table.
    ///
    /// # Errors
    ///
    /// Propagates remote source failures.
    pub async fn count(&self, dataset: Dataset) -> Result<u64, CatalogError> {
        self.source.count(dataset).await
    }

    /// Empty every cache slot and its timestamp.
    ///
    /// Observers are not notified; the next [`get`](Self::get) for any
    /// dataset forces a reload.
    pub async fn clear(&self) {
        for dataset in Dataset::ALL {
            *self.slot(dataset).lock().await = None;
        }
    }

    async fn reload(&self, dataset: Dataset) -> Result<Vec<ServiceItem>, CatalogError> {
        let mut items = Vec::new();
        let mut offset = 0u64;
        loop {
            let page = self
                .source
                .fetch_page(dataset, offset, self.chunk_size)
                .await?;
            let fetched = page.len() as u64;
            tracing::debug!(%dataset, offset, rows = page.len(), "fetched page");
            items.extend(page);
            if fetched < self.chunk_size {
                break;
            }
            offset += fetched;
        }
        tracing::info!(%dataset, rows = items.len(), "dataset reloaded");
        Ok(items)
    }

    fn slot(&self, dataset: Dataset) -> &Slot {
        match dataset {
            Dataset::AmbulatoryStationary => &self.ambulatory,
            Dataset::Laboratory => &self.laboratory,
        }
    }
}
