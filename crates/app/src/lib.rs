//! # pricelist-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceSource` — ranged, server-ordered pages of a logical dataset
//!   - `NomenclatureSource` — the regulatory registry in one request
//!   - `Clock` — current time, injected so freshness is testable
//! - Provide **in-process infrastructure** (refresh bus) that doesn't need IO
//! - Host the `PriceListService` cache/loader: memoized full snapshots with
//!   a freshness window, chunked reloads, and start/end notifications
//!
//! ## Dependency rule
//! Depends on `pricelist-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod refresh_bus;
pub mod services;
