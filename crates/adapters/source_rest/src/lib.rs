//! # pricelist-adapter-source-rest
//!
//! REST adapter for the hosted tabular backend. Implements the
//! `ServiceSource` and `NomenclatureSource` ports over a PostgREST-style
//! HTTP API: ranged, server-ordered `select` queries plus exact counts via
//! the `Content-Range` response header.
//!
//! ## Dependency rule
//!
//! Depends on `pricelist-app` (port traits) and `pricelist-domain` only.

mod client;
mod error;
mod rows;

pub use client::{Config, RestSource};
pub use error::RestError;
