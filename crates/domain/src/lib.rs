//! # pricelist-domain
//!
//! Pure domain model for the medical price-list catalog.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Datasets** (the logical service collections tracked by the cache)
//! - Define **Service items** (priced medical services) and their invariants
//! - Define **Nomenclature items** (entries of the regulatory registry)
//! - Define **Refresh events** (records published around cache reloads)
//! - Pure collection pipelines: filtering, sorting, pagination, section tree
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod catalog;
pub mod dataset;
pub mod nomenclature;
pub mod refresh;
pub mod service;
