//! Application services — driving use-cases built on the port traits.

pub mod price_list_service;
