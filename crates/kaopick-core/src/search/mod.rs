//! Live search over the catalog.

pub mod filter;
