//! The emoticon catalog.
//!
//! [`loader`] validates the on-disk JSON document into the typed tree in
//! [`model`], which also owns the flattened [`model::FlatEntry`] list used
//! by search and display.

pub mod loader;
pub mod model;
