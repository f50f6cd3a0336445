//! Integration tests for vecla crates.
//!
//! This crate contains end-to-end tests that exercise the public API of
//! `vecla-math` the way a consumer would: through the namespaced free
//! functions, the builder, serde and glam interop.
