//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Domain types and pure transforms
//! - `wire.rs` — Raw serde structs matching provider responses + conversions
//! - `state.rs` — State containers with update methods (app-owned)
//! - `client.rs` — Sub-client with HTTP methods

pub mod chart;
pub mod converter;
pub mod history;
pub mod spot;
