//! Outward-facing adapters.

pub mod api;
