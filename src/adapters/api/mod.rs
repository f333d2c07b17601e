//! Marketplace API adapter.
//!
//! Translates between the canonical order model and the marketplace's
//! wire format: query building, field mapping, response reshaping,
//! validation gating, and the retrying HTTP orchestrator.

pub mod client;
pub mod mapper;
pub mod query;
pub mod schema;
pub mod transport;
pub mod types;

pub use client::{OrderPage, RejectedOrder, SeaportApi};
