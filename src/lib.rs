//! Seaport Marketplace API Client
//!
//! A thin client-side adapter between the Seaport on-chain order
//! representation and a marketplace REST API: query building, wire
//! field mapping, response normalization, validation gating, and
//! bounded fixed-delay retries. Signing, auth sessions, storage, and
//! rate-limit-aware backoff are the caller's concerns.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

pub use adapters::api::query::{AssetsQuery, OrdersQuery};
pub use adapters::api::{OrderPage, RejectedOrder, SeaportApi};
pub use config::{ApiConfig, ChainEndpoints, ChainRegistry, RetryPolicy};
pub use error::{ApiError, Violations};
