//! Client Configuration
//!
//! Construction-time configuration for the marketplace client: API
//! endpoint overrides, retry policy, and the chain registry mapping chain
//! ids to base URLs and order-endpoint path segments. The registry is an
//! explicit immutable structure injected at construction so each
//! environment (mainnet, testnet, mock) can carry its own mapping.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ApiError;

/// Ethereum mainnet, the default chain.
pub const DEFAULT_CHAIN_ID: u64 = 1;

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    3_000
}

/// Marketplace API client configuration.
///
/// Everything is optional apart from the chain id default; `api_base_url`
/// and `api_key` override the registry/ambient values when set.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Chain to query (must be present in the chain registry).
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Base URL override; falls back to the registry entry.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// API key sent as the `X-API-KEY` header.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Optional HTTP(S) proxy URL.
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Retry policy for transient failures.
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            api_base_url: None,
            api_key: None,
            proxy_url: None,
            timeout_ms: default_timeout_ms(),
            retry: RetryPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Flat fixed-delay retry policy.
///
/// A first-class value so the backoff behavior can be tested without a
/// live transport: `should_retry` owns the full retry decision (budget
/// remaining AND error class).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Fixed delay between attempts, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            delay_ms: default_retry_delay_ms(),
        }
    }
}

impl RetryPolicy {
    /// Delay between attempts.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Whether a failed attempt number `attempt` (0-based) may be retried.
    pub fn should_retry(&self, attempt: u32, err: &ApiError) -> bool {
        attempt < self.max_retries && err.is_retryable()
    }
}

/// Endpoints for one supported chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEndpoints {
    /// API base URL, no trailing slash.
    pub base_url: String,
    /// Path segment used in `/v2/orders/{segment}/seaport/...`.
    pub path_segment: String,
}

/// Immutable chain id -> endpoints mapping.
///
/// Replaces process-wide lookup tables; constructed once and handed to
/// the client, so tests and alternate deployments can swap it.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: BTreeMap<u64, ChainEndpoints>,
}

impl Default for ChainRegistry {
    fn default() -> Self {
        let mut chains = BTreeMap::new();
        chains.insert(
            1,
            ChainEndpoints {
                base_url: "https://api.opensea.io".to_string(),
                path_segment: "ethereum".to_string(),
            },
        );
        chains.insert(
            4,
            ChainEndpoints {
                base_url: "https://testnets-api.opensea.io".to_string(),
                path_segment: "rinkeby".to_string(),
            },
        );
        Self { chains }
    }
}

impl ChainRegistry {
    /// Empty registry; populate with `insert`.
    pub fn empty() -> Self {
        Self { chains: BTreeMap::new() }
    }

    /// Register or replace a chain entry.
    pub fn insert(&mut self, chain_id: u64, endpoints: ChainEndpoints) {
        self.chains.insert(chain_id, endpoints);
    }

    /// Look up the endpoints for a chain id.
    pub fn resolve(&self, chain_id: u64) -> Option<&ChainEndpoints> {
        self.chains.get(&chain_id)
    }
}
