//! HTTP Orchestrator
//!
//! `SeaportApi` issues the marketplace requests: asset queries, order
//! queries (with side-based endpoint selection), and signed-order
//! submission. Transient failures are retried through an explicit
//! bounded loop driven by the injected `RetryPolicy`; validation
//! failures on outgoing orders fail fast.

use std::sync::Arc;

use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use super::mapper::{asset_from_wire, deserialize_order};
use super::query::{AssetsQuery, OrdersQuery};
use super::schema::{validate_order_v2, validate_signed_order};
use super::transport::ReqwestTransport;
use super::types::AssetsResponse;
use crate::config::{ApiConfig, ChainRegistry, RetryPolicy};
use crate::domain::{AssetRecord, ItemType, OrderSide, OrderV2, SignedOrder};
use crate::error::{ApiError, Violations};
use crate::ports::Transport;

/// Result of an orders query.
///
/// Orders that failed the validation gate are not silently dropped; they
/// are returned in `rejected` with their reasons so callers decide how
/// to surface them.
#[derive(Debug, Clone, Default)]
pub struct OrderPage {
    /// Orders that passed the validation gate.
    pub orders: Vec<OrderV2>,
    /// Orders rejected by the gate, with reasons.
    pub rejected: Vec<RejectedOrder>,
    /// Number of accepted orders.
    pub count: usize,
}

/// One order excluded by the validation gate.
#[derive(Debug, Clone)]
pub struct RejectedOrder {
    /// Hash of the rejected order.
    pub order_hash: String,
    /// The violated constraints, rendered.
    pub reason: String,
}

/// Marketplace API client.
pub struct SeaportApi {
    transport: Arc<dyn Transport>,
    base_url: String,
    chain_path: String,
    retry: RetryPolicy,
}

impl std::fmt::Debug for SeaportApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeaportApi")
            .field("base_url", &self.base_url)
            .field("chain_path", &self.chain_path)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl SeaportApi {
    /// Create a client against the default chain registry.
    ///
    /// Fails immediately, without any network call, when the configured
    /// chain id has no registry entry.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_registry(config, &ChainRegistry::default())
    }

    /// Create a client against an explicit chain registry.
    pub fn with_registry(config: &ApiConfig, registry: &ChainRegistry) -> Result<Self, ApiError> {
        let endpoints = registry
            .resolve(config.chain_id)
            .ok_or(ApiError::UnsupportedChain(config.chain_id))?;
        let base_url = config
            .api_base_url
            .clone()
            .unwrap_or_else(|| endpoints.base_url.clone());
        let transport = Arc::new(ReqwestTransport::new(config)?);
        Ok(Self {
            transport,
            base_url,
            chain_path: endpoints.path_segment.clone(),
            retry: config.retry.clone(),
        })
    }

    /// Create a client over a caller-supplied transport.
    ///
    /// This is the seam tests use to substitute a mock transport.
    pub fn with_transport(
        config: &ApiConfig,
        registry: &ChainRegistry,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ApiError> {
        let endpoints = registry
            .resolve(config.chain_id)
            .ok_or(ApiError::UnsupportedChain(config.chain_id))?;
        let base_url = config
            .api_base_url
            .clone()
            .unwrap_or_else(|| endpoints.base_url.clone());
        Ok(Self {
            transport,
            base_url,
            chain_path: endpoints.path_segment.clone(),
            retry: config.retry.clone(),
        })
    }

    fn orders_path(&self, side_path: &str) -> String {
        format!("{}/v2/orders/{}/seaport/{}", self.base_url, self.chain_path, side_path)
    }

    /// Query the assets endpoint.
    ///
    /// Contract-level fields and collection-level fee fields are
    /// flattened into one record per asset.
    #[instrument(skip(self, query))]
    pub async fn get_assets(&self, query: &AssetsQuery) -> Result<Vec<AssetRecord>, ApiError> {
        let url = format!("{}/api/v1/assets?{}", self.base_url, query.to_query_string());
        let mut attempt = 0;
        loop {
            match self.fetch_assets_once(&url).await {
                Ok(assets) => return Ok(assets),
                Err(err) if self.retry.should_retry(attempt, &err) => {
                    warn!(%err, attempt, "asset query failed, retrying");
                    attempt += 1;
                    sleep(self.retry.delay()).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_assets_once(&self, url: &str) -> Result<Vec<AssetRecord>, ApiError> {
        debug!(%url, "fetching assets");
        let body = self.transport.get_json(url).await?;
        let response: AssetsResponse = serde_json::from_value(body)?;
        Ok(response.assets.into_iter().map(asset_from_wire).collect())
    }

    /// Query orders by side.
    ///
    /// `OrderSide::All` issues two sequential requests (offers first,
    /// then listings) and concatenates the results. Orders failing the
    /// validation gate are collected into `rejected` and logged, never
    /// aborting the batch.
    #[instrument(skip(self, query), fields(side = ?query.side))]
    pub async fn get_orders(&self, query: &OrdersQuery) -> Result<OrderPage, ApiError> {
        let mut attempt = 0;
        loop {
            match self.fetch_orders_once(query).await {
                Ok(page) => return Ok(page),
                Err(err) if self.retry.should_retry(attempt, &err) => {
                    warn!(%err, attempt, "order query failed, retrying");
                    attempt += 1;
                    sleep(self.retry.delay()).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_orders_once(&self, query: &OrdersQuery) -> Result<OrderPage, ApiError> {
        let query_string = query.to_query_string();
        let side_paths: &[&str] = match query.side {
            OrderSide::Buy => &["offers"],
            OrderSide::Sell => &["listings"],
            OrderSide::All => &["offers", "listings"],
        };

        let mut page = OrderPage::default();
        for side_path in side_paths {
            let url = format!("{}?{}", self.orders_path(side_path), query_string);
            debug!(%url, "fetching orders");
            let body = self.transport.get_json(&url).await?;
            let raw_orders = body
                .get("orders")
                .and_then(Value::as_array)
                .ok_or_else(|| ApiError::MissingData("no matching order found".to_string()))?;

            for raw in raw_orders {
                let order = deserialize_order(raw)?;
                match validate_order_v2(&order) {
                    Ok(()) => page.orders.push(order),
                    Err(violations) => {
                        warn!(
                            order_hash = %order.order_hash,
                            %violations,
                            "dropping order that failed validation"
                        );
                        page.rejected.push(RejectedOrder {
                            order_hash: order.order_hash,
                            reason: violations.to_string(),
                        });
                    }
                }
            }
        }
        page.count = page.orders.len();
        Ok(page)
    }

    /// Submit a signed order.
    ///
    /// The payload is parsed and gate-validated before any network call;
    /// a malformed order aborts immediately without retry, since
    /// resubmitting it cannot succeed. The submission endpoint is chosen
    /// from the first offer item: a fungible-currency item with
    /// identifier "0" is a bid, anything else a listing.
    #[instrument(skip(self, payload))]
    pub async fn post_order(&self, payload: &str) -> Result<OrderV2, ApiError> {
        let mut order: SignedOrder = serde_json::from_str(payload).map_err(|e| {
            let mut violations = Violations::default();
            violations.push(format!("signed order payload is not well-formed: {e}"));
            ApiError::Validation(violations)
        })?;
        validate_signed_order(&order).map_err(ApiError::Validation)?;

        order.parameters.total_original_consideration_items =
            Some(order.parameters.parameters.consideration.len());

        let first_offer = &order.parameters.parameters.offer[0];
        let side_path = if first_offer.item_type == ItemType::Erc20
            && first_offer.identifier_or_criteria == "0"
        {
            "offers"
        } else {
            "listings"
        };
        let url = self.orders_path(side_path);
        let body = serde_json::to_value(&order)?;

        let mut attempt = 0;
        loop {
            match self.post_order_once(&url, &body).await {
                Ok(posted) => {
                    info!(order_hash = %posted.order_hash, side_path, "order posted");
                    return Ok(posted);
                }
                Err(err) if self.retry.should_retry(attempt, &err) => {
                    warn!(%err, attempt, "order submission failed, retrying");
                    attempt += 1;
                    sleep(self.retry.delay()).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn post_order_once(&self, url: &str, body: &Value) -> Result<OrderV2, ApiError> {
        debug!(%url, "posting order");
        let response = self.transport.post_json(url, body).await?;
        let raw = response
            .get("order")
            .ok_or_else(|| ApiError::MissingData("posted order missing from response".to_string()))?;
        deserialize_order(raw)
    }
}
