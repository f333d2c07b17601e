//! Query Builder
//!
//! Assembles percent-encoded query strings for the assets and orders
//! endpoints. Defaults live here (`limit = 10`, `include_orders =
//! false`); optional filters are emitted only when present.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::domain::OrderSide;

/// Default page size for both endpoints.
pub const DEFAULT_LIMIT: u32 = 10;

/// Parameters for the assets endpoint.
#[derive(Debug, Clone, Default)]
pub struct AssetsQuery {
    /// Only assets owned by this address.
    pub owner: Option<String>,
    /// Whether to embed active orders in each asset.
    pub include_orders: Option<bool>,
    /// Page size.
    pub limit: Option<u32>,
    /// Additional per-asset filters (e.g. `asset_contract_address` +
    /// `token_id` pairs), each encoded independently and appended.
    pub assets: Vec<BTreeMap<String, String>>,
}

impl AssetsQuery {
    /// Render the percent-encoded query string.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair(
            "include_orders",
            if self.include_orders.unwrap_or(false) { "true" } else { "false" },
        );
        query.append_pair("limit", &self.limit.unwrap_or(DEFAULT_LIMIT).to_string());
        if let Some(owner) = &self.owner {
            query.append_pair("owner", owner);
        }
        let mut out = query.finish();

        for filter in &self.assets {
            let mut encoded = form_urlencoded::Serializer::new(String::new());
            for (key, value) in filter {
                encoded.append_pair(key, value);
            }
            let encoded = encoded.finish();
            if !encoded.is_empty() {
                out.push('&');
                out.push_str(&encoded);
            }
        }
        out
    }
}

/// Parameters for the orders endpoint.
#[derive(Debug, Clone)]
pub struct OrdersQuery {
    /// Token ids to match; emitted as repeated `token_ids` keys.
    pub token_ids: Vec<String>,
    /// Asset contract to match.
    pub asset_contract_address: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Which side of the book to query.
    pub side: OrderSide,
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self {
            token_ids: Vec::new(),
            asset_contract_address: None,
            limit: None,
            side: OrderSide::Buy,
        }
    }
}

impl OrdersQuery {
    /// Render the percent-encoded query string (side is a path concern,
    /// not a query parameter).
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for token_id in &self.token_ids {
            query.append_pair("token_ids", token_id);
        }
        if let Some(address) = &self.asset_contract_address {
            query.append_pair("asset_contract_address", address);
        }
        query.append_pair("limit", &self.limit.unwrap_or(DEFAULT_LIMIT).to_string());
        query.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_query_defaults() {
        let query = AssetsQuery::default();
        assert_eq!(query.to_query_string(), "include_orders=false&limit=10");
    }

    #[test]
    fn test_assets_query_owner_only_when_present() {
        let query = AssetsQuery {
            owner: Some("0x0A56b3317eD60dC4E1027A63ffbE9df6fb102401".into()),
            include_orders: Some(true),
            limit: Some(1),
            assets: Vec::new(),
        };
        assert_eq!(
            query.to_query_string(),
            "include_orders=true&limit=1&owner=0x0A56b3317eD60dC4E1027A63ffbE9df6fb102401"
        );
    }

    #[test]
    fn test_assets_query_appends_encoded_filters() {
        let mut filter = BTreeMap::new();
        filter.insert(
            "asset_contract_address".to_string(),
            "0x0000000000000000000000000000000000000002".to_string(),
        );
        filter.insert("token_id".to_string(), "42".to_string());
        let query = AssetsQuery { assets: vec![filter], ..AssetsQuery::default() };
        assert_eq!(
            query.to_query_string(),
            "include_orders=false&limit=10\
             &asset_contract_address=0x0000000000000000000000000000000000000002&token_id=42"
        );
    }

    #[test]
    fn test_assets_query_percent_encodes_values() {
        let mut filter = BTreeMap::new();
        filter.insert("collection".to_string(), "cool cats & co".to_string());
        let query = AssetsQuery { assets: vec![filter], ..AssetsQuery::default() };
        assert!(query.to_query_string().ends_with("&collection=cool+cats+%26+co"));
    }

    #[test]
    fn test_orders_query_repeats_token_ids() {
        let query = OrdersQuery {
            token_ids: vec!["1".into(), "2".into()],
            asset_contract_address: Some(
                "0x0000000000000000000000000000000000000002".into(),
            ),
            limit: None,
            side: OrderSide::Sell,
        };
        assert_eq!(
            query.to_query_string(),
            "token_ids=1&token_ids=2\
             &asset_contract_address=0x0000000000000000000000000000000000000002&limit=10"
        );
    }
}
