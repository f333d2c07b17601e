//! Normalized marketplace response types.
//!
//! `OrderV2` is the post-deserialization shape handed back to callers,
//! serialized camelCase. `protocol_data` and the asset bundles stay
//! opaque JSON: this layer reshapes them but never interprets them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which side of the book an order sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSide {
    /// Currency offered for an asset.
    Bid,
    /// Asset offered for currency.
    Ask,
}

/// A marketplace user, username only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display username.
    pub username: Option<String>,
}

/// A marketplace account embedded in orders and fee records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Wallet address.
    pub address: String,
    /// Opaque account configuration blob.
    pub config: Option<String>,
    /// Profile image URL.
    pub profile_img_url: Option<String>,
    /// Nested user record, when the account has one.
    pub user: Option<User>,
}

/// A fee share owed to an account, in basis points (10000 = 100%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    /// Fee recipient.
    pub account: Account,
    /// Proportional share, 0..=10000.
    pub basis_points: u16,
}

/// A normalized marketplace order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderV2 {
    /// Creation timestamp, as the API reports it.
    pub created_date: String,
    /// Closing timestamp, when set.
    pub closing_date: Option<String>,
    /// Listing time (unix seconds).
    pub listing_time: u64,
    /// Expiration time (unix seconds).
    pub expiration_time: u64,
    /// Content identifier of the order.
    pub order_hash: String,
    /// Maker account.
    pub maker: Account,
    /// Taker account, for private orders.
    pub taker: Option<Account>,
    /// Protocol-specific payload, passed through uninterpreted.
    pub protocol_data: Value,
    /// Address of the protocol contract the order settles on.
    pub protocol_address: String,
    /// Current price, accounting for decay (decimal string).
    pub current_price: String,
    /// Fees owed by the maker.
    pub maker_fees: Vec<FeeRecord>,
    /// Fees owed by the taker.
    pub taker_fees: Vec<FeeRecord>,
    /// Bid or ask.
    pub side: QuoteSide,
    /// API-native order type label (e.g. "basic", "english").
    pub order_type: String,
    /// Whether the order was cancelled.
    pub cancelled: bool,
    /// Whether the order was filled.
    pub finalized: bool,
    /// Whether the marketplace flagged the order invalid.
    pub marked_invalid: bool,
    /// Client signature over the order.
    pub client_signature: Option<String>,
    /// Maker-side asset bundle reference, when bundled.
    pub maker_asset_bundle: Option<Value>,
    /// Taker-side asset bundle reference, when bundled.
    pub taker_asset_bundle: Option<Value>,
}

/// One asset from the assets endpoint, with contract- and
/// collection-level fee fields flattened into a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Asset contract address.
    pub address: String,
    /// Contract name.
    pub name: Option<String>,
    /// Contract token symbol.
    pub symbol: Option<String>,
    /// Contract schema name (e.g. "ERC721").
    pub schema_name: Option<String>,
    /// Royalty fee share from the collection, in basis points.
    pub royalty_fee_points: Option<u64>,
    /// Marketplace protocol fee share from the collection, in basis
    /// points.
    pub protocol_fee_points: Option<u64>,
    /// Collection royalty payout address.
    pub royalty_fee_address: Option<String>,
    /// Active sell orders, passed through uninterpreted.
    pub sell_orders: Option<Value>,
    /// Token id of the asset.
    pub token_id: Option<String>,
}
