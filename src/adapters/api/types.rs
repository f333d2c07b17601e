//! Marketplace Wire Types
//!
//! Serialization types for the marketplace REST API. The wire shape is
//! mostly snake_case with two historical camelCase holdouts
//! (`startAmount`/`endAmount` on items and `conduitKey` on order
//! parameters) that the API still expects; the `rename` attributes keep
//! them faithful.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::QuoteSide;

/// Wire form of an offer item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireOfferItem {
    /// Numeric item type.
    pub item_type: u8,
    /// Token contract address.
    pub token: String,
    /// Token id or criteria root.
    pub identifier_or_criteria: String,
    /// Start amount, numerically coerced (NaN when non-numeric input
    /// slipped past the caller).
    #[serde(rename = "startAmount")]
    pub start_amount: f64,
    /// End amount, numerically coerced.
    #[serde(rename = "endAmount")]
    pub end_amount: f64,
}

/// Wire form of a consideration item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConsiderationItem {
    /// Numeric item type.
    pub item_type: u8,
    /// Token contract address.
    pub token: String,
    /// Token id or criteria root.
    pub identifier_or_criteria: String,
    /// Start amount, numerically coerced.
    #[serde(rename = "startAmount")]
    pub start_amount: f64,
    /// End amount, numerically coerced.
    #[serde(rename = "endAmount")]
    pub end_amount: f64,
    /// Recipient address.
    pub recipient: String,
}

/// Wire form of order parameters for submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireOrderParameters {
    /// Maker address.
    pub offerer: String,
    /// Zone contract address.
    pub zone: String,
    /// Zone payload hash.
    pub zone_hash: String,
    /// Validity start (unix seconds, coerced).
    pub start_time: f64,
    /// Validity end (unix seconds, coerced).
    pub end_time: f64,
    /// Numeric order type.
    pub order_type: u8,
    /// Order salt, kept as a string.
    pub salt: String,
    /// Conduit key (camelCase on the wire).
    #[serde(rename = "conduitKey")]
    pub conduit_key: String,
    /// Maker nonce. Always "0" at this layer; see the mapper.
    pub nonce: String,
    /// Offer items.
    pub offer: Vec<WireOfferItem>,
    /// Consideration items.
    pub consideration: Vec<WireConsiderationItem>,
}

/// A user as the API serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SerializedUser {
    /// Display username.
    #[serde(default)]
    pub username: Option<String>,
}

/// An account as the API serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SerializedAccount {
    /// Wallet address.
    pub address: String,
    /// Opaque account configuration blob.
    #[serde(default)]
    pub config: Option<String>,
    /// Profile image URL.
    #[serde(default)]
    pub profile_img_url: Option<String>,
    /// Nested user record.
    #[serde(default)]
    pub user: Option<SerializedUser>,
}

/// A fee record as the API serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SerializedFee {
    /// Fee recipient.
    pub account: SerializedAccount,
    /// Share in basis points.
    pub basis_points: u16,
}

/// An order as the API serializes it.
///
/// `maker_fees`/`taker_fees` are required: an order payload without them
/// is malformed and fails deserialization rather than defaulting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SerializedOrderV2 {
    /// Creation timestamp.
    pub created_date: String,
    /// Closing timestamp.
    #[serde(default)]
    pub closing_date: Option<String>,
    /// Listing time (unix seconds).
    pub listing_time: u64,
    /// Expiration time (unix seconds).
    pub expiration_time: u64,
    /// Order hash.
    pub order_hash: String,
    /// Maker account.
    pub maker: SerializedAccount,
    /// Taker account, for private orders.
    #[serde(default)]
    pub taker: Option<SerializedAccount>,
    /// Opaque protocol payload.
    pub protocol_data: Value,
    /// Settlement contract address.
    pub protocol_address: String,
    /// Current price (decimal string).
    pub current_price: String,
    /// Maker fee records.
    pub maker_fees: Vec<SerializedFee>,
    /// Taker fee records.
    pub taker_fees: Vec<SerializedFee>,
    /// Bid or ask.
    pub side: QuoteSide,
    /// API-native order type label.
    pub order_type: String,
    /// Cancellation flag.
    pub cancelled: bool,
    /// Finalization flag.
    pub finalized: bool,
    /// Marketplace invalidity flag.
    pub marked_invalid: bool,
    /// Client signature.
    #[serde(default)]
    pub client_signature: Option<String>,
    /// Maker-side bundle reference.
    #[serde(default)]
    pub maker_asset_bundle: Option<Value>,
    /// Taker-side bundle reference.
    #[serde(default)]
    pub taker_asset_bundle: Option<Value>,
}

/// Asset contract sub-object on the assets endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireAssetContract {
    /// Contract address.
    pub address: String,
    /// Contract name.
    #[serde(default)]
    pub name: Option<String>,
    /// Token symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Schema name (e.g. "ERC721").
    #[serde(default)]
    pub schema_name: Option<String>,
}

/// Collection sub-object carrying the fee fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireCollection {
    /// Royalty fee share, basis points.
    #[serde(default)]
    pub dev_seller_fee_basis_points: Option<u64>,
    /// Marketplace fee share, basis points.
    #[serde(default)]
    pub opensea_seller_fee_basis_points: Option<u64>,
    /// Royalty payout address.
    #[serde(default)]
    pub payout_address: Option<String>,
}

/// One asset entry from the assets endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WireAsset {
    /// Contract sub-object.
    pub asset_contract: WireAssetContract,
    /// Collection sub-object, absent for some assets.
    #[serde(default)]
    pub collection: Option<WireCollection>,
    /// Active sell orders, opaque.
    #[serde(default)]
    pub sell_orders: Option<Value>,
    /// Token id.
    #[serde(default)]
    pub token_id: Option<String>,
}

/// Assets endpoint response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetsResponse {
    /// Returned assets.
    pub assets: Vec<WireAsset>,
}
