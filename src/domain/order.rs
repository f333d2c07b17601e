//! Pre-submission order types, serialized in the protocol-native
//! camelCase shape.
//!
//! Amounts, timestamps, salts and identifiers are decimal strings in this
//! shape (they are uint256 values on chain); the wire mapper coerces the
//! numeric ones when talking to the marketplace API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of item an order leg moves.
///
/// Criteria variants match by rule (e.g. any token in a collection)
/// rather than exact token id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ItemType {
    /// Native chain currency.
    Native,
    /// Fungible token (ERC-20).
    Erc20,
    /// Non-fungible token (ERC-721).
    Erc721,
    /// Semi-fungible token (ERC-1155).
    Erc1155,
    /// ERC-721 selected by criteria.
    Erc721WithCriteria,
    /// ERC-1155 selected by criteria.
    Erc1155WithCriteria,
}

impl From<ItemType> for u8 {
    fn from(value: ItemType) -> Self {
        match value {
            ItemType::Native => 0,
            ItemType::Erc20 => 1,
            ItemType::Erc721 => 2,
            ItemType::Erc1155 => 3,
            ItemType::Erc721WithCriteria => 4,
            ItemType::Erc1155WithCriteria => 5,
        }
    }
}

impl TryFrom<u8> for ItemType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Native),
            1 => Ok(Self::Erc20),
            2 => Ok(Self::Erc721),
            3 => Ok(Self::Erc1155),
            4 => Ok(Self::Erc721WithCriteria),
            5 => Ok(Self::Erc1155WithCriteria),
            other => Err(format!("unknown item type: {other}")),
        }
    }
}

/// Order type: full/partial fill crossed with open/restricted zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderKind {
    /// Any filler, no partial fills.
    FullOpen,
    /// Any filler, partial fills allowed.
    PartialOpen,
    /// Zone-gated, no partial fills.
    FullRestricted,
    /// Zone-gated, partial fills allowed.
    PartialRestricted,
}

impl From<OrderKind> for u8 {
    fn from(value: OrderKind) -> Self {
        match value {
            OrderKind::FullOpen => 0,
            OrderKind::PartialOpen => 1,
            OrderKind::FullRestricted => 2,
            OrderKind::PartialRestricted => 3,
        }
    }
}

impl TryFrom<u8> for OrderKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::FullOpen),
            1 => Ok(Self::PartialOpen),
            2 => Ok(Self::FullRestricted),
            3 => Ok(Self::PartialRestricted),
            other => Err(format!("unknown order kind: {other}")),
        }
    }
}

/// Side selector for order queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    /// Bids: currency offered for an asset.
    Buy,
    /// Listings: asset offered for currency.
    Sell,
    /// Both sides, fetched sequentially and concatenated.
    All,
}

/// What a maker gives up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferItem {
    /// Kind of item.
    pub item_type: ItemType,
    /// Token contract address.
    pub token: String,
    /// Exact token id, or criteria root for criteria item types.
    pub identifier_or_criteria: String,
    /// Amount at order start (decimal string).
    pub start_amount: String,
    /// Amount at order end; differs from start for decaying prices.
    pub end_amount: String,
}

/// What a maker demands in return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsiderationItem {
    /// Kind of item.
    pub item_type: ItemType,
    /// Token contract address.
    pub token: String,
    /// Exact token id, or criteria root for criteria item types.
    pub identifier_or_criteria: String,
    /// Amount at order start (decimal string).
    pub start_amount: String,
    /// Amount at order end.
    pub end_amount: String,
    /// Who receives this item when the order fills.
    pub recipient: String,
}

/// On-chain order parameters, the pre-submission canonical shape.
///
/// A tradable order carries at least one offer item and one
/// consideration item; emptiness is checked by the validation gate, not
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParameters {
    /// Maker address.
    pub offerer: String,
    /// Zone contract gating restricted orders.
    pub zone: String,
    /// Arbitrary zone payload hash.
    pub zone_hash: String,
    /// Validity window start (unix seconds, decimal string).
    pub start_time: String,
    /// Validity window end.
    pub end_time: String,
    /// Fill/restriction kind.
    pub order_type: OrderKind,
    /// Entropy making the order hash unique.
    pub salt: String,
    /// Conduit the transfers route through.
    pub conduit_key: String,
    /// Items the maker gives up.
    pub offer: Vec<OfferItem>,
    /// Items the maker demands.
    pub consideration: Vec<ConsiderationItem>,
}

/// `OrderParameters` plus the maker's counter, as covered by the
/// signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderComponents {
    /// The order body.
    #[serde(flatten)]
    pub parameters: OrderParameters,
    /// Maker's counter at signing time. Accepted as number or string
    /// since signers disagree on the JSON encoding; the gate checks the
    /// type.
    pub counter: Value,
    /// Set from `consideration.len()` just before submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_original_consideration_items: Option<usize>,
}

/// A signed order ready for submission. Signing happens upstream; this
/// layer only validates and forwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    /// Signed order components.
    pub parameters: OrderComponents,
    /// Maker signature over the components.
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_type_round_trips_through_u8() {
        for raw in 0u8..=5 {
            let item = ItemType::try_from(raw).unwrap();
            assert_eq!(u8::from(item), raw);
        }
        assert!(ItemType::try_from(6).is_err());
    }

    #[test]
    fn test_order_parameters_serialize_camel_case() {
        let params = OrderParameters {
            offerer: "0x0000000000000000000000000000000000000001".into(),
            zone: "0x0000000000000000000000000000000000000000".into(),
            zone_hash: format!("0x{}", "0".repeat(64)),
            start_time: "1650000000".into(),
            end_time: "1660000000".into(),
            order_type: OrderKind::FullOpen,
            salt: "12345".into(),
            conduit_key: format!("0x{}", "0".repeat(64)),
            offer: vec![],
            consideration: vec![],
        };
        let value = serde_json::to_value(&params).unwrap();
        assert!(value.get("zoneHash").is_some());
        assert!(value.get("startTime").is_some());
        assert!(value.get("conduitKey").is_some());
        assert_eq!(value["orderType"], json!(0));
    }

    #[test]
    fn test_signed_order_parses_numeric_and_string_counters() {
        let base = json!({
            "parameters": {
                "offerer": "0x0000000000000000000000000000000000000001",
                "zone": "0x0000000000000000000000000000000000000000",
                "zoneHash": format!("0x{}", "0".repeat(64)),
                "startTime": "0",
                "endTime": "1660000000",
                "orderType": 0,
                "salt": "1",
                "conduitKey": format!("0x{}", "0".repeat(64)),
                "offer": [],
                "consideration": [],
                "counter": 0
            },
            "signature": "0xdead"
        });
        let order: SignedOrder = serde_json::from_value(base).unwrap();
        assert!(order.parameters.counter.is_number());
        assert!(order.parameters.total_original_consideration_items.is_none());
    }
}
