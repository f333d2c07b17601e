//! Property-Based Tests - Wire Mapping Invariants
//!
//! Uses `proptest` to verify that the field mapper and response
//! deserializer preserve values across random inputs.

use proptest::prelude::*;
use serde_json::json;

use seaport_api_client::adapters::api::mapper::{deserialize_order, to_wire_order};
use seaport_api_client::domain::{
    ConsiderationItem, ItemType, OfferItem, OrderKind, OrderParameters,
};

fn parameters_with_amounts(start: &str, end: &str) -> OrderParameters {
    OrderParameters {
        offerer: "0x0000000000000000000000000000000000000001".into(),
        zone: "0x0000000000000000000000000000000000000000".into(),
        zone_hash: format!("0x{}", "0".repeat(64)),
        start_time: "1650000000".into(),
        end_time: "1660000000".into(),
        order_type: OrderKind::FullOpen,
        salt: "1".into(),
        conduit_key: format!("0x{}", "0".repeat(64)),
        offer: vec![OfferItem {
            item_type: ItemType::Erc721,
            token: "0x0000000000000000000000000000000000000002".into(),
            identifier_or_criteria: "42".into(),
            start_amount: start.to_string(),
            end_amount: end.to_string(),
        }],
        consideration: vec![ConsiderationItem {
            item_type: ItemType::Native,
            token: "0x0000000000000000000000000000000000000000".into(),
            identifier_or_criteria: "0".into(),
            start_amount: start.to_string(),
            end_amount: end.to_string(),
            recipient: "0x0000000000000000000000000000000000000001".into(),
        }],
    }
}

// ── Field Mapper Properties ─────────────────────────────────

proptest! {
    /// Numeric amount strings always map to finite wire numbers and the
    /// nonce is always "0".
    #[test]
    fn numeric_amounts_never_become_nan(
        start in 0u64..=u64::MAX,
        end in 0u64..=u64::MAX,
    ) {
        let params = parameters_with_amounts(&start.to_string(), &end.to_string());
        let wire = to_wire_order(&params);
        prop_assert_eq!(&wire.nonce, "0");
        prop_assert!(!wire.offer[0].start_amount.is_nan());
        prop_assert!(!wire.offer[0].end_amount.is_nan());
        prop_assert!(!wire.consideration[0].start_amount.is_nan());
        prop_assert_eq!(wire.offer[0].start_amount, start as f64);
    }

    /// Non-numeric amount strings coerce to NaN instead of erroring.
    #[test]
    fn non_numeric_amounts_coerce_to_nan(garbage in "[b-e]{1,12}") {
        let params = parameters_with_amounts(&garbage, "1");
        let wire = to_wire_order(&params);
        prop_assert!(wire.offer[0].start_amount.is_nan());
        prop_assert!(!wire.offer[0].end_amount.is_nan());
    }
}

// ── Deserializer Properties ─────────────────────────────────

proptest! {
    /// Fee basis points survive a deserialize/reserialize round trip
    /// exactly.
    #[test]
    fn fee_basis_points_round_trip(maker_bps in 0u16..=10_000, taker_bps in 0u16..=10_000) {
        let raw = json!({
            "created_date": "2022-05-01T00:00:00.000000",
            "closing_date": null,
            "listing_time": 1650000000u64,
            "expiration_time": 1660000000u64,
            "order_hash": "0xabc",
            "maker": { "address": "0x0000000000000000000000000000000000000001" },
            "taker": null,
            "protocol_data": {},
            "protocol_address": "0x00000000006c3852cbef3e08e8df289169ede581",
            "current_price": "1",
            "maker_fees": [
                {
                    "account": { "address": "0x0000000000000000000000000000000000000003" },
                    "basis_points": maker_bps
                }
            ],
            "taker_fees": [
                {
                    "account": { "address": "0x0000000000000000000000000000000000000004" },
                    "basis_points": taker_bps
                }
            ],
            "side": "ask",
            "order_type": "basic",
            "cancelled": false,
            "finalized": false,
            "marked_invalid": false,
            "client_signature": null
        });

        let order = deserialize_order(&raw).unwrap();
        prop_assert_eq!(order.maker_fees[0].basis_points, maker_bps);
        prop_assert_eq!(order.taker_fees[0].basis_points, taker_bps);

        let reserialized = serde_json::to_value(&order).unwrap();
        prop_assert_eq!(&reserialized["makerFees"][0]["basisPoints"], &json!(maker_bps));
        prop_assert_eq!(&reserialized["takerFees"][0]["basisPoints"], &json!(taker_bps));
    }
}
