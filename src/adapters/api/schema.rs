//! Validation Gate
//!
//! Structural validation for deserialized orders and order-submission
//! payloads. Acceptance or rejection only; the gate never repairs data.
//! Failures carry the full list of violated constraints so callers can
//! log exactly what was wrong.

use crate::domain::{OrderV2, SignedOrder};
use crate::error::Violations;

/// Maximum fee share: 10000 basis points = 100%.
const MAX_BASIS_POINTS: u16 = 10_000;

fn is_address(raw: &str) -> bool {
    raw.len() == 42
        && raw.starts_with("0x")
        && raw[2..].chars().all(|c| c.is_ascii_hexdigit())
}

fn is_numeric(raw: &str) -> bool {
    !raw.trim().is_empty() && raw.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// Validate a normalized order received from the marketplace.
pub fn validate_order_v2(order: &OrderV2) -> Result<(), Violations> {
    let mut violations = Violations::default();

    if order.order_hash.is_empty() {
        violations.push("order_hash must not be empty");
    }
    if !is_address(&order.maker.address) {
        violations.push(format!("maker address is malformed: {:?}", order.maker.address));
    }
    if let Some(taker) = &order.taker {
        if !is_address(&taker.address) {
            violations.push(format!("taker address is malformed: {:?}", taker.address));
        }
    }
    if !is_address(&order.protocol_address) {
        violations.push(format!(
            "protocol address is malformed: {:?}",
            order.protocol_address
        ));
    }
    if !is_numeric(&order.current_price) {
        violations.push(format!("current price is not numeric: {:?}", order.current_price));
    }
    for fee in order.maker_fees.iter().chain(&order.taker_fees) {
        if fee.basis_points > MAX_BASIS_POINTS {
            violations.push(format!(
                "fee basis points exceed {MAX_BASIS_POINTS}: {}",
                fee.basis_points
            ));
        }
        if !is_address(&fee.account.address) {
            violations.push(format!(
                "fee account address is malformed: {:?}",
                fee.account.address
            ));
        }
    }

    violations.into_result()
}

/// Validate a signed order (order-with-counter) before submission.
pub fn validate_signed_order(order: &SignedOrder) -> Result<(), Violations> {
    let mut violations = Violations::default();
    let params = &order.parameters.parameters;

    if order.signature.is_empty() {
        violations.push("signature must not be empty");
    }
    if !is_address(&params.offerer) {
        violations.push(format!("offerer address is malformed: {:?}", params.offerer));
    }
    if !is_address(&params.zone) {
        violations.push(format!("zone address is malformed: {:?}", params.zone));
    }
    if !is_numeric(&params.start_time) {
        violations.push(format!("start time is not numeric: {:?}", params.start_time));
    }
    if !is_numeric(&params.end_time) {
        violations.push(format!("end time is not numeric: {:?}", params.end_time));
    }
    if params.offer.is_empty() {
        violations.push("offer must not be empty");
    }
    if params.consideration.is_empty() {
        violations.push("consideration must not be empty");
    }
    for item in &params.offer {
        if !is_numeric(&item.start_amount) || !is_numeric(&item.end_amount) {
            violations.push(format!(
                "offer item amounts are not numeric: {:?}/{:?}",
                item.start_amount, item.end_amount
            ));
        }
    }
    for item in &params.consideration {
        if !is_numeric(&item.start_amount) || !is_numeric(&item.end_amount) {
            violations.push(format!(
                "consideration item amounts are not numeric: {:?}/{:?}",
                item.start_amount, item.end_amount
            ));
        }
        if !is_address(&item.recipient) {
            violations.push(format!("recipient address is malformed: {:?}", item.recipient));
        }
    }

    let counter = &order.parameters.counter;
    let counter_ok = counter.is_u64()
        || counter
            .as_str()
            .is_some_and(|c| !c.is_empty() && c.chars().all(|ch| ch.is_ascii_digit()));
    if !counter_ok {
        violations.push(format!("counter must be a non-negative integer: {counter}"));
    }

    violations.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::mapper::deserialize_order;
    use crate::domain::{
        ConsiderationItem, ItemType, OfferItem, OrderComponents, OrderKind, OrderParameters,
    };
    use serde_json::json;

    fn valid_order_v2() -> OrderV2 {
        deserialize_order(&json!({
            "created_date": "2022-05-01T00:00:00.000000",
            "closing_date": null,
            "listing_time": 1650000000u64,
            "expiration_time": 1660000000u64,
            "order_hash": "0xabc",
            "maker": { "address": "0x0000000000000000000000000000000000000001" },
            "taker": null,
            "protocol_data": {},
            "protocol_address": "0x00000000006c3852cbef3e08e8df289169ede581",
            "current_price": "1000000000000000000",
            "maker_fees": [
                {
                    "account": { "address": "0x0000000000000000000000000000000000000003" },
                    "basis_points": 250
                }
            ],
            "taker_fees": [],
            "side": "ask",
            "order_type": "basic",
            "cancelled": false,
            "finalized": false,
            "marked_invalid": false,
            "client_signature": null
        }))
        .unwrap()
    }

    fn valid_signed_order() -> SignedOrder {
        SignedOrder {
            parameters: OrderComponents {
                parameters: OrderParameters {
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
                        start_amount: "1".into(),
                        end_amount: "1".into(),
                    }],
                    consideration: vec![ConsiderationItem {
                        item_type: ItemType::Native,
                        token: "0x0000000000000000000000000000000000000000".into(),
                        identifier_or_criteria: "0".into(),
                        start_amount: "1000000000000000000".into(),
                        end_amount: "1000000000000000000".into(),
                        recipient: "0x0000000000000000000000000000000000000001".into(),
                    }],
                },
                counter: json!(0),
                total_original_consideration_items: None,
            },
            signature: "0xdeadbeef".into(),
        }
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(validate_order_v2(&valid_order_v2()).is_ok());
    }

    #[test]
    fn test_excessive_basis_points_rejected_with_reason() {
        let mut order = valid_order_v2();
        order.maker_fees[0].basis_points = 10_001;
        let violations = validate_order_v2(&order).unwrap_err();
        assert_eq!(violations.constraints().len(), 1);
        assert!(violations.to_string().contains("basis points"));
    }

    #[test]
    fn test_malformed_maker_address_rejected() {
        let mut order = valid_order_v2();
        order.maker.address = "not-an-address".into();
        assert!(validate_order_v2(&order).is_err());
    }

    #[test]
    fn test_valid_signed_order_passes() {
        assert!(validate_signed_order(&valid_signed_order()).is_ok());
    }

    #[test]
    fn test_signed_order_empty_offer_and_signature_rejected() {
        let mut order = valid_signed_order();
        order.signature = String::new();
        order.parameters.parameters.offer.clear();
        let violations = validate_signed_order(&order).unwrap_err();
        let rendered = violations.to_string();
        assert!(rendered.contains("signature must not be empty"));
        assert!(rendered.contains("offer must not be empty"));
    }

    #[test]
    fn test_signed_order_string_counter_accepted() {
        let mut order = valid_signed_order();
        order.parameters.counter = json!("12");
        assert!(validate_signed_order(&order).is_ok());

        order.parameters.counter = json!(null);
        assert!(validate_signed_order(&order).is_err());
    }
}
