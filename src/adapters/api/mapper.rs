//! Field Mapper and Response Deserializer
//!
//! Converts the canonical camelCase order shape into the marketplace
//! wire shape for submission, and raw marketplace order payloads back
//! into the normalized `OrderV2` model. Pure functions; no I/O.

use serde_json::Value;

use super::types::{
    SerializedAccount, SerializedFee, SerializedOrderV2, WireAsset, WireConsiderationItem,
    WireOfferItem, WireOrderParameters,
};
use crate::domain::{Account, AssetRecord, FeeRecord, OrderParameters, OrderV2, User};
use crate::error::ApiError;

/// Nonce submitted with every order. Real nonce tracking is out of scope
/// for this layer; orders are treated as single-use.
const SUBMISSION_NONCE: &str = "0";

/// Coerce a decimal-string field to a number.
///
/// Non-numeric input becomes NaN rather than an error; the validation
/// gate is responsible for catching it before submission.
fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Map canonical order parameters to the wire submission shape.
pub fn to_wire_order(order: &OrderParameters) -> WireOrderParameters {
    let offer = order
        .offer
        .iter()
        .map(|item| WireOfferItem {
            item_type: item.item_type.into(),
            token: item.token.clone(),
            identifier_or_criteria: item.identifier_or_criteria.clone(),
            start_amount: coerce_number(&item.start_amount),
            end_amount: coerce_number(&item.end_amount),
        })
        .collect();
    let consideration = order
        .consideration
        .iter()
        .map(|item| WireConsiderationItem {
            item_type: item.item_type.into(),
            token: item.token.clone(),
            identifier_or_criteria: item.identifier_or_criteria.clone(),
            start_amount: coerce_number(&item.start_amount),
            end_amount: coerce_number(&item.end_amount),
            recipient: item.recipient.clone(),
        })
        .collect();

    WireOrderParameters {
        offerer: order.offerer.clone(),
        zone: order.zone.clone(),
        zone_hash: order.zone_hash.clone(),
        start_time: coerce_number(&order.start_time),
        end_time: coerce_number(&order.end_time),
        order_type: order.order_type.into(),
        salt: order.salt.clone(),
        conduit_key: order.conduit_key.clone(),
        nonce: SUBMISSION_NONCE.to_string(),
        offer,
        consideration,
    }
}

fn account_from_wire(account: SerializedAccount) -> Account {
    Account {
        address: account.address,
        config: account.config,
        profile_img_url: account.profile_img_url,
        user: account.user.map(|user| User { username: user.username }),
    }
}

fn fee_from_wire(fee: SerializedFee) -> FeeRecord {
    FeeRecord {
        account: account_from_wire(fee.account),
        basis_points: fee.basis_points,
    }
}

/// Deserialize one raw order payload into the normalized model.
///
/// Total over well-formed input; missing required fields (maker,
/// `maker_fees`, ...) fail here with a deserialize error instead of
/// being defaulted.
pub fn deserialize_order(raw: &Value) -> Result<OrderV2, ApiError> {
    let wire: SerializedOrderV2 = serde_json::from_value(raw.clone())?;
    Ok(OrderV2 {
        created_date: wire.created_date,
        closing_date: wire.closing_date,
        listing_time: wire.listing_time,
        expiration_time: wire.expiration_time,
        order_hash: wire.order_hash,
        maker: account_from_wire(wire.maker),
        taker: wire.taker.map(account_from_wire),
        protocol_data: wire.protocol_data,
        protocol_address: wire.protocol_address,
        current_price: wire.current_price,
        maker_fees: wire.maker_fees.into_iter().map(fee_from_wire).collect(),
        taker_fees: wire.taker_fees.into_iter().map(fee_from_wire).collect(),
        side: wire.side,
        order_type: wire.order_type,
        cancelled: wire.cancelled,
        finalized: wire.finalized,
        marked_invalid: wire.marked_invalid,
        client_signature: wire.client_signature,
        maker_asset_bundle: wire.maker_asset_bundle,
        taker_asset_bundle: wire.taker_asset_bundle,
    })
}

/// Flatten one asset entry: contract fields plus the collection's fee
/// fields in a single record.
pub fn asset_from_wire(asset: WireAsset) -> AssetRecord {
    let collection = asset.collection;
    AssetRecord {
        address: asset.asset_contract.address,
        name: asset.asset_contract.name,
        symbol: asset.asset_contract.symbol,
        schema_name: asset.asset_contract.schema_name,
        royalty_fee_points: collection
            .as_ref()
            .and_then(|c| c.dev_seller_fee_basis_points),
        protocol_fee_points: collection
            .as_ref()
            .and_then(|c| c.opensea_seller_fee_basis_points),
        royalty_fee_address: collection.and_then(|c| c.payout_address),
        sell_orders: asset.sell_orders,
        token_id: asset.token_id,
    }
}
