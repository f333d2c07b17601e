//! Canonical order domain types.
//!
//! Two shapes live here: the pre-submission protocol-native order
//! (`OrderParameters` and friends, serialized camelCase exactly as the
//! exchange protocol defines them) and the post-deserialization
//! normalized order (`OrderV2` and friends). They are deliberately not
//! interchangeable; the API adapter's mapper converts between them and
//! the marketplace wire format.

pub mod listing;
pub mod order;

pub use listing::{Account, AssetRecord, FeeRecord, OrderV2, QuoteSide, User};
pub use order::{
    ConsiderationItem, ItemType, OfferItem, OrderComponents, OrderKind, OrderParameters,
    OrderSide, SignedOrder,
};
