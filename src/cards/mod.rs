//! Card system: variants, catalogue, and board cards.
//!
//! ## Key Types
//!
//! - `VariantId`: Identifier for a card variant
//! - `CardVariant`: Static variant data (name, asset reference)
//! - `Catalogue`: The ordered variant set a board is drawn from
//! - `Card`: One board position and its round flags

pub mod card;
pub mod catalogue;
pub mod variant;

pub use card::Card;
pub use catalogue::Catalogue;
pub use variant::{CardVariant, VariantId};
