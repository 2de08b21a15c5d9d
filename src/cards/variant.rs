//! Card variants: the immutable catalogue entries.
//!
//! A `CardVariant` is one card "flavor" (a product shown on the card face).
//! Board cards refer to their variant by `VariantId` only.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card variant, e.g. `"p1"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
    /// Create a new variant ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Static variant definition.
///
/// ## Example
///
/// ```
/// use promo_match::cards::CardVariant;
///
/// let extra = CardVariant::new("p1", "Corona Extra", "cards/p1.png");
/// assert_eq!(extra.id.as_str(), "p1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardVariant {
    /// Unique identifier.
    pub id: VariantId,

    /// Name shown to the player.
    pub display_name: String,

    /// Opaque reference the shell resolves to an image.
    pub asset_ref: String,
}

impl CardVariant {
    /// Create a new variant.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        asset_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: VariantId::new(id),
            display_name: display_name.into(),
            asset_ref: asset_ref.into(),
        }
    }
}
