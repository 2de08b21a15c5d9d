//! Variant catalogue.
//!
//! The `Catalogue` is the process-wide constant set of variants a board is
//! drawn from. Order matters: it is the draw order for the generator and
//! the default winning order in sequence mode.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::variant::{CardVariant, VariantId};
use crate::core::{RuleMode, MAX_TIMED_VARIANTS, SEQUENCE_VARIANTS};
use crate::error::CatalogueError;

/// Ordered set of card variants.
///
/// ## Example
///
/// ```
/// use promo_match::cards::{Catalogue, CardVariant, VariantId};
///
/// let catalogue = Catalogue::new(vec![
///     CardVariant::new("p1", "Corona Extra", "p1.png"),
///     CardVariant::new("p2", "Corona Familiar", "p2.png"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalogue.len(), 2);
/// assert!(catalogue.contains(&VariantId::new("p2")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogueRepr")]
pub struct Catalogue {
    variants: Vec<CardVariant>,
}

/// Wire shape of a catalogue, validated through `Catalogue::new`.
#[derive(Deserialize)]
struct CatalogueRepr {
    variants: Vec<CardVariant>,
}

impl TryFrom<CatalogueRepr> for Catalogue {
    type Error = CatalogueError;

    fn try_from(repr: CatalogueRepr) -> Result<Self, Self::Error> {
        Self::new(repr.variants)
    }
}

impl Catalogue {
    /// Build a catalogue, rejecting empty or duplicate-id variant lists.
    pub fn new(variants: Vec<CardVariant>) -> Result<Self, CatalogueError> {
        if variants.is_empty() {
            return Err(CatalogueError::Empty);
        }

        let mut seen = FxHashSet::default();
        for variant in &variants {
            if !seen.insert(&variant.id) {
                return Err(CatalogueError::DuplicateVariant(variant.id.clone()));
            }
        }

        Ok(Self { variants })
    }

    /// The three-product catalogue used by sequence mode.
    #[must_use]
    pub fn default_sequence() -> Self {
        Self {
            variants: vec![
                CardVariant::new("p1", "Corona Extra", "cards/p1.png"),
                CardVariant::new("p2", "Corona Familiar", "cards/p2.png"),
                CardVariant::new("p3", "Corona Premier", "cards/p3.png"),
            ],
        }
    }

    /// The seven-card catalogue used by timed-caller mode.
    #[must_use]
    pub fn default_timed() -> Self {
        let mut catalogue = Self::default_sequence();
        for n in 4..=7 {
            catalogue.variants.push(CardVariant::new(
                format!("p{n}"),
                format!("Product {n}"),
                format!("cards/p{n}.png"),
            ));
        }
        catalogue
    }

    /// Check the variant count suits a rule mode.
    ///
    /// Sequence mode needs exactly three variants; timed-caller mode
    /// accepts one to seven.
    pub fn check_mode(&self, mode: RuleMode) -> Result<(), CatalogueError> {
        if self.is_empty() {
            return Err(CatalogueError::Empty);
        }
        match mode {
            RuleMode::Sequence if self.len() != SEQUENCE_VARIANTS => {
                Err(CatalogueError::VariantCount {
                    mode,
                    expected: SEQUENCE_VARIANTS,
                    actual: self.len(),
                })
            }
            RuleMode::TimedCaller if self.len() > MAX_TIMED_VARIANTS => {
                Err(CatalogueError::TooManyVariants {
                    mode,
                    max: MAX_TIMED_VARIANTS,
                    actual: self.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Get a variant by ID.
    #[must_use]
    pub fn get(&self, id: &VariantId) -> Option<&CardVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Get a variant by catalogue index.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&CardVariant> {
        self.variants.get(index)
    }

    /// Check if a variant ID is in the catalogue.
    #[must_use]
    pub fn contains(&self, id: &VariantId) -> bool {
        self.get(id).is_some()
    }

    /// Number of variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false for a catalogue built by `new` or deserialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate variants in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &CardVariant> {
        self.variants.iter()
    }

    /// Variant IDs in catalogue order.
    #[must_use]
    pub fn ids(&self) -> Vec<VariantId> {
        self.variants.iter().map(|v| v.id.clone()).collect()
    }
}
