//! Rule tables mapping unordered parent pairs to authored distributions.
//!
//! All three tables ship in `data/rules.json`. Each entry is keyed by a
//! [`PairKey`], which stores the pair in canonical order so that
//! `(A, B)` and `(B, A)` address the same distribution.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::SHARE_TOTAL_PER_MILLE;
use crate::distribution::{Distribution, Resolution};
use crate::estimate::{EstimateError, InputField, Parent, parse_trait};
use crate::phenotype::{EyeColor, HairColor, SkinTone, TraitCategory, TraitValue};

const DEFAULT_RULE_DATA: &str = include_str!("../data/rules.json");

/// Errors raised when a rule book document violates the table invariants.
#[derive(Debug, Error)]
pub enum RuleBookError {
    #[error("rule book is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{category} table lists {pair} more than once")]
    DuplicatePair { category: TraitCategory, pair: String },
    #[error("{category} table entry {pair} has no outcomes")]
    EmptyDistribution { category: TraitCategory, pair: String },
    #[error("{category} table entry {pair} lists outcome {outcome:?}, which is not a {category} outcome")]
    ForeignOutcome {
        category: TraitCategory,
        pair: String,
        outcome: &'static str,
    },
    #[error("{category} table entry {pair} totals {total}‰ (expected {expected}‰)")]
    BadTotal {
        category: TraitCategory,
        pair: String,
        total: u32,
        expected: u16,
    },
}

/// Unordered parent pair, stored smallest value first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey<V> {
    low: V,
    high: V,
}

impl<V: TraitValue> PairKey<V> {
    #[must_use]
    pub fn new(a: V, b: V) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}+{}", self.low.key(), self.high.key())
    }
}

/// One authored row as it appears in the JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: TraitValue", serialize = "V: TraitValue"))]
pub struct RuleEntry<V> {
    pub pair: [V; 2],
    pub outcomes: Distribution,
}

/// Validated rule table for a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable<V> {
    entries: BTreeMap<PairKey<V>, Distribution>,
}

impl<V> Default for RuleTable<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V: TraitValue> RuleTable<V> {
    /// Build a table, enforcing uniqueness, category membership and the 1000‰ total.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found, in document order.
    pub fn from_entries(
        entries: impl IntoIterator<Item = RuleEntry<V>>,
    ) -> Result<Self, RuleBookError> {
        let category = V::CATEGORY;
        let mut table = BTreeMap::new();
        for entry in entries {
            let key = PairKey::new(entry.pair[0], entry.pair[1]);
            let pair = key.label();
            let dist = entry.outcomes;
            if dist.shares().is_empty() {
                return Err(RuleBookError::EmptyDistribution { category, pair });
            }
            if let Some(foreign) = dist.shares().iter().find(|s| !s.outcome.belongs_to(category)) {
                return Err(RuleBookError::ForeignOutcome {
                    category,
                    pair,
                    outcome: foreign.outcome.key(),
                });
            }
            if !dist.is_complete() {
                return Err(RuleBookError::BadTotal {
                    category,
                    pair,
                    total: dist.total_per_mille(),
                    expected: SHARE_TOTAL_PER_MILLE,
                });
            }
            if table.insert(key, dist).is_some() {
                return Err(RuleBookError::DuplicatePair { category, pair });
            }
        }
        Ok(Self { entries: table })
    }

    #[must_use]
    pub fn get(&self, a: V, b: V) -> Option<&Distribution> {
        self.entries.get(&PairKey::new(a, b))
    }

    /// Resolve a parent pair. Missing combinations yield [`Resolution::InsufficientData`].
    #[must_use]
    pub fn resolve(&self, mother: V, father: V) -> Resolution {
        if let Some(dist) = self.get(mother, father) {
            Resolution::Authored(dist.clone())
        } else {
            log::debug!(
                "no authored {} rule for {}+{}",
                V::CATEGORY,
                mother.key(),
                father.key()
            );
            Resolution::InsufficientData
        }
    }

    /// Resolve a pair given by name, as a form would submit it.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] naming the parent whose value is
    /// outside the category's enumeration.
    pub fn resolve_named(&self, mother: &str, father: &str) -> Result<Resolution, EstimateError> {
        let mother: V = parse_trait(
            Some(mother),
            InputField::for_trait(Parent::Mother, V::CATEGORY),
        )?;
        let father: V = parse_trait(
            Some(father),
            InputField::for_trait(Parent::Father, V::CATEGORY),
        )?;
        Ok(self.resolve(mother, father))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey<V>, &Distribution)> {
        self.entries.iter()
    }
}

#[derive(Debug, Deserialize)]
struct RuleBookDoc {
    #[serde(default)]
    eye: Vec<RuleEntry<EyeColor>>,
    #[serde(default)]
    hair: Vec<RuleEntry<HairColor>>,
    #[serde(default)]
    skin: Vec<RuleEntry<SkinTone>>,
}

/// The three categorical rule tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleBook {
    pub eye: RuleTable<EyeColor>,
    pub hair: RuleTable<HairColor>,
    pub skin: RuleTable<SkinTone>,
}

impl RuleBook {
    /// Parse and validate a rule book document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any table violates its invariants.
    pub fn from_json(json: &str) -> Result<Self, RuleBookError> {
        let doc: RuleBookDoc = serde_json::from_str(json)?;
        Ok(Self {
            eye: RuleTable::from_entries(doc.eye)?,
            hair: RuleTable::from_entries(doc.hair)?,
            skin: RuleTable::from_entries(doc.skin)?,
        })
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_RULE_DATA).unwrap_or_else(|err| {
            log::error!("embedded rule book rejected: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_book() -> &'static Self {
        static BOOK: OnceLock<RuleBook> = OnceLock::new();
        BOOK.get_or_init(Self::load_from_static)
    }

    #[must_use]
    pub fn resolve_eye(&self, mother: EyeColor, father: EyeColor) -> Resolution {
        self.eye.resolve(mother, father)
    }

    #[must_use]
    pub fn resolve_hair(&self, mother: HairColor, father: HairColor) -> Resolution {
        self.hair.resolve(mother, father)
    }

    #[must_use]
    pub fn resolve_skin(&self, mother: SkinTone, father: SkinTone) -> Resolution {
        self.skin.resolve(mother, father)
    }

    /// Resolve any category from value names.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] if either name is outside the category.
    pub fn resolve_by_name(
        &self,
        category: TraitCategory,
        mother: &str,
        father: &str,
    ) -> Result<Resolution, EstimateError> {
        match category {
            TraitCategory::Eye => self.eye.resolve_named(mother, father),
            TraitCategory::Hair => self.hair.resolve_named(mother, father),
            TraitCategory::Skin => self.skin.resolve_named(mother, father),
        }
    }
}
