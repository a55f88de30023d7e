//! Outcome distributions produced by the rule tables.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{SHARE_SCALE, SHARE_TOTAL_PER_MILLE};
use crate::phenotype::TraitCategory;

/// A possible child outcome. Some outcomes only exist as results, never as parent inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Brown,
    Blue,
    Green,
    Hazel,
    Black,
    Blonde,
    Red,
    LightBrown,
    BrownOrBlonde,
    Light,
    Medium,
    Dark,
}

impl Outcome {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Brown => "brown",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Hazel => "hazel",
            Self::Black => "black",
            Self::Blonde => "blonde",
            Self::Red => "red",
            Self::LightBrown => "light_brown",
            Self::BrownOrBlonde => "brown_or_blonde",
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }

    /// Whether this outcome may appear in a distribution of `category`.
    #[must_use]
    pub const fn belongs_to(self, category: TraitCategory) -> bool {
        match category {
            TraitCategory::Eye => matches!(self, Self::Brown | Self::Blue | Self::Green | Self::Hazel),
            TraitCategory::Hair => matches!(
                self,
                Self::Black
                    | Self::Brown
                    | Self::Blonde
                    | Self::Red
                    | Self::LightBrown
                    | Self::BrownOrBlonde
            ),
            TraitCategory::Skin => matches!(self, Self::Light | Self::Medium | Self::Dark),
        }
    }
}

/// Source attributed to an authored heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citation {
    Nih,
    Edinburgh,
    Nhgri,
    JohnsHopkins,
}

impl Citation {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nih => "NIH",
            Self::Edinburgh => "Edinburgh",
            Self::Nhgri => "NHGRI",
            Self::JohnsHopkins => "Johns Hopkins",
        }
    }

    /// Id of the matching entry in the reference catalog.
    #[must_use]
    pub const fn reference_id(self) -> &'static str {
        match self {
            Self::Nih | Self::Nhgri => "nhgri",
            Self::Edinburgh => "edinburgh",
            Self::JohnsHopkins => "johns_hopkins",
        }
    }
}

/// A probability in tenths of a percent (375 = 37.5%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Share(u16);

impl Share {
    #[must_use]
    pub const fn from_per_mille(per_mille: u16) -> Self {
        Self(per_mille)
    }

    #[must_use]
    pub const fn per_mille(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn percent(self) -> f64 {
        f64::from(self.0) / f64::from(SHARE_SCALE)
    }
}

impl std::fmt::Display for Share {
    /// Percent without the sign and without a trailing `.0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / SHARE_SCALE;
        let tenths = self.0 % SHARE_SCALE;
        if tenths == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.{tenths}")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeShare {
    pub outcome: Outcome,
    #[serde(rename = "per_mille")]
    pub share: Share,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<Citation>,
}

/// Authored outcomes for one parent pair, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    shares: SmallVec<[OutcomeShare; 4]>,
}

impl Distribution {
    #[must_use]
    pub fn new(shares: impl IntoIterator<Item = OutcomeShare>) -> Self {
        Self {
            shares: shares.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn shares(&self) -> &[OutcomeShare] {
        &self.shares
    }

    #[must_use]
    pub fn total_per_mille(&self) -> u32 {
        self.shares
            .iter()
            .map(|s| u32::from(s.share.per_mille()))
            .sum()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_per_mille() == u32::from(SHARE_TOTAL_PER_MILLE)
    }

    #[must_use]
    pub fn share_of(&self, outcome: Outcome) -> Option<Share> {
        self.shares
            .iter()
            .find(|s| s.outcome == outcome)
            .map(|s| s.share)
    }

    /// Distinct citations in first-seen order.
    #[must_use]
    pub fn citations(&self) -> SmallVec<[Citation; 2]> {
        let mut seen: SmallVec<[Citation; 2]> = SmallVec::new();
        for citation in self.shares.iter().filter_map(|s| s.citation) {
            if !seen.contains(&citation) {
                seen.push(citation);
            }
        }
        seen
    }
}

/// Result of resolving one categorical trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "outcomes", rename_all = "snake_case")]
pub enum Resolution {
    Authored(Distribution),
    /// No authored heuristic exists for the pair. Not an error.
    InsufficientData,
}

impl Resolution {
    #[must_use]
    pub const fn distribution(&self) -> Option<&Distribution> {
        match self {
            Self::Authored(dist) => Some(dist),
            Self::InsufficientData => None,
        }
    }

    #[must_use]
    pub const fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(outcome: Outcome, per_mille: u16, citation: Option<Citation>) -> OutcomeShare {
        OutcomeShare {
            outcome,
            share: Share::from_per_mille(per_mille),
            citation,
        }
    }

    #[test]
    fn share_display_drops_trailing_zero() {
        assert_eq!(Share::from_per_mille(500).to_string(), "50");
        assert_eq!(Share::from_per_mille(375).to_string(), "37.5");
        assert_eq!(Share::from_per_mille(5).to_string(), "0.5");
        assert!((Share::from_per_mille(125).percent() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn totals_and_lookup() {
        let dist = Distribution::new([
            share(Outcome::Brown, 500, Some(Citation::Nih)),
            share(Outcome::Green, 375, Some(Citation::Nih)),
            share(Outcome::Blue, 125, Some(Citation::Nih)),
        ]);
        assert_eq!(dist.total_per_mille(), 1_000);
        assert!(dist.is_complete());
        assert_eq!(dist.share_of(Outcome::Green), Some(Share::from_per_mille(375)));
        assert_eq!(dist.share_of(Outcome::Hazel), None);
        assert_eq!(dist.citations().as_slice(), &[Citation::Nih]);
    }

    #[test]
    fn uncited_distribution_has_no_citations() {
        let dist = Distribution::new([
            share(Outcome::Brown, 300, None),
            share(Outcome::Blonde, 600, None),
        ]);
        assert!(!dist.is_complete());
        assert!(dist.citations().is_empty());
    }

    #[test]
    fn outcome_membership_by_category() {
        assert!(Outcome::Hazel.belongs_to(TraitCategory::Eye));
        assert!(!Outcome::Hazel.belongs_to(TraitCategory::Hair));
        assert!(Outcome::Brown.belongs_to(TraitCategory::Hair));
        assert!(Outcome::BrownOrBlonde.belongs_to(TraitCategory::Hair));
        assert!(!Outcome::Dark.belongs_to(TraitCategory::Eye));
    }

    #[test]
    fn resolution_serializes_with_status_tag() {
        let value = serde_json::to_value(Resolution::InsufficientData).unwrap();
        assert_eq!(value["status"], "insufficient_data");
        let authored = Resolution::Authored(Distribution::new([share(Outcome::Dark, 1_000, None)]));
        let value = serde_json::to_value(&authored).unwrap();
        assert_eq!(value["status"], "authored");
        assert_eq!(value["outcomes"][0]["per_mille"], 1_000);
        assert_eq!(value["outcomes"][0]["outcome"], "dark");
    }
}
