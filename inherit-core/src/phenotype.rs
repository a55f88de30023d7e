//! Trait categories and their closed value sets.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// The three categorical traits backed by rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Eye,
    Hair,
    Skin,
}

impl TraitCategory {
    pub const ALL: [Self; 3] = [Self::Eye, Self::Hair, Self::Skin];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Eye => "eye",
            Self::Hair => "hair",
            Self::Skin => "skin",
        }
    }
}

impl std::fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A name that is not part of a category's enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{value:?} is not a known {category} value")]
pub struct UnknownTraitValue {
    pub category: TraitCategory,
    pub value: String,
}

/// A member of one category's closed value set.
///
/// The `Ord` implementation defines the canonical order used to key
/// unordered parent pairs.
pub trait TraitValue:
    'static
    + Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Serialize
    + DeserializeOwned
    + FromStr<Err = UnknownTraitValue>
{
    const CATEGORY: TraitCategory;
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
}

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeColor {
    Brown,
    Blue,
    Green,
    Hazel,
}

impl TraitValue for EyeColor {
    const CATEGORY: TraitCategory = TraitCategory::Eye;
    const ALL: &'static [Self] = &[Self::Brown, Self::Blue, Self::Green, Self::Hazel];

    fn key(self) -> &'static str {
        match self {
            Self::Brown => "brown",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Hazel => "hazel",
        }
    }
}

impl FromStr for EyeColor {
    type Err = UnknownTraitValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "brown" => Ok(Self::Brown),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "hazel" => Ok(Self::Hazel),
            _ => Err(UnknownTraitValue {
                category: Self::CATEGORY,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairColor {
    Black,
    Brown,
    Blonde,
    Red,
}

impl TraitValue for HairColor {
    const CATEGORY: TraitCategory = TraitCategory::Hair;
    const ALL: &'static [Self] = &[Self::Black, Self::Brown, Self::Blonde, Self::Red];

    fn key(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Blonde => "blonde",
            Self::Red => "red",
        }
    }
}

impl FromStr for HairColor {
    type Err = UnknownTraitValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "black" => Ok(Self::Black),
            "brown" => Ok(Self::Brown),
            "blonde" => Ok(Self::Blonde),
            "red" => Ok(Self::Red),
            _ => Err(UnknownTraitValue {
                category: Self::CATEGORY,
                value: s.to_string(),
            }),
        }
    }
}

/// Skin tone. `Light` is also accepted under the name `fair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinTone {
    #[serde(alias = "fair")]
    Light,
    Medium,
    Dark,
}

impl TraitValue for SkinTone {
    const CATEGORY: TraitCategory = TraitCategory::Skin;
    const ALL: &'static [Self] = &[Self::Light, Self::Medium, Self::Dark];

    fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for SkinTone {
    type Err = UnknownTraitValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "light" | "fair" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTraitValue {
                category: Self::CATEGORY,
                value: s.to_string(),
            }),
        }
    }
}

/// Expected sex of the child, used only by the height regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildSex {
    Male,
    Female,
}

impl ChildSex {
    #[must_use]
    pub const fn from_is_male(is_male: bool) -> Self {
        if is_male { Self::Male } else { Self::Female }
    }

    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}
