//! Mid-parental height heuristic.
//!
//! The child's expected height is the parents' average after adding (boy) or
//! subtracting (girl) a fixed sex differential, rounded half up, reported with
//! a fixed tolerance band. Unusable parent heights fall back to defaults
//! instead of failing.
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::constants::{
    DEFAULT_FATHER_HEIGHT_CM, DEFAULT_MOTHER_HEIGHT_CM, HEIGHT_MAX_CM, HEIGHT_MIN_CM,
    HEIGHT_SEX_DIFFERENTIAL_CM, HEIGHT_TOLERANCE_CM,
};
use crate::distribution::Citation;
use crate::numbers::{clamp_i32_to_u16, halve_round_half_up, truncate_f64_to_i32};
use crate::phenotype::ChildSex;

fn leading_integer() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").ok())
        .as_ref()
}

/// Read the leading integer of a form value: `"172cm"` → 172, `"172.9"` → 172, `"tall"` → `None`.
#[must_use]
pub fn parse_height_text(raw: &str) -> Option<i32> {
    let caps = leading_integer()?.captures(raw)?;
    caps.get(1)?.as_str().parse::<i32>().ok()
}

fn usable_height(value: Option<i32>) -> Option<u16> {
    value
        .filter(|cm| (HEIGHT_MIN_CM..=HEIGHT_MAX_CM).contains(cm))
        .map(clamp_i32_to_u16)
}

/// Sanitized inputs for the height regression.
///
/// Every constructor, deserialization included, goes through the fallback
/// policy, so both heights are always within the sane range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHeightInputs")]
pub struct HeightInputs {
    mother_cm: u16,
    father_cm: u16,
    child_sex: ChildSex,
}

#[derive(Deserialize)]
struct RawHeightInputs {
    #[serde(default)]
    mother_cm: Option<i32>,
    #[serde(default)]
    father_cm: Option<i32>,
    child_sex: ChildSex,
}

impl From<RawHeightInputs> for HeightInputs {
    fn from(raw: RawHeightInputs) -> Self {
        Self::new(raw.mother_cm, raw.father_cm, raw.child_sex)
    }
}

impl HeightInputs {
    /// Apply the fallback policy: missing or out-of-range heights become 165/175 cm.
    #[must_use]
    pub fn new(mother_cm: Option<i32>, father_cm: Option<i32>, child_sex: ChildSex) -> Self {
        let mother = usable_height(mother_cm).unwrap_or_else(|| {
            log::debug!("mother height {mother_cm:?} unusable; using {DEFAULT_MOTHER_HEIGHT_CM} cm");
            DEFAULT_MOTHER_HEIGHT_CM
        });
        let father = usable_height(father_cm).unwrap_or_else(|| {
            log::debug!("father height {father_cm:?} unusable; using {DEFAULT_FATHER_HEIGHT_CM} cm");
            DEFAULT_FATHER_HEIGHT_CM
        });
        Self {
            mother_cm: mother,
            father_cm: father,
            child_sex,
        }
    }

    #[must_use]
    pub const fn mother_cm(&self) -> u16 {
        self.mother_cm
    }

    #[must_use]
    pub const fn father_cm(&self) -> u16 {
        self.father_cm
    }

    #[must_use]
    pub const fn child_sex(&self) -> ChildSex {
        self.child_sex
    }

    #[must_use]
    pub fn from_text(mother: &str, father: &str, child_sex: ChildSex) -> Self {
        Self::new(parse_height_text(mother), parse_height_text(father), child_sex)
    }

    /// Fractions are truncated; NaN and infinities count as missing.
    #[must_use]
    pub fn from_f64(mother: f64, father: f64, child_sex: ChildSex) -> Self {
        Self::new(
            truncate_f64_to_i32(mother),
            truncate_f64_to_i32(father),
            child_sex,
        )
    }
}

/// Point estimate plus the symmetric tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightEstimate {
    pub expected_cm: u16,
    pub low_cm: u16,
    pub high_cm: u16,
    pub citation: Citation,
}

#[must_use]
pub fn estimate_height(inputs: &HeightInputs) -> HeightEstimate {
    let sum = i32::from(inputs.mother_cm) + i32::from(inputs.father_cm);
    let adjusted = if inputs.child_sex.is_male() {
        sum + HEIGHT_SEX_DIFFERENTIAL_CM
    } else {
        sum - HEIGHT_SEX_DIFFERENTIAL_CM
    };
    let base = halve_round_half_up(adjusted);
    HeightEstimate {
        expected_cm: clamp_i32_to_u16(base),
        low_cm: clamp_i32_to_u16(base - HEIGHT_TOLERANCE_CM),
        high_cm: clamp_i32_to_u16(base + HEIGHT_TOLERANCE_CM),
        citation: Citation::JohnsHopkins,
    }
}
