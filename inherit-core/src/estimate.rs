//! Aggregate estimate over all four traits.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distribution::Resolution;
use crate::height::{HeightEstimate, HeightInputs, estimate_height, parse_height_text};
use crate::numbers::truncate_f64_to_i32;
use crate::phenotype::{ChildSex, EyeColor, HairColor, SkinTone, TraitCategory, TraitValue};
use crate::rules::RuleBook;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parent {
    Mother,
    Father,
}

/// Request field named by an [`EstimateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    #[serde(rename = "mother.eye")]
    MotherEye,
    #[serde(rename = "father.eye")]
    FatherEye,
    #[serde(rename = "mother.hair")]
    MotherHair,
    #[serde(rename = "father.hair")]
    FatherHair,
    #[serde(rename = "mother.skin")]
    MotherSkin,
    #[serde(rename = "father.skin")]
    FatherSkin,
    #[serde(rename = "child_is_male")]
    ChildSex,
}

impl InputField {
    #[must_use]
    pub const fn for_trait(parent: Parent, category: TraitCategory) -> Self {
        match (parent, category) {
            (Parent::Mother, TraitCategory::Eye) => Self::MotherEye,
            (Parent::Father, TraitCategory::Eye) => Self::FatherEye,
            (Parent::Mother, TraitCategory::Hair) => Self::MotherHair,
            (Parent::Father, TraitCategory::Hair) => Self::FatherHair,
            (Parent::Mother, TraitCategory::Skin) => Self::MotherSkin,
            (Parent::Father, TraitCategory::Skin) => Self::FatherSkin,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MotherEye => "mother.eye",
            Self::FatherEye => "father.eye",
            Self::MotherHair => "mother.hair",
            Self::FatherHair => "father.hair",
            Self::MotherSkin => "mother.skin",
            Self::FatherSkin => "father.skin",
            Self::ChildSex => "child_is_male",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputProblem {
    Missing,
    Unrecognized(String),
}

impl std::fmt::Display for InputProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => f.write_str("value is missing"),
            Self::Unrecognized(value) => write!(f, "{value:?} is not an accepted value"),
        }
    }
}

/// The only failure an estimate can produce.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("invalid input for {field}: {problem}")]
    InvalidInput {
        field: InputField,
        problem: InputProblem,
    },
}

impl EstimateError {
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::InvalidInput { field, .. } => *field,
        }
    }
}

pub(crate) fn parse_trait<V: TraitValue>(
    raw: Option<&str>,
    field: InputField,
) -> Result<V, EstimateError> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Err(EstimateError::InvalidInput {
            field,
            problem: InputProblem::Missing,
        });
    };
    raw.parse::<V>().map_err(|err| EstimateError::InvalidInput {
        field,
        problem: InputProblem::Unrecognized(err.value),
    })
}

/// One parent's validated selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentTraits {
    pub eye: EyeColor,
    pub hair: HairColor,
    pub skin: SkinTone,
    /// Subject to the height fallback policy when absent or implausible.
    #[serde(default)]
    pub height_cm: Option<i32>,
}

/// A height as a caller may submit it: a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeightValue {
    Number(f64),
    Text(String),
}

impl HeightValue {
    #[must_use]
    pub fn centimeters(&self) -> Option<i32> {
        match self {
            Self::Number(value) => truncate_f64_to_i32(*value),
            Self::Text(text) => parse_height_text(text),
        }
    }
}

/// One parent's unvalidated selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentSelection {
    #[serde(default)]
    pub eye: Option<String>,
    #[serde(default)]
    pub hair: Option<String>,
    #[serde(default)]
    pub skin: Option<String>,
    #[serde(default)]
    pub height_cm: Option<HeightValue>,
}

/// Unvalidated estimate request, shaped the way a form or JSON caller submits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitRequest {
    #[serde(default)]
    pub mother: ParentSelection,
    #[serde(default)]
    pub father: ParentSelection,
    #[serde(default)]
    pub child_is_male: Option<bool>,
}

impl TraitRequest {
    /// Validate every field, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] naming the first missing or
    /// unrecognized categorical field, or a missing child sex.
    pub fn validate(&self) -> Result<(ParentTraits, ParentTraits, ChildSex), EstimateError> {
        let (m, f) = (&self.mother, &self.father);
        let mother_eye = parse_trait(m.eye.as_deref(), InputField::MotherEye)?;
        let father_eye = parse_trait(f.eye.as_deref(), InputField::FatherEye)?;
        let mother_hair = parse_trait(m.hair.as_deref(), InputField::MotherHair)?;
        let father_hair = parse_trait(f.hair.as_deref(), InputField::FatherHair)?;
        let mother_skin = parse_trait(m.skin.as_deref(), InputField::MotherSkin)?;
        let father_skin = parse_trait(f.skin.as_deref(), InputField::FatherSkin)?;
        let sex = self
            .child_is_male
            .map(ChildSex::from_is_male)
            .ok_or(EstimateError::InvalidInput {
                field: InputField::ChildSex,
                problem: InputProblem::Missing,
            })?;

        let mother = ParentTraits {
            eye: mother_eye,
            hair: mother_hair,
            skin: mother_skin,
            height_cm: m.height_cm.as_ref().and_then(HeightValue::centimeters),
        };
        let father = ParentTraits {
            eye: father_eye,
            hair: father_hair,
            skin: father_skin,
            height_cm: f.height_cm.as_ref().and_then(HeightValue::centimeters),
        };
        Ok((mother, father, sex))
    }
}

/// The four independent sub-results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitResult {
    pub eye: Resolution,
    pub hair: Resolution,
    pub skin: Resolution,
    pub height: HeightEstimate,
}

impl TraitResult {
    #[must_use]
    pub const fn resolution(&self, category: TraitCategory) -> &Resolution {
        match category {
            TraitCategory::Eye => &self.eye,
            TraitCategory::Hair => &self.hair,
            TraitCategory::Skin => &self.skin,
        }
    }
}

#[must_use]
pub fn estimate_with(
    book: &RuleBook,
    mother: &ParentTraits,
    father: &ParentTraits,
    child_sex: ChildSex,
) -> TraitResult {
    let height = HeightInputs::new(mother.height_cm, father.height_cm, child_sex);
    TraitResult {
        eye: book.resolve_eye(mother.eye, father.eye),
        hair: book.resolve_hair(mother.hair, father.hair),
        skin: book.resolve_skin(mother.skin, father.skin),
        height: estimate_height(&height),
    }
}

/// Estimate against the embedded rule book.
#[must_use]
pub fn estimate_traits(
    mother: &ParentTraits,
    father: &ParentTraits,
    child_sex: ChildSex,
) -> TraitResult {
    estimate_with(RuleBook::default_book(), mother, father, child_sex)
}

/// Validate a raw request and estimate against the embedded rule book.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidInput`] if any categorical field or the
/// child sex is missing or unrecognized. No partial result is produced.
pub fn estimate_request(request: &TraitRequest) -> Result<TraitResult, EstimateError> {
    let (mother, father, sex) = request.validate()?;
    Ok(estimate_traits(&mother, &father, sex))
}
