//! Inherit Trait Estimator
//!
//! Platform-agnostic core that estimates a child's probable eye color, hair
//! color, skin tone and height from the parents' traits. Categorical traits are
//! looked up in authored rule tables; height uses the mid-parental heuristic.
//! The crate performs no I/O and keeps no state between calls.

pub mod audit;
pub mod constants;
pub mod distribution;
pub mod estimate;
pub mod height;
pub mod i18n;
pub mod numbers;
pub mod phenotype;
pub mod render;
pub mod rules;
pub mod sources;

// Re-export commonly used types
pub use audit::{AuditReport, CategoryAudit, audit_rule_book};
pub use distribution::{Citation, Distribution, Outcome, OutcomeShare, Resolution, Share};
pub use estimate::{
    EstimateError, HeightValue, InputField, InputProblem, Parent, ParentSelection, ParentTraits,
    TraitRequest, TraitResult, estimate_request, estimate_traits, estimate_with,
};
pub use height::{HeightEstimate, HeightInputs, estimate_height, parse_height_text};
pub use i18n::{I18nBundle, LocaleMeta, bundle, is_supported, locales};
pub use phenotype::{
    ChildSex, EyeColor, HairColor, SkinTone, TraitCategory, TraitValue, UnknownTraitValue,
};
pub use render::{RenderedTraits, describe};
pub use rules::{PairKey, RuleBook, RuleBookError, RuleEntry, RuleTable};
pub use sources::{Reference, SourceLanguage, disclaimer, references};

/// Trait for abstracting where rule tables come from.
/// Callers with their own storage should provide this.
pub trait RuleLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a validated rule book
    ///
    /// # Errors
    ///
    /// Returns an error if the rule book cannot be read or fails validation.
    fn load_rule_book(&self) -> Result<RuleBook, Self::Error>;
}

/// Loader for the rule tables embedded in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRules;

impl RuleLoader for EmbeddedRules {
    type Error = std::convert::Infallible;

    fn load_rule_book(&self) -> Result<RuleBook, Self::Error> {
        Ok(RuleBook::default_book().clone())
    }
}

/// Loader reading a rule book document from disk.
#[derive(Debug, Clone)]
pub struct FileRules {
    path: std::path::PathBuf,
}

/// Errors raised while reading a rule book file
#[derive(Debug, thiserror::Error)]
pub enum FileRulesError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid rule book {path}: {source}")]
    Invalid { path: String, source: RuleBookError },
}

impl FileRules {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RuleLoader for FileRules {
    type Error = FileRulesError;

    fn load_rule_book(&self) -> Result<RuleBook, Self::Error> {
        let path = self.path.display().to_string();
        let json = std::fs::read_to_string(&self.path).map_err(|source| FileRulesError::Io {
            path: path.clone(),
            source,
        })?;
        RuleBook::from_json(&json).map_err(|source| FileRulesError::Invalid { path, source })
    }
}

/// Estimator bound to one immutable rule book.
///
/// Holds no mutable state, so a single instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct TraitEstimator {
    book: RuleBook,
}

impl Default for TraitEstimator {
    fn default() -> Self {
        Self::new(RuleBook::default_book().clone())
    }
}

impl TraitEstimator {
    #[must_use]
    pub const fn new(book: RuleBook) -> Self {
        Self { book }
    }

    /// Create an estimator from the provided loader
    ///
    /// # Errors
    ///
    /// Returns the loader's error if the rule book cannot be loaded.
    pub fn from_loader<L: RuleLoader>(loader: &L) -> Result<Self, L::Error> {
        loader.load_rule_book().map(Self::new)
    }

    #[must_use]
    pub const fn rule_book(&self) -> &RuleBook {
        &self.book
    }

    #[must_use]
    pub fn estimate(
        &self,
        mother: &ParentTraits,
        father: &ParentTraits,
        child_sex: ChildSex,
    ) -> TraitResult {
        estimate_with(&self.book, mother, father, child_sex)
    }

    /// Validate and estimate a raw request
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] naming the first invalid field.
    pub fn estimate_request(&self, request: &TraitRequest) -> Result<TraitResult, EstimateError> {
        let (mother, father, sex) = request.validate()?;
        Ok(self.estimate(&mother, &father, sex))
    }

    #[must_use]
    pub fn audit(&self) -> AuditReport {
        audit_rule_book(&self.book)
    }
}
