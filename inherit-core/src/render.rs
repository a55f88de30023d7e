//! Locale-specific display text for estimates.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{KEY_CITATION, KEY_HEIGHT, KEY_INSUFFICIENT_DATA, KEY_SEPARATOR, KEY_SHARE};
use crate::distribution::{Distribution, Outcome, Resolution};
use crate::estimate::TraitResult;
use crate::height::HeightEstimate;
use crate::i18n::I18nBundle;
use crate::phenotype::TraitCategory;

/// Display strings for the four results, in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTraits {
    pub lang: String,
    pub rtl: bool,
    pub eye: String,
    pub hair: String,
    pub skin: String,
    pub height: String,
}

#[must_use]
pub fn outcome_label(bundle: &I18nBundle, category: TraitCategory, outcome: Outcome) -> String {
    bundle.t(&format!("{}.{}", category.key(), outcome.key()))
}

fn citation_suffix(bundle: &I18nBundle, sources: &[&str]) -> String {
    if sources.is_empty() {
        return String::new();
    }
    let joined = sources.join(", ");
    let args = BTreeMap::from([("source", joined.as_str())]);
    bundle.tr(KEY_CITATION, Some(&args))
}

fn render_distribution(bundle: &I18nBundle, category: TraitCategory, dist: &Distribution) -> String {
    let separator = bundle.t(KEY_SEPARATOR);
    let parts: Vec<String> = dist
        .shares()
        .iter()
        .map(|share| {
            let label = outcome_label(bundle, category, share.outcome);
            let percent = share.share.to_string();
            let args = BTreeMap::from([("label", label.as_str()), ("percent", percent.as_str())]);
            bundle.tr(KEY_SHARE, Some(&args))
        })
        .collect();
    let sources: Vec<&str> = dist.citations().iter().map(|c| c.label()).collect();
    format!("{}{}", parts.join(separator.as_str()), citation_suffix(bundle, &sources))
}

#[must_use]
pub fn render_resolution(
    bundle: &I18nBundle,
    category: TraitCategory,
    resolution: &Resolution,
) -> String {
    match resolution {
        Resolution::Authored(dist) => render_distribution(bundle, category, dist),
        Resolution::InsufficientData => bundle.t(KEY_INSUFFICIENT_DATA),
    }
}

#[must_use]
pub fn render_height(bundle: &I18nBundle, height: &HeightEstimate) -> String {
    let expected = height.expected_cm.to_string();
    let low = height.low_cm.to_string();
    let high = height.high_cm.to_string();
    let args = BTreeMap::from([
        ("expected", expected.as_str()),
        ("low", low.as_str()),
        ("high", high.as_str()),
    ]);
    let body = bundle.tr(KEY_HEIGHT, Some(&args));
    format!("{body}{}", citation_suffix(bundle, &[height.citation.label()]))
}

#[must_use]
pub fn describe(result: &TraitResult, bundle: &I18nBundle) -> RenderedTraits {
    RenderedTraits {
        lang: bundle.lang().to_string(),
        rtl: bundle.is_rtl(),
        eye: render_resolution(bundle, TraitCategory::Eye, &result.eye),
        hair: render_resolution(bundle, TraitCategory::Hair, &result.hair),
        skin: render_resolution(bundle, TraitCategory::Skin, &result.skin),
        height: render_height(bundle, &result.height),
    }
}
