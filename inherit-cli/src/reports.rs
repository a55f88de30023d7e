use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use inherit_core::sources::{SourceLanguage, references_in};
use inherit_core::{
    AuditReport, I18nBundle, RenderedTraits, Resolution, TraitCategory, TraitResult, disclaimer,
    references,
};

/// Everything a calling layer needs to show one estimate.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub result: TraitResult,
    pub rendered: RenderedTraits,
    pub disclaimer: String,
}

impl EstimateReport {
    pub fn new(result: TraitResult, bundle: &I18nBundle) -> Self {
        let rendered = inherit_core::describe(&result, bundle);
        Self {
            result,
            rendered,
            disclaimer: disclaimer(bundle),
        }
    }

    fn rows<'a>(&'a self, bundle: &I18nBundle) -> [(String, &'a str); 4] {
        [
            (bundle.t("category.eye"), self.rendered.eye.as_str()),
            (bundle.t("category.hair"), self.rendered.hair.as_str()),
            (bundle.t("category.skin"), self.rendered.skin.as_str()),
            (bundle.t("category.height"), self.rendered.height.as_str()),
        ]
    }
}

pub fn generate_json_report<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_estimate_console(
    out: &mut impl Write,
    report: &EstimateReport,
    bundle: &I18nBundle,
) -> Result<()> {
    let title = bundle.t("result.title");
    writeln!(out, "{}", title.bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(title.chars().count()).cyan())?;
    for (label, text) in report.rows(bundle) {
        let styled = if text == bundle.t("result.insufficient_data") {
            text.yellow()
        } else {
            text.normal()
        };
        writeln!(out, "{}: {styled}", label.bold())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", bundle.t("result.note").dimmed())?;
    writeln!(out, "⚠️  {}", report.disclaimer)?;
    Ok(())
}

pub fn generate_estimate_markdown(
    out: &mut impl Write,
    report: &EstimateReport,
    bundle: &I18nBundle,
) -> Result<()> {
    writeln!(out, "# {}\n", bundle.t("result.title"))?;
    for (label, text) in report.rows(bundle) {
        writeln!(out, "- **{label}**: {text}")?;
    }
    writeln!(out, "\n> {}", bundle.t("result.note"))?;
    writeln!(out, ">\n> {}", report.disclaimer)?;
    Ok(())
}

fn coverage_line(report: &AuditReport, category: TraitCategory) -> Option<String> {
    let audit = report.category(category)?;
    Some(format!(
        "{category}: {}/{} ordered pairs authored, {} insufficient",
        audit.authored, audit.pairs_checked, audit.insufficient
    ))
}

pub fn generate_audit_console(out: &mut impl Write, report: &AuditReport) -> Result<()> {
    writeln!(out, "{}", "📋 Rule Table Audit".bright_cyan().bold())?;
    writeln!(out, "{}", "===================".cyan())?;
    for audit in &report.categories {
        let status = if audit.passed() {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{status} {}", audit.category.to_string().bold())?;
        if let Some(line) = coverage_line(report, audit.category) {
            writeln!(out, "   {line}")?;
        }
        if !audit.uncovered.is_empty() {
            writeln!(out, "   Uncovered: {}", audit.uncovered.join(", ").yellow())?;
        }
        for pair in &audit.asymmetric {
            writeln!(out, "     • asymmetric {}", pair.red())?;
        }
        for pair in &audit.bad_totals {
            writeln!(out, "     • bad total {}", pair.red())?;
        }
    }
    Ok(())
}

pub fn generate_audit_markdown(out: &mut impl Write, report: &AuditReport) -> Result<()> {
    writeln!(out, "# Rule Table Audit\n")?;
    writeln!(
        out,
        "| Category | Authored | Insufficient | Asymmetric | Bad totals | Status |"
    )?;
    writeln!(out, "|---|---|---|---|---|---|")?;
    for audit in &report.categories {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            audit.category,
            audit.authored,
            audit.insufficient,
            audit.asymmetric.len(),
            audit.bad_totals.len(),
            if audit.passed() { "✅" } else { "❌" }
        )?;
    }
    Ok(())
}

pub fn generate_sources_console(out: &mut impl Write, bundle: &I18nBundle) -> Result<()> {
    writeln!(out, "{}", bundle.t("sources.title").bright_cyan().bold())?;
    for (heading, language) in [
        ("sources.english", SourceLanguage::English),
        ("sources.arabic", SourceLanguage::Arabic),
    ] {
        writeln!(out)?;
        writeln!(out, "{}", bundle.t(heading).bold())?;
        for reference in references_in(language) {
            writeln!(out, "  {:10} {} <{}>", reference.id, reference.name, reference.url)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "⚠️  {}", disclaimer(bundle))?;
    Ok(())
}

pub fn generate_sources_markdown(out: &mut impl Write, bundle: &I18nBundle) -> Result<()> {
    writeln!(out, "# {}\n", bundle.t("sources.title"))?;
    for reference in references() {
        writeln!(out, "- [{}]({})", reference.name, reference.url)?;
    }
    writeln!(out, "\n> {}", disclaimer(bundle))?;
    Ok(())
}

/// Number of categorical results without an authored rule.
pub fn insufficient_count(result: &TraitResult) -> usize {
    TraitCategory::ALL
        .iter()
        .filter(|&&c| matches!(result.resolution(c), Resolution::InsufficientData))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inherit_core::{
        ChildSex, EyeColor, HairColor, ParentTraits, RuleBook, SkinTone, audit_rule_book, bundle,
        estimate_traits,
    };

    fn sample_result() -> TraitResult {
        let mother = ParentTraits {
            eye: EyeColor::Brown,
            hair: HairColor::Red,
            skin: SkinTone::Medium,
            height_cm: Some(165),
        };
        let father = ParentTraits {
            eye: EyeColor::Blue,
            hair: HairColor::Black,
            skin: SkinTone::Medium,
            height_cm: Some(180),
        };
        estimate_traits(&mother, &father, ChildSex::Male)
    }

    #[test]
    fn markdown_lists_every_trait() {
        let report = EstimateReport::new(sample_result(), bundle("en"));
        let mut buffer = Vec::new();
        generate_estimate_markdown(&mut buffer, &report, bundle("en")).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# Predicted Traits"));
        assert!(text.contains("- **Eye Color**: Brown 50% — Green 37.5% — Blue 12.5%  (NIH)"));
        assert!(text.contains("- **Hair Color**: Insufficient data"));
        assert!(text.contains("- **Height**: 179 cm (expected)"));
    }

    #[test]
    fn json_report_carries_data_and_text() {
        let report = EstimateReport::new(sample_result(), bundle("ar"));
        let mut buffer = Vec::new();
        generate_json_report(&mut buffer, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["result"]["hair"]["status"], "insufficient_data");
        assert_eq!(value["rendered"]["hair"], "بيانات غير كافية");
        assert_eq!(value["rendered"]["rtl"], true);
    }

    #[test]
    fn console_report_includes_disclaimer() {
        let report = EstimateReport::new(sample_result(), bundle("en"));
        let mut buffer = Vec::new();
        generate_estimate_console(&mut buffer, &report, bundle("en")).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("not medical diagnosis"));
        assert!(text.contains("Skin Tone"));
    }

    #[test]
    fn audit_markdown_has_a_row_per_category() {
        let report = audit_rule_book(RuleBook::default_book());
        let mut buffer = Vec::new();
        generate_audit_markdown(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("| eye | 8 | 8 | 0 | 0 | ✅ |"));
        assert!(text.contains("| skin | 5 | 4 | 0 | 0 | ✅ |"));
    }

    #[test]
    fn sources_listing_groups_by_language() {
        let mut buffer = Vec::new();
        generate_sources_markdown(&mut buffer, bundle("en")).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("[Mayo Clinic Arabic](https://www.mayoclinic.org/ar)"));
        assert_eq!(text.matches("- [").count(), references().len());
    }

    #[test]
    fn counts_insufficient_results() {
        assert_eq!(insufficient_count(&sample_result()), 1);
    }
}
