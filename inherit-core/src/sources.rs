//! Reference catalog shown alongside trait estimates.
use serde::Serialize;

use crate::constants::KEY_DISCLAIMER;
use crate::distribution::Citation;
use crate::i18n::I18nBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLanguage {
    English,
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub language: SourceLanguage,
}

const REFERENCES: &[Reference] = &[
    Reference {
        id: "nhgri",
        name: "NIH – National Human Genome Research Institute",
        url: "https://www.genome.gov",
        language: SourceLanguage::English,
    },
    Reference {
        id: "medlineplus",
        name: "MedlinePlus Genetics – U.S. National Library of Medicine",
        url: "https://medlineplus.gov/genetics",
        language: SourceLanguage::English,
    },
    Reference {
        id: "cdc",
        name: "CDC – Centers for Disease Control and Prevention",
        url: "https://www.cdc.gov",
        language: SourceLanguage::English,
    },
    Reference {
        id: "edinburgh",
        name: "University of Edinburgh – Genetic Trait Studies",
        url: "https://www.ed.ac.uk",
        language: SourceLanguage::English,
    },
    Reference {
        id: "johns_hopkins",
        name: "Johns Hopkins Medicine – Height Prediction Formula",
        url: "https://www.hopkinsmedicine.org",
        language: SourceLanguage::English,
    },
    Reference {
        id: "moh_sa",
        name: "وزارة الصحة السعودية – محتوى التوعية الصحية",
        url: "https://www.moh.gov.sa/HealthAwareness",
        language: SourceLanguage::Arabic,
    },
    Reference {
        id: "mayo_ar",
        name: "Mayo Clinic Arabic",
        url: "https://www.mayoclinic.org/ar",
        language: SourceLanguage::Arabic,
    },
];

#[must_use]
pub const fn references() -> &'static [Reference] {
    REFERENCES
}

pub fn references_in(language: SourceLanguage) -> impl Iterator<Item = &'static Reference> {
    REFERENCES.iter().filter(move |r| r.language == language)
}

#[must_use]
pub fn find_reference(id: &str) -> Option<&'static Reference> {
    REFERENCES.iter().find(|r| r.id == id)
}

/// Catalog entry backing a citation.
#[must_use]
pub fn reference_for(citation: Citation) -> Option<&'static Reference> {
    find_reference(citation.reference_id())
}

/// Educational disclaimer in the bundle's language.
#[must_use]
pub fn disclaimer(bundle: &I18nBundle) -> String {
    bundle.t(KEY_DISCLAIMER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::bundle;

    #[test]
    fn every_citation_has_a_reference() {
        for citation in [
            Citation::Nih,
            Citation::Edinburgh,
            Citation::Nhgri,
            Citation::JohnsHopkins,
        ] {
            let reference = reference_for(citation);
            assert!(reference.is_some(), "{citation:?} has no reference");
        }
        assert_eq!(
            reference_for(Citation::JohnsHopkins).map(|r| r.url),
            Some("https://www.hopkinsmedicine.org")
        );
    }

    #[test]
    fn catalog_is_split_by_language() {
        assert_eq!(references_in(SourceLanguage::English).count(), 5);
        assert_eq!(references_in(SourceLanguage::Arabic).count(), 2);
        assert_eq!(references().len(), 7);
        assert!(find_reference("unknown").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = references().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), references().len());
    }

    #[test]
    fn disclaimer_is_localized() {
        assert!(disclaimer(bundle("en")).contains("not medical diagnosis"));
        assert!(disclaimer(bundle("ar")).contains("ليست تشخيصاً طبياً"));
    }
}
