//! Exhaustive audit of a rule book over every ordered parent pair.
use serde::{Deserialize, Serialize};

use crate::constants::SHARE_TOTAL_PER_MILLE;
use crate::phenotype::{TraitCategory, TraitValue};
use crate::rules::{RuleBook, RuleTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAudit {
    pub category: TraitCategory,
    pub pairs_checked: usize,
    pub authored: usize,
    pub insufficient: usize,
    /// Ordered pairs whose reverse resolves differently.
    pub asymmetric: Vec<String>,
    /// Authored pairs whose shares do not total 1000‰.
    pub bad_totals: Vec<String>,
    /// Unordered pairs with no authored rule.
    pub uncovered: Vec<String>,
}

impl CategoryAudit {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.asymmetric.is_empty() && self.bad_totals.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub categories: Vec<CategoryAudit>,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.categories.iter().all(CategoryAudit::passed)
    }

    #[must_use]
    pub fn category(&self, category: TraitCategory) -> Option<&CategoryAudit> {
        self.categories.iter().find(|c| c.category == category)
    }
}

fn audit_table<V: TraitValue>(table: &RuleTable<V>) -> CategoryAudit {
    let mut audit = CategoryAudit {
        category: V::CATEGORY,
        pairs_checked: 0,
        authored: 0,
        insufficient: 0,
        asymmetric: Vec::new(),
        bad_totals: Vec::new(),
        uncovered: Vec::new(),
    };
    for (i, &a) in V::ALL.iter().enumerate() {
        for &b in V::ALL {
            audit.pairs_checked += 1;
            let label = format!("{}+{}", a.key(), b.key());
            let forward = table.resolve(a, b);
            if forward != table.resolve(b, a) {
                audit.asymmetric.push(label.clone());
            }
            match forward.distribution() {
                Some(dist) => {
                    audit.authored += 1;
                    if dist.total_per_mille() != u32::from(SHARE_TOTAL_PER_MILLE) {
                        audit.bad_totals.push(label);
                    }
                }
                None => {
                    audit.insufficient += 1;
                    if V::ALL[..=i].contains(&b) {
                        audit.uncovered.push(label);
                    }
                }
            }
        }
    }
    if !audit.passed() {
        log::warn!(
            "{} table audit failed: {} asymmetric, {} bad totals",
            audit.category,
            audit.asymmetric.len(),
            audit.bad_totals.len()
        );
    }
    audit
}

#[must_use]
pub fn audit_rule_book(book: &RuleBook) -> AuditReport {
    AuditReport {
        categories: vec![
            audit_table(&book.eye),
            audit_table(&book.hair),
            audit_table(&book.skin),
        ],
    }
}
