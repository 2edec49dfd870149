//! # Case Type Catalog
//!
//! Static mapping from a case-type code to its display label.
//!
//! The catalog is total and fixed at process start: six entries, one per
//! [`CaseType`]. It is consulted when stamping `type_name` on a new case,
//! when building selection menus, and when labelling per-type statistics.

use crate::types::{CaseType, RegistryError};
use std::str::FromStr;

/// The six display labels, in fixed catalog order (matching [`CaseType::ALL`]).
const LABELS: [&str; 6] = [
    "Уголовное дело",
    "Гражданское дело",
    "Административное дело",
    "Судебный контроль",
    "Исполнение приговоров",
    "Административные правонарушения",
];

/// Static case-type catalog. No mutation operations exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseTypeCatalog;

impl CaseTypeCatalog {
    /// Create the catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Display label for a typed case type. Total over the enum.
    #[must_use]
    pub fn label_for(&self, case_type: CaseType) -> &'static str {
        match case_type {
            CaseType::Criminal => LABELS[0],
            CaseType::Civil => LABELS[1],
            CaseType::Administrative => LABELS[2],
            CaseType::JudicialOversight => LABELS[3],
            CaseType::SentenceEnforcement => LABELS[4],
            CaseType::AdministrativeOffence => LABELS[5],
        }
    }

    /// Display label for a raw type code.
    ///
    /// Fails with [`RegistryError::UnknownTypeCode`] for codes outside the
    /// enumerated set.
    pub fn label_for_code(&self, code: &str) -> Result<&'static str, RegistryError> {
        let case_type = CaseType::from_str(code)?;
        Ok(self.label_for(case_type))
    }

    /// All `(type, label)` pairs in fixed catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (CaseType, &'static str)> {
        CaseType::ALL.into_iter().zip(LABELS)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_entries() {
        let catalog = CaseTypeCatalog::new();
        assert_eq!(catalog.entries().count(), 6);
    }

    #[test]
    fn label_for_matches_entries() {
        let catalog = CaseTypeCatalog::new();
        for (case_type, label) in catalog.entries() {
            assert_eq!(catalog.label_for(case_type), label);
        }
    }

    #[test]
    fn label_for_code_resolves_known_codes() {
        let catalog = CaseTypeCatalog::new();
        assert_eq!(
            catalog.label_for_code("2").expect("known code"),
            "Гражданское дело"
        );
        assert_eq!(
            catalog.label_for_code("2a").expect("known code"),
            "Административное дело"
        );
    }

    #[test]
    fn label_for_code_rejects_unknown_codes() {
        let catalog = CaseTypeCatalog::new();
        let err = catalog.label_for_code("6").expect_err("must fail");
        assert!(matches!(err, RegistryError::UnknownTypeCode(_)));
    }
}
