//! # Case Query Engine
//!
//! Free-text search and type-facet filtering over the registry's cases.
//!
//! Matching is case-insensitive substring matching over the case number
//! and both party names; there is no tokenization, ranking, or fuzziness.
//! Results preserve registry insertion order, and an empty result is a
//! valid, reportable state rather than an error.

use crate::types::{Case, CaseType};

/// Stateless read-only view over a case slice.
pub struct CaseQueryEngine;

impl CaseQueryEngine {
    /// Filter `cases` by search term and type facet.
    ///
    /// A case passes when the term is empty or matches (case-insensitively,
    /// as a substring) the case number, plaintiff, or defendant, AND the
    /// type filter is `None` ("all") or equals the case's type.
    #[must_use]
    pub fn search<'a>(
        cases: &'a [Case],
        term: &str,
        type_filter: Option<CaseType>,
    ) -> Vec<&'a Case> {
        let needle = term.to_lowercase();
        cases
            .iter()
            .filter(|case| Self::matches_term(case, &needle))
            .filter(|case| type_filter.is_none_or(|t| case.case_type == t))
            .collect()
    }

    /// Substring predicate over the searchable fields.
    ///
    /// `needle` must already be lowercased.
    fn matches_term(case: &Case, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        case.case_number.to_lowercase().contains(needle)
            || case.plaintiff.to_lowercase().contains(needle)
            || case.defendant.to_lowercase().contains(needle)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CaseRegistry;
    use crate::types::CreateCase;
    use chrono::NaiveDate;

    fn seeded_registry() -> CaseRegistry {
        let mut registry = CaseRegistry::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date");
        let seed = [
            (CaseType::Civil, "Иванов И.И.", "Петров П.П."),
            (CaseType::Criminal, "Прокуратура", "Сидоров С.С."),
            (CaseType::AdministrativeOffence, "ГИБДД", "Смирнов А.А."),
            (CaseType::Civil, "Козлов К.К.", "ООО \"Строй\""),
        ];
        for (case_type, plaintiff, defendant) in seed {
            registry
                .create_at(
                    CreateCase {
                        case_type,
                        plaintiff: plaintiff.to_string(),
                        defendant: defendant.to_string(),
                        description: "описание".to_string(),
                    },
                    date,
                )
                .expect("create");
        }
        registry
    }

    #[test]
    fn empty_term_and_all_filter_returns_everything_in_order() {
        let registry = seeded_registry();
        let results = CaseQueryEngine::search(registry.cases(), "", None);
        assert_eq!(results.len(), 4);
        let ids: Vec<u64> = results.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn term_matches_party_names_case_insensitively() {
        let registry = seeded_registry();
        let results = CaseQueryEngine::search(registry.cases(), "смирнов", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].defendant, "Смирнов А.А.");
    }

    #[test]
    fn term_matches_case_number_substring() {
        let registry = seeded_registry();
        let results = CaseQueryEngine::search(registry.cases(), "2-002", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].plaintiff, "Козлов К.К.");
    }

    #[test]
    fn type_facet_restricts_results() {
        let registry = seeded_registry();
        let results = CaseQueryEngine::search(registry.cases(), "", Some(CaseType::Civil));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|c| c.case_type == CaseType::Civil));
    }

    #[test]
    fn term_and_facet_combine_with_and() {
        let registry = seeded_registry();
        let results =
            CaseQueryEngine::search(registry.cases(), "Иванов", Some(CaseType::Criminal));
        assert!(results.is_empty());
    }

    #[test]
    fn no_match_is_an_empty_result_not_an_error() {
        let registry = seeded_registry();
        let results = CaseQueryEngine::search(registry.cases(), "Фёдоров", None);
        assert!(results.is_empty());
    }
}
