//! # Case Number Generator
//!
//! Derives the next human-readable case number for a given type and year.
//!
//! The scheme is count-based, not a persisted monotonic counter: the
//! sequence component is re-derived from the current registry contents on
//! every call. A number shown before submission is therefore provisional;
//! the registry recomputes it from the committed list at actual insertion
//! time.

use crate::types::{Case, CaseType};

/// Width of the zero-padded sequence component.
const SEQUENCE_WIDTH: usize = 3;

/// Stateless case-number derivation.
pub struct CaseNumberGenerator;

impl CaseNumberGenerator {
    /// Next number for `case_type`, given the full unfiltered case list.
    ///
    /// Counts existing cases of the same type; the new case takes sequence
    /// `count + 1`, formatted as `{code}-{seq:03}/{year}`. Sequences past
    /// 999 widen naturally instead of truncating.
    #[must_use]
    pub fn next_number(case_type: CaseType, cases: &[Case], year: i32) -> String {
        let sequence = cases.iter().filter(|c| c.case_type == case_type).count() + 1;
        format!(
            "{}-{:0width$}/{}",
            case_type.code(),
            sequence,
            year,
            width = SEQUENCE_WIDTH
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CaseId, CaseStatus};
    use chrono::NaiveDate;

    fn make_case(id: u64, case_type: CaseType) -> Case {
        Case {
            id: CaseId(id),
            case_number: format!("{}-000/2025", case_type.code()),
            case_type,
            type_name: String::new(),
            plaintiff: "Иванов И.И.".to_string(),
            defendant: "Петров П.П.".to_string(),
            description: "тест".to_string(),
            status: CaseStatus::Received,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date"),
            notes: None,
        }
    }

    #[test]
    fn first_case_of_type_is_001() {
        assert_eq!(
            CaseNumberGenerator::next_number(CaseType::Civil, &[], 2025),
            "2-001/2025"
        );
    }

    #[test]
    fn sequence_counts_only_same_type() {
        let cases = vec![
            make_case(1, CaseType::Civil),
            make_case(2, CaseType::Criminal),
            make_case(3, CaseType::Civil),
        ];
        assert_eq!(
            CaseNumberGenerator::next_number(CaseType::Civil, &cases, 2025),
            "2-003/2025"
        );
        assert_eq!(
            CaseNumberGenerator::next_number(CaseType::Criminal, &cases, 2025),
            "1-002/2025"
        );
    }

    #[test]
    fn two_letter_code_formats_correctly() {
        assert_eq!(
            CaseNumberGenerator::next_number(CaseType::Administrative, &[], 2026),
            "2a-001/2026"
        );
    }

    #[test]
    fn sequence_widens_past_three_digits() {
        let cases: Vec<Case> = (0..1000).map(|i| make_case(i, CaseType::Civil)).collect();
        assert_eq!(
            CaseNumberGenerator::next_number(CaseType::Civil, &cases, 2025),
            "2-1001/2025"
        );
    }
}
