//! # Case Statistics Aggregator
//!
//! Total count and per-status/per-type breakdowns with percentages.
//!
//! Every bucket of the two fixed partitions is always present, including
//! zero-count buckets, so the dashboard never has to guess at missing
//! keys. Percentages use integer arithmetic only (the workspace denies
//! floats): each bucket is independently rounded half-up, so the percent
//! column is not required to sum to exactly 100. With an empty registry
//! every percentage is defined as 0; there is no division by zero.

use crate::catalog::CaseTypeCatalog;
use crate::types::{Case, CaseStatus};
use serde::{Deserialize, Serialize};

/// One status bucket of the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBucket {
    /// The lifecycle stage this bucket counts.
    pub status: CaseStatus,
    /// Localized label for display.
    pub label: String,
    /// Number of cases in this stage.
    pub count: usize,
    /// Integer-rounded share of the total, 0..=100.
    pub percent: u8,
}

/// One case-type bucket of the aggregate, keyed by display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBucket {
    /// Catalog display label (the key of this bucket).
    pub label: String,
    /// Number of cases of this type.
    pub count: usize,
    /// Integer-rounded share of the total, 0..=100.
    pub percent: u8,
}

/// Aggregate statistics over the registry contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStats {
    /// Total number of cases.
    pub total: usize,
    /// One bucket per status, in lifecycle order. Counts sum to `total`.
    pub by_status: Vec<StatusBucket>,
    /// One bucket per catalog entry, in catalog order. Counts sum to `total`.
    pub by_type: Vec<TypeBucket>,
}

/// Stateless read-only view computing [`CaseStats`].
pub struct CaseStatsAggregator;

impl CaseStatsAggregator {
    /// Aggregate the given cases against the full catalog.
    #[must_use]
    pub fn aggregate(cases: &[Case], catalog: &CaseTypeCatalog) -> CaseStats {
        let total = cases.len();

        let by_status = CaseStatus::ALL
            .into_iter()
            .map(|status| {
                let count = cases.iter().filter(|c| c.status == status).count();
                StatusBucket {
                    status,
                    label: status.label().to_string(),
                    count,
                    percent: percent_of(count, total),
                }
            })
            .collect();

        let by_type = catalog
            .entries()
            .map(|(case_type, label)| {
                let count = cases.iter().filter(|c| c.case_type == case_type).count();
                TypeBucket {
                    label: label.to_string(),
                    count,
                    percent: percent_of(count, total),
                }
            })
            .collect();

        CaseStats {
            total,
            by_status,
            by_type,
        }
    }
}

/// `round(count / total * 100)` in integer arithmetic; 0 when `total == 0`.
fn percent_of(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // Round half up: floor((100 * count + total / 2) / total) done without
    // the parity pitfall by scaling numerator and denominator by two.
    let scaled = (count * 200 + total) / (total * 2);
    u8::try_from(scaled).unwrap_or(100)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CaseRegistry;
    use crate::types::{CasePatch, CaseType, CreateCase};
    use chrono::NaiveDate;

    fn registry_with(entries: &[(CaseType, CaseStatus)]) -> CaseRegistry {
        let mut registry = CaseRegistry::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date");
        for (case_type, status) in entries {
            let case = registry
                .create_at(
                    CreateCase {
                        case_type: *case_type,
                        plaintiff: "Иванов И.И.".to_string(),
                        defendant: "Петров П.П.".to_string(),
                        description: "описание".to_string(),
                    },
                    date,
                )
                .expect("create");
            registry
                .update(
                    case.id,
                    CasePatch {
                        status: Some(*status),
                        notes: None,
                    },
                )
                .expect("update");
        }
        registry
    }

    #[test]
    fn empty_registry_yields_zero_totals_and_percentages() {
        let stats = CaseStatsAggregator::aggregate(&[], &CaseTypeCatalog::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_status.len(), 3);
        assert_eq!(stats.by_type.len(), 6);
        assert!(stats.by_status.iter().all(|b| b.count == 0 && b.percent == 0));
        assert!(stats.by_type.iter().all(|b| b.count == 0 && b.percent == 0));
    }

    #[test]
    fn status_buckets_partition_the_total() {
        let registry = registry_with(&[
            (CaseType::Civil, CaseStatus::InProgress),
            (CaseType::Criminal, CaseStatus::InProgress),
            (CaseType::AdministrativeOffence, CaseStatus::Received),
            (CaseType::Civil, CaseStatus::Completed),
        ]);
        let stats = CaseStatsAggregator::aggregate(registry.cases(), &CaseTypeCatalog::new());

        assert_eq!(stats.total, 4);
        let sum: usize = stats.by_status.iter().map(|b| b.count).sum();
        assert_eq!(sum, stats.total);

        let in_progress = stats
            .by_status
            .iter()
            .find(|b| b.status == CaseStatus::InProgress)
            .expect("bucket");
        assert_eq!(in_progress.count, 2);
        assert_eq!(in_progress.percent, 50);
        assert_eq!(in_progress.label, "В работе");
    }

    #[test]
    fn type_buckets_are_keyed_by_display_label() {
        let registry = registry_with(&[
            (CaseType::Civil, CaseStatus::Received),
            (CaseType::Civil, CaseStatus::Received),
            (CaseType::Criminal, CaseStatus::Received),
        ]);
        let stats = CaseStatsAggregator::aggregate(registry.cases(), &CaseTypeCatalog::new());

        let sum: usize = stats.by_type.iter().map(|b| b.count).sum();
        assert_eq!(sum, stats.total);

        let civil = stats
            .by_type
            .iter()
            .find(|b| b.label == "Гражданское дело")
            .expect("bucket");
        assert_eq!(civil.count, 2);
        assert_eq!(civil.percent, 67);
    }

    #[test]
    fn percentages_are_rounded_per_bucket() {
        // Three thirds round to 33 each; the column sums to 99, not 100.
        let registry = registry_with(&[
            (CaseType::Civil, CaseStatus::Received),
            (CaseType::Criminal, CaseStatus::InProgress),
            (CaseType::JudicialOversight, CaseStatus::Completed),
        ]);
        let stats = CaseStatsAggregator::aggregate(registry.cases(), &CaseTypeCatalog::new());
        assert!(stats.by_status.iter().all(|b| b.percent == 33));
    }

    #[test]
    fn percent_of_rounds_half_up() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(1, 200), 1);
        assert_eq!(percent_of(0, 5), 0);
        assert_eq!(percent_of(5, 5), 100);
        assert_eq!(percent_of(0, 0), 0);
    }
}
