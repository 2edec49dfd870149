//! # Case Registry
//!
//! The single source of truth for case records.
//!
//! The registry owns an insertion-ordered collection of [`Case`] records
//! and exposes the only mutation paths that exist: `create`, `update`
//! (status and notes only), and `delete`. The read-only views in
//! [`crate::query`] and [`crate::stats`] are recomputed from the current
//! contents on every call.
//!
//! ## Identity
//!
//! Ids come from a monotonically increasing counter and are never reused.
//! Case numbers come from [`CaseNumberGenerator`] and are derived from the
//! committed list at the moment of insertion, so the count-based sequence
//! invariant holds as long as mutations are serialized (a single writer,
//! or the registry behind one lock).

use crate::catalog::CaseTypeCatalog;
use crate::number::CaseNumberGenerator;
use crate::types::{Case, CaseId, CasePatch, CaseStatus, CaseType, CreateCase, RegistryError};
use chrono::{Datelike, Local, NaiveDate};

/// Ordered collection of case records with exclusive mutation rights.
#[derive(Debug, Default)]
pub struct CaseRegistry {
    /// Cases in insertion order; the default listing order.
    cases: Vec<Case>,
    /// Next id to allocate. Monotonic, never reused.
    next_id: u64,
    catalog: CaseTypeCatalog,
}

impl CaseRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            next_id: 1,
            catalog: CaseTypeCatalog::new(),
        }
    }

    /// Register a new case dated today (local calendar date).
    ///
    /// This is the only creation path. On success the case enters the
    /// collection with `status = Received`, a freshly allocated id, and a
    /// case number computed from the committed list at this moment.
    pub fn create(&mut self, input: CreateCase) -> Result<Case, RegistryError> {
        self.create_at(input, Local::now().date_naive())
    }

    /// Clock-injected variant of [`create`](Self::create).
    ///
    /// Used by tests and by startup seeding; behaves identically except the
    /// registration date is supplied by the caller.
    pub fn create_at(&mut self, input: CreateCase, date: NaiveDate) -> Result<Case, RegistryError> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            return Err(RegistryError::MissingFields(missing));
        }

        let case = Case {
            id: self.allocate_id(),
            case_number: CaseNumberGenerator::next_number(input.case_type, &self.cases, date.year()),
            case_type: input.case_type,
            type_name: self.catalog.label_for(input.case_type).to_string(),
            plaintiff: input.plaintiff,
            defendant: input.defendant,
            description: input.description,
            status: CaseStatus::Received,
            date,
            notes: None,
        };
        self.cases.push(case.clone());
        Ok(case)
    }

    /// Apply a patch to an existing case.
    ///
    /// Only `status` and `notes` can change; every other field is immutable
    /// after creation. Returns the updated case.
    pub fn update(&mut self, id: CaseId, patch: CasePatch) -> Result<Case, RegistryError> {
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        if let Some(status) = patch.status {
            case.status = status;
        }
        if let Some(notes) = patch.notes {
            case.notes = Some(notes);
        }
        Ok(case.clone())
    }

    /// Remove a case irrevocably. No soft-delete, no undo.
    pub fn delete(&mut self, id: CaseId) -> Result<(), RegistryError> {
        let position = self
            .cases
            .iter()
            .position(|c| c.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        self.cases.remove(position);
        Ok(())
    }

    /// Look up a case by id.
    pub fn get(&self, id: CaseId) -> Result<&Case, RegistryError> {
        self.cases
            .iter()
            .find(|c| c.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    /// All cases in insertion order, as a defensive copy.
    #[must_use]
    pub fn list(&self) -> Vec<Case> {
        self.cases.clone()
    }

    /// Borrow the current contents for the read-only views.
    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Number of cases currently registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the registry holds no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Provisional next case number for a live form preview.
    ///
    /// Non-binding: the committed number is recomputed at create time and
    /// can differ if another case of the same type lands first.
    #[must_use]
    pub fn preview_number(&self, case_type: CaseType) -> String {
        CaseNumberGenerator::next_number(case_type, &self.cases, Local::now().year())
    }

    fn allocate_id(&mut self) -> CaseId {
        let id = CaseId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

// =============================================================================
// TESTS
// =============================================================================
