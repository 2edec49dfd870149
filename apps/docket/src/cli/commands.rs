//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::AppError;
use crate::api;
use chrono::NaiveDate;
use docket_core::{CasePatch, CaseRegistry, CaseStatus, CaseType, CaseTypeCatalog, CreateCase};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// =============================================================================
// SEED FILE
// =============================================================================

/// Maximum seed file size (1 MB).
///
/// A seed file holds a handful of demo filings; anything larger is a
/// mistake, not a registry.
const MAX_SEED_FILE_SIZE: u64 = 1024 * 1024;

/// One `[[case]]` entry of a seed file.
#[derive(Debug, Deserialize)]
struct SeedCase {
    /// Case-type code (`1`, `2`, `2a`, `3`, `4`, `5`).
    #[serde(rename = "type")]
    type_code: String,
    plaintiff: String,
    defendant: String,
    description: String,
    /// Optional registration date (`YYYY-MM-DD`). Undated entries are
    /// stamped with today, dated ones keep demo data reproducible.
    #[serde(default)]
    date: Option<NaiveDate>,
    /// Optional status override; new cases default to `received`.
    #[serde(default)]
    status: Option<CaseStatus>,
    /// Optional clerk notes.
    #[serde(default)]
    notes: Option<String>,
}

/// Top-level seed file structure.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default, rename = "case")]
    cases: Vec<SeedCase>,
}

/// Validate the seed file path.
///
/// Canonicalizes the path to resolve symlinks and "..", ensures it exists
/// and is a regular file.
fn validate_seed_path(path: &Path) -> Result<PathBuf, AppError> {
    let canonical = path
        .canonicalize()
        .map_err(|e| AppError::Io(format!("Invalid seed path '{}': {}", path.display(), e)))?;

    if !canonical.is_file() {
        return Err(AppError::Io(format!(
            "Seed path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Register parsed seed entries into a fresh registry.
///
/// Entries go through the ordinary `create`/`update` paths only; a dated
/// entry uses the clock-injected creation variant so its case number and
/// date come out the same on every start.
fn build_seed_registry(seed: SeedFile) -> Result<CaseRegistry, AppError> {
    let mut registry = CaseRegistry::new();
    for entry in seed.cases {
        let input = CreateCase {
            case_type: CaseType::from_str(&entry.type_code)?,
            plaintiff: entry.plaintiff,
            defendant: entry.defendant,
            description: entry.description,
        };
        let case = match entry.date {
            Some(date) => registry.create_at(input, date)?,
            None => registry.create(input)?,
        };

        if entry.status.is_some() || entry.notes.is_some() {
            registry.update(
                case.id,
                CasePatch {
                    status: entry.status,
                    notes: entry.notes,
                },
            )?;
        }

        tracing::info!(case_number = %case.case_number, "seeded case");
    }

    Ok(registry)
}

/// Load a seed file and register its cases into a fresh registry.
fn load_seed(path: &Path) -> Result<CaseRegistry, AppError> {
    let validated = validate_seed_path(path)?;

    let metadata = std::fs::metadata(&validated)
        .map_err(|e| AppError::Io(format!("Cannot read seed metadata: {}", e)))?;
    if metadata.len() > MAX_SEED_FILE_SIZE {
        return Err(AppError::Seed(format!(
            "Seed file size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_SEED_FILE_SIZE
        )));
    }

    let contents = std::fs::read_to_string(&validated)
        .map_err(|e| AppError::Io(format!("Read seed file: {}", e)))?;
    let seed: SeedFile =
        toml::from_str(&contents).map_err(|e| AppError::Seed(format!("Parse seed file: {}", e)))?;

    build_seed_registry(seed)
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(host: &str, port: u16, seed: Option<&Path>) -> Result<(), AppError> {
    let registry = match seed {
        Some(path) => {
            let registry = load_seed(path)?;
            println!("Seeded {} case(s) from {}", registry.len(), path.display());
            registry
        }
        None => CaseRegistry::new(),
    };

    println!("Docket Court Case Registry Starting...");
    println!();
    println!("Configuration:");
    println!("  Host: {}", host);
    println!("  Port: {}", port);
    println!();
    println!("Endpoints:");
    println!("  GET    /health            - Health check");
    println!("  GET    /types             - Case-type catalog");
    println!("  GET    /cases             - List/search cases");
    println!("  GET    /cases/next-number - Preview next case number");
    println!("  GET    /cases/{{id}}        - Single case");
    println!("  POST   /cases             - Register a case");
    println!("  PATCH  /cases/{{id}}        - Update status/notes (admin)");
    println!("  DELETE /cases/{{id}}        - Remove a case (admin)");
    println!("  GET    /stats             - Statistics (admin)");
    println!("  POST   /login             - Open admin session");
    println!("  POST   /logout            - Close admin session");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, registry).await
}

// =============================================================================
// TYPES COMMAND
// =============================================================================

/// Print the case-type catalog.
pub fn cmd_types(json_mode: bool) -> Result<(), AppError> {
    let catalog = CaseTypeCatalog::new();

    if json_mode {
        let entries: Vec<serde_json::Value> = catalog
            .entries()
            .map(|(case_type, label)| {
                serde_json::json!({
                    "code": case_type.code(),
                    "label": label,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Docket Case Types");
    println!("=================");
    for (case_type, label) in catalog.entries() {
        println!("  {:<3} {}", case_type.code(), label);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use docket_core::RegistryError;

    fn parse(toml_text: &str) -> SeedFile {
        toml::from_str(toml_text).expect("parse seed")
    }

    #[test]
    fn dated_seed_entries_register_in_order_with_stable_numbers() {
        let seed = parse(
            r#"
            [[case]]
            type = "2"
            plaintiff = "Иванов И.И."
            defendant = "Петров П.П."
            description = "Взыскание задолженности"
            date = "2025-01-15"

            [[case]]
            type = "2"
            plaintiff = "Козлов К.К."
            defendant = "ООО \"Строй\""
            description = "Спор о защите прав потребителей"
            date = "2025-01-20"
        "#,
        );

        let registry = build_seed_registry(seed).expect("seed");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.cases()[0].case_number, "2-001/2025");
        assert_eq!(registry.cases()[1].case_number, "2-002/2025");
        assert_eq!(registry.cases()[0].date.to_string(), "2025-01-15");
        assert_eq!(registry.cases()[0].status, CaseStatus::Received);
    }

    #[test]
    fn seed_status_and_notes_are_applied_through_update() {
        let seed = parse(
            r#"
            [[case]]
            type = "5"
            plaintiff = "ГИБДД"
            defendant = "Смирнов А.А."
            description = "Управление в состоянии опьянения"
            date = "2025-01-15"
            status = "completed"
            notes = "передано в архив"
        "#,
        );

        let registry = build_seed_registry(seed).expect("seed");
        let case = &registry.cases()[0];
        assert_eq!(case.status, CaseStatus::Completed);
        assert_eq!(case.notes.as_deref(), Some("передано в архив"));
    }

    #[test]
    fn undated_seed_entry_is_stamped_with_today() {
        let seed = parse(
            r#"
            [[case]]
            type = "1"
            plaintiff = "Прокуратура"
            defendant = "Сидоров С.С."
            description = "Мошенничество"
        "#,
        );

        let registry = build_seed_registry(seed).expect("seed");
        assert_eq!(
            registry.cases()[0].date,
            chrono::Local::now().date_naive()
        );
    }

    #[test]
    fn seed_with_unknown_type_code_is_rejected() {
        let seed = parse(
            r#"
            [[case]]
            type = "9"
            plaintiff = "Иванов И.И."
            defendant = "Петров П.П."
            description = "описание"
        "#,
        );

        let err = build_seed_registry(seed).expect_err("must fail");
        assert!(matches!(
            err,
            AppError::Registry(RegistryError::UnknownTypeCode(code)) if code == "9"
        ));
    }

    #[test]
    fn seed_with_empty_required_field_is_rejected() {
        let seed = parse(
            r#"
            [[case]]
            type = "2"
            plaintiff = ""
            defendant = "Петров П.П."
            description = "описание"
        "#,
        );

        let err = build_seed_registry(seed).expect_err("must fail");
        assert!(matches!(
            err,
            AppError::Registry(RegistryError::MissingFields(fields)) if fields == vec!["plaintiff"]
        ));
    }

    #[test]
    fn load_seed_reads_a_file_end_to_end() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.toml");
        std::fs::write(
            &path,
            "[[case]]\n\
             type = \"1\"\n\
             plaintiff = \"Прокуратура\"\n\
             defendant = \"Сидоров С.С.\"\n\
             description = \"Мошенничество\"\n\
             date = \"2025-02-01\"\n",
        )
        .expect("write");

        let registry = load_seed(&path).expect("load");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.cases()[0].case_number, "1-001/2025");
    }

    #[test]
    fn load_seed_rejects_missing_file() {
        let err = load_seed(Path::new("/nonexistent/seed.toml")).expect_err("must fail");
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn load_seed_rejects_oversized_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("big.toml");
        let oversized = usize::try_from(MAX_SEED_FILE_SIZE).expect("fits") + 1;
        std::fs::write(&path, vec![b'#'; oversized]).expect("write");

        let err = load_seed(&path).expect_err("must fail");
        assert!(matches!(err, AppError::Seed(_)));
    }

    #[test]
    fn load_seed_rejects_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[[case\ntype = ").expect("write");

        let err = load_seed(&path).expect_err("must fail");
        assert!(matches!(err, AppError::Seed(_)));
    }
}
