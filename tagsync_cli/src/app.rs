//! Runs one reconciliation from parsed arguments

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::{CliResult, ErrorContext};
use colored::*;
use std::path::PathBuf;
use tagsync_core::{Plan, Reconciler, TagOperation, TagStore, UuidSource, check_target};
use uuid::Uuid;

/// What happened (or would happen) to the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub plan: Plan,
    /// Applied operations, or the planned ones for a dry run
    pub operations: Vec<TagOperation>,
    pub uuid: Option<Uuid>,
    pub dry_run: bool,
}

/// Reconcile using the programs named in `config`
pub fn run(cli: &Cli, config: &AppConfig) -> CliResult<Report> {
    let store = config.tools.tag_store();
    let generator = config.tools.uuid_source();
    run_with(cli, &store, &generator)
}

/// Reconcile using the given collaborators
pub fn run_with(cli: &Cli, store: &dyn TagStore, generator: &dyn UuidSource) -> CliResult<Report> {
    let path = cli.target()?;
    let explicit = cli.explicit_uuid()?;
    let with_path = |e: tagsync_core::Error| {
        crate::error::CliError::from(e).with_context("file", &path.display().to_string())
    };

    check_target(path).map_err(with_path)?;
    let reconciler = Reconciler::new(store, generator);

    if cli.dry_run {
        let plan = reconciler.plan(path, explicit).map_err(with_path)?;
        return Ok(Report {
            path: path.to_path_buf(),
            operations: plan.operations(),
            uuid: plan.target(),
            plan,
            dry_run: true,
        });
    }

    let outcome = reconciler.reconcile(path, explicit).map_err(with_path)?;
    Ok(Report {
        path: path.to_path_buf(),
        plan: outcome.plan,
        operations: outcome.applied,
        uuid: outcome.uuid,
        dry_run: false,
    })
}

/// Print the UUID on stdout and a summary on stderr
pub fn print_report(report: &Report) {
    if report.dry_run {
        eprintln!(
            "{} {}: {}",
            "Dry run".bold().cyan(),
            report.path.display(),
            report.plan
        );
        for operation in &report.operations {
            println!("{operation}");
        }
        return;
    }

    if report.operations.is_empty() {
        eprintln!("{} {}", "✓".green(), report.plan);
    } else {
        for operation in &report.operations {
            eprintln!("{} {operation}", "✓".green());
        }
    }

    if let Some(uuid) = report.uuid {
        println!("{uuid}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::error::ExitCode;
    use tagsync_test_utils::{MockTagStore, MockUuidSource, UUID_A, UUID_C, doi, uuid};
    use tempfile::NamedTempFile;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tagsync").chain(args.iter().copied()))
    }

    #[test]
    fn test_run_reconciles_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let store = MockTagStore::new().with_tags(path, &[UUID_A]);
        let generator = MockUuidSource::failing();

        let report = run_with(&cli(&[path]), &store, &generator).unwrap();

        assert!(!report.dry_run);
        assert_eq!(report.uuid, Some(uuid(UUID_A)));
        assert_eq!(report.operations, vec![TagOperation::Add(doi(UUID_A))]);
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let store = MockTagStore::new();
        let generator = MockUuidSource::new([uuid(UUID_C)]);

        let report = run_with(&cli(&["--dry-run", path]), &store, &generator).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.plan, Plan::GenerateAndAddBoth);
        assert!(report.operations.is_empty());
        assert!(store.mutations().is_empty());
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn test_missing_file_reports_filesystem_error() {
        let store = MockTagStore::new();
        let generator = MockUuidSource::failing();

        let error = run_with(&cli(&["/no/such/file.pdf"]), &store, &generator).unwrap_err();

        assert_eq!(error.exit_code(), ExitCode::FilesystemError);
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_invalid_uuid_rejected_before_reading_tags() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let store = MockTagStore::new();
        let generator = MockUuidSource::failing();

        let error = run_with(&cli(&["-u", "abc", path]), &store, &generator).unwrap_err();

        assert_eq!(error.exit_code(), ExitCode::Misuse);
        assert!(store.calls().is_empty());
    }
}
