pub mod checks;
pub mod config;
pub mod error;
pub mod provider;
pub mod repo_file;
pub mod reporter;
pub mod runner;
pub mod walker;

use checks::{CheckResult, FileChecker};
use error::Result;
use provider::FileProvider;

/// One full pass: reset, offer every candidate, materialize what was
/// accepted, then check.
pub fn run_checker(checker: &mut dyn FileChecker, provider: &dyn FileProvider) -> CheckResult {
    checker.reset();
    for file in provider.candidates() {
        checker.push_file(file);
    }

    let outcome = materialize_accepted(checker, provider).and_then(|()| checker.check_files());
    let (warnings, error) = match outcome {
        Ok(warnings) => (warnings, None),
        Err(err) => (Vec::new(), Some(err.to_string())),
    };

    CheckResult {
        id: checker.id().to_string(),
        name: checker.name().to_string(),
        passed: warnings.is_empty() && error.is_none(),
        warnings,
        error,
    }
}

pub fn run_checkers(
    checkers: &mut [Box<dyn FileChecker>],
    provider: &dyn FileProvider,
) -> Vec<CheckResult> {
    checkers
        .iter_mut()
        .map(|checker| run_checker(checker.as_mut(), provider))
        .collect()
}

fn materialize_accepted(checker: &mut dyn FileChecker, provider: &dyn FileProvider) -> Result<()> {
    for file in checker.accepted_mut() {
        provider.materialize(file)?;
    }
    Ok(())
}

/// 0 when clean, 1 when any warning was produced, 2 when any checker failed.
pub fn exit_code(results: &[CheckResult]) -> i32 {
    if results.iter().any(|r| r.error.is_some()) {
        2
    } else if results.iter().any(|r| !r.passed) {
        1
    } else {
        0
    }
}
