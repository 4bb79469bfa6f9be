use std::fs;
use std::io;
use std::path::Path;

use repo_lint::checks::acronyms::AcronymChecker;
use repo_lint::checks::misspell::MisspellChecker;
use repo_lint::checks::sloppy_copyright::SloppyCopyrightChecker;
use repo_lint::checks::unwanted_files::UnwantedFileChecker;
use repo_lint::checks::var_typos::VarTypoChecker;
use repo_lint::checks::{self, FileChecker};
use repo_lint::config::LinterConfig;
use repo_lint::error::{LintError, Result};
use repo_lint::provider::{FileProvider, LocalProvider};
use repo_lint::repo_file::RepoFile;
use repo_lint::runner::{CommandCall, CommandResult, CommandRunner};
use repo_lint::{exit_code, run_checker, run_checkers};

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Serves in-memory files; `None` contents fail to materialize.
struct MemoryProvider {
    files: Vec<(&'static str, Option<&'static str>)>,
}

impl FileProvider for MemoryProvider {
    fn candidates(&self) -> Vec<RepoFile> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (orig, _))| RepoFile::new(format!("/mem/{i}"), *orig))
            .collect()
    }

    fn materialize(&self, file: &mut RepoFile) -> Result<()> {
        if !file.require.contents {
            return Ok(());
        }
        let (_, contents) = self
            .files
            .iter()
            .find(|(orig, _)| *orig == file.orig_path)
            .unwrap();
        match contents {
            Some(text) => {
                file.contents = Some(text.to_string());
                Ok(())
            }
            None => Err(LintError::Materialize {
                path: file.orig_path.clone().into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }),
        }
    }
}

/// Reports one finding per argument that exists on disk.
struct ExistsRunner;

impl CommandRunner for ExistsRunner {
    fn run(&self, command: CommandCall) -> io::Result<CommandResult> {
        let output: Vec<String> = command
            .args
            .iter()
            .filter(|arg| Path::new(arg.as_str()).is_file())
            .map(|arg| format!("{arg}:1:0: \"teh\" is a misspelling of \"the\""))
            .collect();
        Ok(CommandResult {
            status: if output.is_empty() { 0 } else { 2 },
            output: output.join("\n"),
        })
    }
}

#[test]
fn reset_then_check_is_empty_for_every_checker() {
    let config = LinterConfig::from_root(Path::new("/nonexistent"));
    let mut all = checks::all_checkers(&config);
    assert_eq!(all.len(), 6);
    for checker in all.iter_mut() {
        checker.reset();
        checker.reset();
        assert!(
            checker.check_files().unwrap().is_empty(),
            "{} should be empty",
            checker.id()
        );
    }
}

#[test]
fn run_checker_resets_state_between_passes() {
    let provider = MemoryProvider {
        files: vec![("README.md", Some("the sql docs"))],
    };
    let mut checker = AcronymChecker::new();

    let first = run_checker(&mut checker, &provider);
    let second = run_checker(&mut checker, &provider);

    assert_eq!(first.warnings, vec!["README.md:1: replace sql with SQL".to_string()]);
    assert_eq!(second.warnings, first.warnings);
}

#[test]
fn materialize_failure_is_isolated_to_one_checker() {
    let provider = MemoryProvider {
        files: vec![("README.md", None), ("notes.txt~", Some(""))],
    };
    let mut checkers: Vec<Box<dyn FileChecker>> = vec![
        Box::new(AcronymChecker::new()),
        Box::new(UnwantedFileChecker::new()),
    ];

    let results = run_checkers(&mut checkers, &provider);

    assert_eq!(results[0].id, "acronyms");
    assert!(!results[0].passed);
    assert!(results[0].error.as_deref().unwrap().contains("README.md"));
    assert_eq!(
        results[1].warnings,
        vec!["remove Emacs backup file: notes.txt~".to_string()]
    );
    assert_eq!(exit_code(&results), 2);
}

#[test]
fn local_provider_walks_checkout_and_loads_contents() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_file(&root.join("README.md"), "Build with gnu make.\nSet $PAHT first.\n");
    write_file(&root.join("LICENSE"), "Copyright (c) year, fullname\n");
    write_file(&root.join("docs/.DS_STORE"), "");
    write_file(&root.join(".git/config"), "[core]\n");
    write_file(&root.join("node_modules/pkg/README.md"), "sql\n");

    let config = LinterConfig::from_root(root);
    let provider = LocalProvider::new(&config).unwrap();
    let mut checkers: Vec<Box<dyn FileChecker>> = vec![
        Box::new(UnwantedFileChecker::new()),
        Box::new(SloppyCopyrightChecker::new()),
        Box::new(AcronymChecker::new()),
        Box::new(VarTypoChecker::new()),
    ];

    let results = run_checkers(&mut checkers, &provider);
    let warnings: Vec<&str> = results
        .iter()
        .flat_map(|r| r.warnings.iter().map(String::as_str))
        .collect();

    assert_eq!(
        warnings,
        vec![
            "remove Mac OS sys file file: docs/.DS_STORE",
            "LICENSE: license contains sloppy copyright",
            "README.md:1: replace gnu with GNU",
            "README.md:2: $PAHT could be a misspelling of PATH",
        ]
    );
    assert_eq!(exit_code(&results), 1);
}

#[test]
fn local_provider_copies_files_for_external_tools() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_file(&root.join("docs/TODO.md"), "teh end\n");
    write_file(&root.join("src/main.rs"), "fn main() {}\n");

    let config = LinterConfig::from_root(root);
    let provider = LocalProvider::new(&config).unwrap();
    let mut checker = MisspellChecker::new("misspell", Box::new(ExistsRunner));

    let result = run_checker(&mut checker, &provider);

    assert_eq!(
        result.warnings,
        vec!["docs/TODO.md:1:0: \"teh\" is a misspelling of \"the\"".to_string()]
    );
    assert!(provider.scratch_dir().join("0-TODO.md").is_file());
}

#[test]
fn local_provider_rejects_missing_root() {
    let temp = tempfile::tempdir().unwrap();
    let config = LinterConfig::from_root(&temp.path().join("missing"));
    assert!(matches!(
        LocalProvider::new(&config),
        Err(LintError::Walk { .. })
    ));
}
