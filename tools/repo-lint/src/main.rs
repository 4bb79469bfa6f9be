use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use repo_lint::checks::{self, FileChecker};
use repo_lint::config::LinterConfig;
use repo_lint::provider::LocalProvider;
use repo_lint::reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Lint a repository checkout for documentation and hygiene issues.
#[derive(Debug, Parser)]
#[command(name = "repo-lint", version)]
struct Cli {
    /// Repository root; discovered from the working directory by default.
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// Run only the named checker (repeatable).
    #[arg(long = "only", value_name = "CHECKER")]
    only: Vec<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    let code = run(&Cli::parse());
    process::exit(code);
}

// Returns the exit code; the scratch directory is removed when the
// provider drops at the end of this function.
fn run(cli: &Cli) -> i32 {
    let config = match &cli.root_dir {
        Some(dir) => LinterConfig::from_root(dir),
        None => match LinterConfig::discover() {
            Some(c) => c,
            None => {
                eprintln!("Error: Could not find repository root. Run from within a git repository or use --root-dir.");
                return 2;
            }
        },
    };

    let mut selected: Vec<Box<dyn FileChecker>> = checks::all_checkers(&config);
    if !cli.only.is_empty() {
        let known: Vec<&str> = selected.iter().map(|c| c.id()).collect();
        if let Some(unknown) = cli.only.iter().find(|id| !known.contains(&id.as_str())) {
            eprintln!("Error: unknown checker '{}'. Known checkers: {}", unknown, known.join(", "));
            return 2;
        }
        selected.retain(|c| cli.only.iter().any(|id| id == c.id()));
    }

    let provider = match LocalProvider::new(&config) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Error: {err}");
            return 2;
        }
    };

    let text = cli.format == Format::Text;
    if text {
        reporter::print_header();
    }

    let debug_timing = LinterConfig::timing_enabled();
    if debug_timing {
        eprintln!("  scratch dir: {}", provider.scratch_dir().display());
    }
    let mut results = Vec::new();
    for checker in selected.iter_mut() {
        let start = Instant::now();
        let result = repo_lint::run_checker(checker.as_mut(), &provider);
        if debug_timing {
            eprintln!("  [{:>6.0?}] {}", start.elapsed(), result.name);
        }
        if text {
            reporter::print_result(&result);
        }
        results.push(result);
    }

    if text {
        reporter::print_summary(&results);
    } else {
        match reporter::to_json(&results) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: {err}");
                return 2;
            }
        }
    }

    repo_lint::exit_code(&results)
}
