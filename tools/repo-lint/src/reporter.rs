use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use crate::checks::CheckResult;
use crate::error::Result;

pub fn print_header() {
    println!(
        "{}",
        "\n=== Repository Lint ===\n".if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_result(result: &CheckResult) {
    if let Some(error) = &result.error {
        println!(
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            result.name,
            "error".if_supports_color(Stdout, |s| s.red()),
        );
        eprintln!(
            "  {}",
            error.if_supports_color(Stderr, |s| s.red())
        );
    } else if result.passed {
        println!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
            "clean".if_supports_color(Stdout, |s| s.green()),
        );
    } else {
        println!(
            "{} {}: {}",
            "\u{26a0}".if_supports_color(Stdout, |s| s.yellow()),
            result.name,
            format!("{} warning(s)", result.warnings.len())
                .if_supports_color(Stdout, |s| s.yellow()),
        );
        println!();
        for w in &result.warnings {
            println!("  {}", w.if_supports_color(Stdout, |s| s.dimmed()));
        }
        println!();
    }
}

pub fn print_summary(results: &[CheckResult]) -> bool {
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let warned = results.iter().filter(|r| !r.passed && r.error.is_none()).count();
    let total_warnings: usize = results.iter().map(|r| r.warnings.len()).sum();

    println!(
        "{}",
        "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold())
    );

    if failed == 0 && warned == 0 {
        println!(
            "{}",
            format!("\nAll {}/{} checks clean.\n", results.len(), results.len())
                .if_supports_color(Stdout, |s| s.green()),
        );
        return true;
    }

    let mut line = format!(
        "\n{}/{} check(s) reported {} warning(s)",
        warned,
        results.len(),
        total_warnings,
    );
    if failed > 0 {
        line.push_str(&format!(", {} could not run", failed));
    }
    line.push_str(".\n");
    println!("{}", line.if_supports_color(Stdout, |s| s.red()));
    false
}

pub fn to_json(results: &[CheckResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(passed: bool, warnings: &[&str], error: Option<&str>) -> CheckResult {
        CheckResult {
            id: "acronyms".to_string(),
            name: "Acronym case".to_string(),
            passed,
            warnings: warnings.iter().map(|w| w.to_string()).collect(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn all_clean_returns_true() {
        assert!(print_summary(&[result(true, &[], None), result(true, &[], None)]));
    }

    #[test]
    fn warnings_return_false() {
        assert!(!print_summary(&[result(false, &["README:1: replace sql with SQL"], None)]));
    }

    #[test]
    fn errors_return_false() {
        assert!(!print_summary(&[result(false, &[], Some("failed to launch `liche`"))]));
    }

    #[test]
    fn empty_results_returns_true() {
        assert!(print_summary(&[]));
    }

    #[test]
    fn json_omits_missing_error() {
        let json = to_json(&[result(true, &[], None)]).unwrap();
        assert!(json.contains("\"id\": \"acronyms\""));
        assert!(!json.contains("\"error\""));
    }
}
