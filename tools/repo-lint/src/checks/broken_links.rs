use crate::checks::{is_documentation_file, CheckerBase, FileChecker, PathReplacer};
use crate::error::{LintError, Result};
use crate::repo_file::RepoFile;
use crate::runner::{CommandCall, CommandRunner};

/// Seconds the link checker waits per URL.
pub const LINK_TIMEOUT: &str = "30";

/// Release/download URLs, localhost, loopback and the example domain.
pub const EXCLUDED_URLS: &str = r"/release|/download|localhost|127\.[01]\.[01]\.[01]|example\.com";

/// Runs the `liche` link checker over documentation files.
pub struct BrokenLinkChecker {
    base: CheckerBase,
    program: String,
    runner: Box<dyn CommandRunner>,
}

impl BrokenLinkChecker {
    pub fn new(program: &str, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            base: CheckerBase::default(),
            program: program.to_string(),
            runner,
        }
    }

    fn command(&self) -> CommandCall {
        let mut args = vec![
            "-t".to_string(),
            LINK_TIMEOUT.to_string(),
            "-x".to_string(),
            EXCLUDED_URLS.to_string(),
        ];
        args.extend(self.base.temp_paths());
        CommandCall::new(&self.program, args)
    }
}

impl FileChecker for BrokenLinkChecker {
    fn id(&self) -> &'static str {
        "broken-links"
    }

    fn name(&self) -> &'static str {
        "Broken links"
    }

    fn base_mut(&mut self) -> &mut CheckerBase {
        &mut self.base
    }

    fn push_file(&mut self, mut file: RepoFile) {
        if is_documentation_file(&file.base_name) {
            file.require.local_copy = true;
            self.base.accept(file);
        }
    }

    fn check_files(&self) -> Result<Vec<String>> {
        if self.base.files().is_empty() {
            return Ok(Vec::new());
        }

        let result = self
            .runner
            .run(self.command())
            .map_err(|source| LintError::ToolLaunch {
                program: self.program.clone(),
                source,
            })?;
        if result.success() {
            return Ok(Vec::new());
        }

        Ok(parse_link_report(&result.output, &self.base.path_replacer()))
    }
}

/// Parse the checker's report: an unindented filename header, then
/// tab-indented results where an ERROR line is followed by its detail line.
pub fn parse_link_report(output: &str, replacer: &PathReplacer) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut filename = String::new();
    let mut lines = output.lines();

    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }
        if !line.starts_with('\t') {
            filename = replacer.replace(line);
            continue;
        }
        if !line.contains("ERROR") {
            continue;
        }

        let url = line.trim_start_matches(&['\t', ' ', 'E', 'R', 'O'][..]);
        let Some(detail) = lines.next().map(str::trim) else {
            break;
        };
        if is_ignored_detail(detail) {
            continue;
        }
        warnings.push(format!("{}: {}: {}", filename, url, detail));
    }

    warnings
}

/// Timeouts are flaky, and local file links are meaningless without a
/// real checkout.
fn is_ignored_detail(detail: &str) -> bool {
    detail == "Timeout"
        || detail.contains("no such file")
        || detail.contains("root directory is not specified")
}
