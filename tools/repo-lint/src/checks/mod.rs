pub mod acronyms;
pub mod broken_links;
pub mod misspell;
pub mod sloppy_copyright;
pub mod unwanted_files;
pub mod var_typos;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::config::LinterConfig;
use crate::error::Result;
use crate::repo_file::RepoFile;
use crate::runner::RealCommandRunner;

static DOC_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:README|CONTRIBUTING|TODO)").unwrap());

/// README*, CONTRIBUTING* and TODO* base names, case-sensitive.
pub fn is_documentation_file(base_name: &str) -> bool {
    DOC_FILE.is_match(base_name)
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub id: String,
    pub name: String,
    pub passed: bool,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Accepted-file state shared by every checker.
#[derive(Debug, Default)]
pub struct CheckerBase {
    files: Vec<RepoFile>,
}

impl CheckerBase {
    pub fn reset(&mut self) {
        self.files.clear();
    }

    pub fn accept(&mut self, file: RepoFile) {
        self.files.push(file);
    }

    pub fn files(&self) -> &[RepoFile] {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut [RepoFile] {
        &mut self.files
    }

    pub fn temp_paths(&self) -> Vec<String> {
        self.files.iter().map(|f| f.temp_path.clone()).collect()
    }

    /// Built from the current file set; rebuild after any reset or push.
    pub fn path_replacer(&self) -> PathReplacer {
        PathReplacer::new(&self.files)
    }
}

/// Temp path -> original path table for the accepted files.
#[derive(Debug)]
pub struct PathReplacer {
    pattern: Option<Regex>,
    to_orig: HashMap<String, String>,
}

impl PathReplacer {
    pub fn new(files: &[RepoFile]) -> Self {
        let mut to_orig = HashMap::new();
        for f in files.iter().filter(|f| !f.temp_path.is_empty()) {
            to_orig.insert(f.temp_path.clone(), f.orig_path.clone());
        }

        // Longest first, so a temp path never shadows one it is a prefix of.
        let mut temps: Vec<&String> = to_orig.keys().collect();
        temps.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let pattern = if temps.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = temps.iter().map(|t| regex::escape(t)).collect();
            Some(Regex::new(&alternatives.join("|")).expect("escaped literals always compile"))
        };

        Self { pattern, to_orig }
    }

    /// Substitute every temp path occurring anywhere in `line`.
    pub fn replace(&self, line: &str) -> String {
        match &self.pattern {
            Some(re) => re
                .replace_all(line, |caps: &Captures| {
                    self.original_of(&caps[0])
                        .unwrap_or(&caps[0])
                        .to_string()
                })
                .into_owned(),
            None => line.to_string(),
        }
    }

    pub fn original_of(&self, temp_path: &str) -> Option<&str> {
        self.to_orig.get(temp_path).map(String::as_str)
    }
}

/// Common checker contract: reset, offer files, then check.
pub trait FileChecker {
    /// Short identifier used on the command line.
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn base_mut(&mut self) -> &mut CheckerBase;

    fn reset(&mut self) {
        self.base_mut().reset();
    }

    /// Set requirement flags before accepting; the default accepts everything.
    fn push_file(&mut self, file: RepoFile) {
        self.base_mut().accept(file);
    }

    fn accepted_mut(&mut self) -> &mut [RepoFile] {
        self.base_mut().files_mut()
    }

    /// Warnings reference original paths only.
    fn check_files(&self) -> Result<Vec<String>>;
}

/// The fixed checker set, in report order.
pub fn all_checkers(config: &LinterConfig) -> Vec<Box<dyn FileChecker>> {
    vec![
        Box::new(misspell::MisspellChecker::new(
            &config.misspell_program,
            Box::new(RealCommandRunner),
        )),
        Box::new(broken_links::BrokenLinkChecker::new(
            &config.liche_program,
            Box::new(RealCommandRunner),
        )),
        Box::new(unwanted_files::UnwantedFileChecker::new()),
        Box::new(sloppy_copyright::SloppyCopyrightChecker::new()),
        Box::new(acronyms::AcronymChecker::new()),
        Box::new(var_typos::VarTypoChecker::new()),
    ]
}
