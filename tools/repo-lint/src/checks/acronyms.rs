use std::collections::BTreeMap;

use regex::Regex;

use crate::checks::{is_documentation_file, CheckerBase, FileChecker};
use crate::error::Result;
use crate::repo_file::RepoFile;

const ACRONYMS: &[(&str, &str)] = &[
    ("gnu", "GNU"),
    ("sql", "SQL"),
    ("dsl", "DSL"),
    ("ansi", "ANSI"),
    ("bios", "BIOS"),
    ("cgi", "CGI"),
    ("ssa", "SSA"),
    ("dpi", "DPI"),
    ("gui", "GUI"),
    ("oop", "OOP"),
];

/// Suggests the canonical spelling of lowercase acronyms in documentation.
pub struct AcronymChecker {
    base: CheckerBase,
    acronym: Regex,
    canonical: BTreeMap<&'static str, &'static str>,
}

impl AcronymChecker {
    pub fn new() -> Self {
        let canonical: BTreeMap<&'static str, &'static str> = ACRONYMS.iter().copied().collect();
        // ASCII whitespace only; a non-breaking space does not delimit a word.
        let parts: Vec<String> = canonical
            .keys()
            .map(|from| format!(r"(?:^|(?-u:\s)){}(?:$|(?-u:\s))", regex::escape(from)))
            .collect();
        Self {
            base: CheckerBase::default(),
            acronym: Regex::new(&parts.join("|")).expect("static acronym pattern"),
            canonical,
        }
    }

    fn scan(&self, file: &RepoFile, warnings: &mut Vec<String>) {
        for (i, line) in file.contents().lines().enumerate() {
            for m in self.acronym.find_iter(line) {
                let word = m.as_str().trim();
                let Some(replacement) = self.canonical.get(word) else {
                    continue;
                };
                warnings.push(format!(
                    "{}:{}: replace {} with {}",
                    file.orig_path,
                    i + 1,
                    word,
                    replacement
                ));
            }
        }
    }
}

impl Default for AcronymChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileChecker for AcronymChecker {
    fn id(&self) -> &'static str {
        "acronyms"
    }

    fn name(&self) -> &'static str {
        "Acronym case"
    }

    fn base_mut(&mut self) -> &mut CheckerBase {
        &mut self.base
    }

    fn push_file(&mut self, mut file: RepoFile) {
        if is_documentation_file(&file.base_name) {
            file.require.contents = true;
            self.base.accept(file);
        }
    }

    fn check_files(&self) -> Result<Vec<String>> {
        let mut warnings = Vec::new();
        for f in self.base.files() {
            self.scan(f, &mut warnings);
        }
        Ok(warnings)
    }
}
