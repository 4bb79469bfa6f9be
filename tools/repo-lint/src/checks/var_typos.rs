use std::collections::HashMap;

use regex::Regex;

use crate::checks::{is_documentation_file, CheckerBase, FileChecker};
use crate::error::Result;
use crate::repo_file::RepoFile;

const TYPOS: &[(&str, &str)] = &[
    ("PAHT", "PATH"),
    ("HOEM", "HOME"),
    ("GOPAHT", "GOPATH"),
    ("JAAV_HOME", "JAVA_HOME"),
    ("JAVA_HOEM", "JAVA_HOME"),
    ("JAVE_HOME", "JAVA_HOME"),
    ("CLASSPAHT", "CLASSPATH"),
    ("CLASPATH", "CLASSPATH"),
];

/// Catches misspelled environment variables such as `$GOPAHT`.
pub struct VarTypoChecker {
    base: CheckerBase,
    vars: Regex,
    corrections: HashMap<String, &'static str>,
}

impl VarTypoChecker {
    pub fn new() -> Self {
        let mut corrections = HashMap::new();
        let mut parts = Vec::new();
        for &(typo, corrected) in TYPOS {
            let name = regex::escape(typo);
            // ASCII word boundary, so `$PAHTé` still ends at `T`.
            parts.push(format!(r"\${}(?-u:\b)", name));
            corrections.insert(format!("${}", typo), corrected);
            parts.push(format!(r"\$\{{{}\}}", name));
            corrections.insert(format!("${{{}}}", typo), corrected);
        }
        Self {
            base: CheckerBase::default(),
            vars: Regex::new(&parts.join("|")).expect("static variable typo pattern"),
            corrections,
        }
    }
}

impl Default for VarTypoChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileChecker for VarTypoChecker {
    fn id(&self) -> &'static str {
        "var-typos"
    }

    fn name(&self) -> &'static str {
        "Variable typos"
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
            for (i, line) in f.contents().lines().enumerate() {
                for m in self.vars.find_iter(line) {
                    let Some(correction) = self.corrections.get(m.as_str()) else {
                        continue;
                    };
                    warnings.push(format!(
                        "{}:{}: {} could be a misspelling of {}",
                        f.orig_path,
                        i + 1,
                        m.as_str(),
                        correction
                    ));
                }
            }
        }
        Ok(warnings)
    }
}
