use regex::Regex;

use crate::checks::{CheckerBase, FileChecker};
use crate::error::Result;

/// Editor and OS leftovers that should not be committed.
pub struct UnwantedFileChecker {
    base: CheckerBase,
    patterns: Vec<(&'static str, Regex)>,
}

impl UnwantedFileChecker {
    pub fn new() -> Self {
        let table: [(&'static str, &str); 6] = [
            // foo.txt.swp
            ("Vim swap", r"^.*\.swp$"),
            // #foo.txt#
            ("Emacs autosave", r"^#.*#$"),
            // foo.txt~
            ("Emacs backup", r"^.*~$"),
            // .#foo.txt
            ("Emacs lock file", r"^\.#.*$"),
            ("Mac OS sys file", r"^\.DS_STORE$"),
            ("Windows sys file", r"^Thumbs\.db$"),
        ];
        let patterns = table
            .into_iter()
            .map(|(kind, pat)| (kind, Regex::new(pat).expect("static unwanted-file pattern")))
            .collect();
        Self {
            base: CheckerBase::default(),
            patterns,
        }
    }
}

impl Default for UnwantedFileChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileChecker for UnwantedFileChecker {
    fn id(&self) -> &'static str {
        "unwanted-files"
    }

    fn name(&self) -> &'static str {
        "Unwanted files"
    }

    fn base_mut(&mut self) -> &mut CheckerBase {
        &mut self.base
    }

    fn check_files(&self) -> Result<Vec<String>> {
        let mut warnings = Vec::new();
        for f in self.base.files() {
            for (kind, pat) in &self.patterns {
                if pat.is_match(&f.base_name) {
                    warnings.push(format!("remove {} file: {}", kind, f.orig_path));
                }
            }
        }
        Ok(warnings)
    }
}
