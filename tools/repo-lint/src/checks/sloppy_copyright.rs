use regex::Regex;

use crate::checks::{CheckerBase, FileChecker};
use crate::error::Result;
use crate::repo_file::RepoFile;

const ROOT_LICENSE_FILES: &[&str] = &["LICENSE", "LICENSE.md", "LICENSE.txt"];

/// Flags license templates whose "year, fullname" placeholders were never filled.
pub struct SloppyCopyrightChecker {
    base: CheckerBase,
    copyright: Regex,
}

impl SloppyCopyrightChecker {
    pub fn new() -> Self {
        let alternatives = [
            r"copyright year,?\s*fullname",
            r"copyright \(c\)\s*year,?\s*fullname",
            r"copyright ©\s*year,?\s*fullname",
        ];
        let pattern = format!("(?i){}", alternatives.join("|"));
        Self {
            base: CheckerBase::default(),
            copyright: Regex::new(&pattern).expect("static copyright pattern"),
        }
    }
}

impl Default for SloppyCopyrightChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileChecker for SloppyCopyrightChecker {
    fn id(&self) -> &'static str {
        "sloppy-copyright"
    }

    fn name(&self) -> &'static str {
        "Sloppy copyright"
    }

    fn base_mut(&mut self) -> &mut CheckerBase {
        &mut self.base
    }

    // Root-level license files only.
    fn push_file(&mut self, mut file: RepoFile) {
        if ROOT_LICENSE_FILES.contains(&file.orig_path.as_str()) {
            file.require.contents = true;
            self.base.accept(file);
        }
    }

    fn check_files(&self) -> Result<Vec<String>> {
        Ok(self
            .base
            .files()
            .iter()
            .filter(|f| self.copyright.is_match(f.contents()))
            .map(|f| format!("{}: license contains sloppy copyright", f.orig_path))
            .collect())
    }
}
