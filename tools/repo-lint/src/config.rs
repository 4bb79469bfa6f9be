use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Directories that are never offered to checkers.
pub const GLOBAL_SKIP_DIRS: &[&str] = &[".git", ".hg", ".svn", "node_modules", "target", "vendor"];

pub const MISSPELL_ENV: &str = "REPO_LINT_MISSPELL";
pub const LICHE_ENV: &str = "REPO_LINT_LICHE";
pub const TIMING_ENV: &str = "REPO_LINT_TIMING";

const DEFAULT_MISSPELL: &str = "misspell";
const DEFAULT_LICHE: &str = "liche";

/// Build a HashSet from the global skip dirs plus any extra entries.
pub fn skip_dirs(extra: &[&'static str]) -> HashSet<&'static str> {
    let mut set: HashSet<&'static str> = GLOBAL_SKIP_DIRS.iter().copied().collect();
    for e in extra {
        set.insert(e);
    }
    set
}

#[derive(Debug, Clone)]
pub struct LinterConfig {
    pub root_dir: PathBuf,
    pub misspell_program: String,
    pub liche_program: String,
    pub skip_dirs: HashSet<&'static str>,
}

impl LinterConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            misspell_program: program_from_env(MISSPELL_ENV, DEFAULT_MISSPELL),
            liche_program: program_from_env(LICHE_ENV, DEFAULT_LICHE),
            skip_dirs: skip_dirs(&[]),
        }
    }

    /// Discover repo root by walking up from cwd to find .git directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            if dir.join(".git").exists() {
                return Some(Self::from_root(&dir));
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    pub fn timing_enabled() -> bool {
        std::env::var_os(TIMING_ENV).is_some()
    }
}

fn program_from_env(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
