use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::LinterConfig;
use crate::error::{LintError, Result};
use crate::repo_file::RepoFile;
use crate::walker;

/// Source of candidate files and of their materialization.
pub trait FileProvider {
    /// Fresh records, in a stable order, for one checker pass.
    fn candidates(&self) -> Vec<RepoFile>;

    /// Satisfy the requirement flags a checker set on `file`.
    fn materialize(&self, file: &mut RepoFile) -> Result<()>;
}

/// Serves files from a local checkout, copying them into a scratch
/// directory when a checker needs a local copy.
pub struct LocalProvider {
    root: PathBuf,
    files: Vec<String>,
    scratch: TempDir,
}

impl LocalProvider {
    pub fn new(config: &LinterConfig) -> Result<Self> {
        let files = walker::collect_repo_files(&config.root_dir, &config.skip_dirs)?;
        let scratch = tempfile::Builder::new().prefix("repo-lint-").tempdir()?;
        Ok(Self {
            root: config.root_dir.clone(),
            files,
            scratch,
        })
    }

    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    fn temp_path(&self, index: usize, orig: &str) -> String {
        let base = orig.rsplit('/').next().unwrap_or(orig);
        self.scratch
            .path()
            .join(format!("{index}-{base}"))
            .to_string_lossy()
            .into_owned()
    }
}

impl FileProvider for LocalProvider {
    fn candidates(&self) -> Vec<RepoFile> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, orig)| RepoFile::new(self.temp_path(i, orig), orig.as_str()))
            .collect()
    }

    fn materialize(&self, file: &mut RepoFile) -> Result<()> {
        let source = self.root.join(&file.orig_path);
        let fail = |err: std::io::Error| LintError::Materialize {
            path: source.clone(),
            source: err,
        };

        if file.require.local_copy && !Path::new(&file.temp_path).exists() {
            fs::copy(&source, &file.temp_path).map_err(fail)?;
        }
        if file.require.contents && file.contents.is_none() {
            let bytes = fs::read(&source).map_err(fail)?;
            file.contents = Some(String::from_utf8_lossy(&bytes).into_owned());
        }
        Ok(())
    }
}
