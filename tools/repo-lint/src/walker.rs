use crate::error::{LintError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Recursively collect regular files under `root` as `/`-separated paths
/// relative to it, sorted, skipping the named directories.
pub fn collect_repo_files(root: &Path, skip_dirs: &HashSet<&str>) -> Result<Vec<String>> {
    let meta = fs::metadata(root).map_err(|source| LintError::Walk {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(LintError::Walk {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let mut results = Vec::new();
    collect_inner(root, root, skip_dirs, &mut results);
    results.sort();
    Ok(results)
}

fn collect_inner(root: &Path, dir: &Path, skip_dirs: &HashSet<&str>, results: &mut Vec<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            let skipped = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| skip_dirs.contains(name));
            if !skipped {
                collect_inner(root, &path, skip_dirs, results);
            }
        } else if file_type.is_file() {
            if let Ok(rel) = path.strip_prefix(root) {
                results.push(to_slash_path(rel));
            }
        }
    }
}

fn to_slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
