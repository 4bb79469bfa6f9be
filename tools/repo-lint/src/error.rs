use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("failed to launch `{program}`: {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to materialize {path}: {source}")]
    Materialize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_launch_names_the_program() {
        let err = LintError::ToolLaunch {
            program: "misspell".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to launch `misspell`: not found");
    }

    #[test]
    fn materialize_keeps_io_source() {
        let err = LintError::Materialize {
            path: PathBuf::from("docs/README.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("docs/README.md"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
