/// Materialization a checker asks the file provider for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    pub local_copy: bool,
    pub contents: bool,
}

/// A repository file offered to checkers.
///
/// `orig_path` is the identity used in every warning. `temp_path` is where
/// the provider places a local copy and is unique within one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoFile {
    pub temp_path: String,
    pub orig_path: String,
    pub base_name: String,
    pub contents: Option<String>,
    pub require: Requirements,
}

impl RepoFile {
    pub fn new(temp_path: impl Into<String>, orig_path: impl Into<String>) -> Self {
        let orig_path = orig_path.into();
        let base_name = orig_path
            .rsplit('/')
            .next()
            .unwrap_or(orig_path.as_str())
            .to_string();
        Self {
            temp_path: temp_path.into(),
            orig_path,
            base_name,
            contents: None,
            require: Requirements::default(),
        }
    }

    /// Builder used by providers that already hold the text.
    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn contents(&self) -> &str {
        self.contents.as_deref().unwrap_or("")
    }
}
