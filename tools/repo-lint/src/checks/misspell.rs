use crate::checks::{is_documentation_file, CheckerBase, FileChecker};
use crate::error::{LintError, Result};
use crate::repo_file::RepoFile;
use crate::runner::{CommandCall, CommandRunner};

/// Runs the `misspell` tool over documentation files.
pub struct MisspellChecker {
    base: CheckerBase,
    program: String,
    runner: Box<dyn CommandRunner>,
}

impl MisspellChecker {
    pub fn new(program: &str, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            base: CheckerBase::default(),
            program: program.to_string(),
            runner,
        }
    }

    fn command(&self) -> CommandCall {
        let mut args = vec!["-error".to_string(), "true".to_string()];
        args.extend(self.base.temp_paths());
        CommandCall::new(&self.program, args)
    }
}

impl FileChecker for MisspellChecker {
    fn id(&self) -> &'static str {
        "misspell"
    }

    fn name(&self) -> &'static str {
        "Misspellings"
    }

    fn base_mut(&mut self) -> &mut CheckerBase {
        &mut self.base
    }

    fn push_file(&mut self, mut file: RepoFile) {
        if is_documentation_file(&file.base_name) {
            file.require.local_copy = true;
            self.base.accept(file);
        }
    }

    fn check_files(&self) -> Result<Vec<String>> {
        if self.base.files().is_empty() {
            return Ok(Vec::new());
        }

        let result = self
            .runner
            .run(self.command())
            .map_err(|source| LintError::ToolLaunch {
                program: self.program.clone(),
                source,
            })?;
        if result.success() {
            return Ok(Vec::new());
        }

        let replacer = self.base.path_replacer();
        Ok(result
            .output
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| replacer.replace(line))
            .collect())
    }
}
