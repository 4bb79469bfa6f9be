use std::io;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCall {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandCall {
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
        }
    }
}

/// Exit status plus stdout followed by stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: i32,
    pub output: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Launches external analysis tools. `Err` means the process never ran;
/// a non-zero status is a normal result.
pub trait CommandRunner {
    fn run(&self, command: CommandCall) -> io::Result<CommandResult>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, command: CommandCall) -> io::Result<CommandResult> {
        let output = Command::new(&command.program).args(&command.args).output()?;
        Ok(CommandResult {
            status: output.status.code().unwrap_or(1),
            output: String::from_utf8_lossy(&output.stdout).to_string()
                + &String::from_utf8_lossy(&output.stderr),
        })
    }
}
