use super::{Command, CommandError, Signal};

/// Ends the session. Cleanup happens in the REPL driver on the way out,
/// not here; extra arguments are ignored without comment.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String]) -> Result<Signal, CommandError> {
        Ok(Signal::Terminate)
    }
}
