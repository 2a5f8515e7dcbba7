use crate::core::commands::Signal;
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<Signal, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<Signal, ShellError> {
        // Blank lines are a no-op
        if line.trim().is_empty() {
            return Ok(Signal::Continue);
        }

        // Whitespace tokenization, nothing fancier: no quoting, no
        // escapes, no expansion.
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let command_name = tokens[0];
        let command_args: Vec<String> = tokens[1..].iter().map(|&s| s.to_string()).collect();

        let signal = self.executor.execute(command_name, &command_args)?;

        // cd moves the process-wide working directory; refresh the prompt
        self.current_dir = std::env::current_dir()?.to_string_lossy().to_string();

        Ok(signal)
    }
}
