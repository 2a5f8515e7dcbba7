use rustyline::{config::Configurer, DefaultEditor};
use std::env;

mod executor;

use crate::{
    core::commands::{CommandExecutor, Signal},
    error::ShellError,
    flags::Flags,
    style::OutputStyle,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) current_dir: String,
    pub(crate) flags: Flags,
    pub(crate) style: OutputStyle,
    pub(crate) executor: CommandExecutor,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;
        editor.set_auto_add_history(true);

        let current_dir = env::current_dir()?.to_string_lossy().to_string();
        let executor = CommandExecutor::new(&flags)?;

        Ok(Shell {
            editor,
            current_dir,
            flags,
            style: OutputStyle::new(),
            executor,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.flags.is_set("quiet") {
            println!("{}", self.style.banner("~~~ conch ~~~"));
            println!("{}", self.style.info("Enter 'help' to list the built-in commands."));
        }

        loop {
            let prompt = format!("{} > ", self.current_dir);
            let input = self.editor.readline(&prompt);
            if self.handle_input(input) == Signal::Terminate {
                break;
            }
        }

        if !self.flags.is_set("quiet") {
            println!("{}", self.style.banner("~~~ so long ~~~"));
        }
        Ok(())
    }

    /// One loop iteration's worth of input. Command errors are reported
    /// here; nothing short of `exit` or end-of-input ends the session.
    pub(crate) fn handle_input(
        &mut self,
        input: Result<String, rustyline::error::ReadlineError>,
    ) -> Signal {
        match input {
            Ok(line) => match self.execute_command(&line) {
                Ok(signal) => signal,
                Err(e) => {
                    eprintln!("{}", self.style.error(&e.to_string()));
                    Signal::Continue
                }
            },
            Err(rustyline::error::ReadlineError::Interrupted) => Signal::Continue,
            // EOF is an exit request
            Err(rustyline::error::ReadlineError::Eof) => Signal::Terminate,
            Err(e) => {
                eprintln!("{}", self.style.error(&format!("Error: {}", e)));
                Signal::Continue
            }
        }
    }
}
