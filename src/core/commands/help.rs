use super::{warn_ignored_args, Command, CommandError, Signal};
use crate::style::OutputStyle;

#[derive(Clone)]
pub struct HelpCommand {
    quiet: bool,
    style: OutputStyle,
}

impl HelpCommand {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            style: OutputStyle::new(),
        }
    }

    fn print_entry(&self, usage: &str, description: &str) {
        println!(
            "  {:<28} {}",
            self.style.command_name(usage),
            self.style.info(description)
        );
    }
}

impl Command for HelpCommand {
    fn execute(&self, args: &[String]) -> Result<Signal, CommandError> {
        warn_ignored_args(self.quiet, "help", args);

        println!("{}", self.style.info("The following commands are available:"));
        self.print_entry("exit", "end the session");
        self.print_entry("pwd", "print the current working directory");
        self.print_entry("cd [dir]", "change directory (default: home)");
        self.print_entry("setpath <dir> [dir...]", "replace the executable search path");
        self.print_entry("getpath", "print the search path, in order");
        self.print_entry("ls", "list the current directory");
        self.print_entry("help", "show this page");
        println!(
            "{}",
            self.style
                .info("Anything else is run as an external program found on the search path.")
        );
        Ok(Signal::Continue)
    }
}
