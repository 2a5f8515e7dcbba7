use super::{warn_ignored_args, Command, CommandError, Signal};
use std::env;
use std::path::Path;

/// Lists the working directory's entries, skipping dotfiles (and with
/// them `.` and `..`).
#[derive(Clone)]
pub struct LsCommand {
    quiet: bool,
}

impl LsCommand {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn visible_entries(dir: &Path) -> Result<Vec<String>, CommandError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with('.') {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

impl Command for LsCommand {
    fn execute(&self, args: &[String]) -> Result<Signal, CommandError> {
        warn_ignored_args(self.quiet, "ls", args);

        let cwd = env::current_dir()?;
        for name in Self::visible_entries(&cwd)? {
            println!("{}", name);
        }
        Ok(Signal::Continue)
    }
}
