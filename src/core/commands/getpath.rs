use super::{warn_ignored_args, Command, CommandError, Signal};
use crate::core::paths::SearchPath;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct GetPathCommand {
    search_path: Arc<Mutex<SearchPath>>,
    quiet: bool,
}

impl GetPathCommand {
    pub fn new(search_path: Arc<Mutex<SearchPath>>, quiet: bool) -> Self {
        Self { search_path, quiet }
    }
}

impl Command for GetPathCommand {
    fn execute(&self, args: &[String]) -> Result<Signal, CommandError> {
        warn_ignored_args(self.quiet, "getpath", args);

        let paths = self.search_path.lock().map_err(|_| {
            CommandError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "search path lock poisoned",
            ))
        })?;

        // One entry per line, in search order; an empty list prints nothing.
        for entry in paths.entries() {
            println!("{}", entry);
        }
        Ok(Signal::Continue)
    }
}
