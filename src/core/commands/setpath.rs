use super::{Command, CommandError, Signal};
use crate::core::paths::SearchPath;
use std::sync::{Arc, Mutex};

/// Replaces the whole search-path list. Directories are taken as given;
/// nothing checks they exist until an external command is resolved.
#[derive(Clone)]
pub struct SetPathCommand {
    search_path: Arc<Mutex<SearchPath>>,
}

impl SetPathCommand {
    pub fn new(search_path: Arc<Mutex<SearchPath>>) -> Self {
        Self { search_path }
    }
}

impl Command for SetPathCommand {
    fn execute(&self, args: &[String]) -> Result<Signal, CommandError> {
        let mut paths = self
            .search_path
            .lock()
            .map_err(|_| CommandError::IoError(poisoned_lock()))?;

        paths.set(args.to_vec())?;
        Ok(Signal::Continue)
    }
}

fn poisoned_lock() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, "search path lock poisoned")
}
