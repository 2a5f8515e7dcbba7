use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    CreationFailed(String),
    Other(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::CreationFailed(msg) => {
                write!(f, "could not create process: {}", msg)
            }
            ProcessError::Other(msg) => write!(f, "process error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
