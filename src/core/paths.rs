use std::fmt;

/// The shell's private, ordered list of directories searched when
/// resolving an external command. Deliberately independent of the
/// `PATH` environment variable: it starts with a single entry, the
/// working directory captured at launch, and only an explicit
/// `setpath` replaces it.
#[derive(Debug, Clone)]
pub struct SearchPath {
    entries: Vec<String>,
}

#[derive(Debug)]
pub enum PathError {
    EmptyPathArgs,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::EmptyPathArgs => {
                write!(f, "setpath requires at least one directory")
            }
        }
    }
}

impl std::error::Error for PathError {}

impl SearchPath {
    /// Creates a list seeded with the given startup directory. The entry
    /// is a snapshot; a later `cd` does not move it.
    pub fn new(startup_dir: impl Into<String>) -> Self {
        Self {
            entries: vec![startup_dir.into()],
        }
    }

    /// Replaces the whole list. The previous entries are dropped only on
    /// success; an empty replacement is rejected and leaves the list
    /// untouched. Entries are not checked against the filesystem here;
    /// a bad directory simply never yields a match at search time.
    pub fn set(&mut self, entries: Vec<String>) -> Result<(), PathError> {
        if entries.is_empty() {
            return Err(PathError::EmptyPathArgs);
        }
        self.entries = entries;
        Ok(())
    }

    /// Current entries in search order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
