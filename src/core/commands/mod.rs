use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

mod cd;
mod exit;
mod getpath;
mod help;
mod ls;
mod pwd;
mod setpath;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use getpath::GetPathCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use pwd::PwdCommand;
pub use setpath::SetPathCommand;

use crate::core::paths::{PathError, SearchPath};
use crate::process::{ProcessError, ProcessExecutor};
use crate::style::OutputStyle;

#[derive(Debug)]
pub enum CommandError {
    DirectoryChangeFailed(String),
    PathError(PathError),
    ProcessError(ProcessError),
    IoError(std::io::Error),
    HomeDirNotFound,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::DirectoryChangeFailed(reason) => {
                write!(f, "could not change directory: {}", reason)
            }
            CommandError::PathError(err) => write!(f, "{}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::HomeDirNotFound => write!(f, "home directory not found"),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<PathError> for CommandError {
    fn from(err: PathError) -> Self {
        CommandError::PathError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// Whether the session keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Terminate,
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<Signal, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
    SetPath(SetPathCommand),
    GetPath(GetPathCommand),
    Ls(LsCommand),
    Help(HelpCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<Signal, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::Pwd(cmd) => cmd.execute(args),
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::SetPath(cmd) => cmd.execute(args),
            CommandType::GetPath(cmd) => cmd.execute(args),
            CommandType::Ls(cmd) => cmd.execute(args),
            CommandType::Help(cmd) => cmd.execute(args),
        }
    }
}

/// Routes one parsed line to a built-in or to the external launcher.
/// Lookup is exact and case-sensitive; anything unknown is treated as
/// an external command and resolved through the search path.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
    search_path: Arc<Mutex<SearchPath>>,
}

impl CommandExecutor {
    pub fn new(flags: &crate::flags::Flags) -> Result<Self, CommandError> {
        let startup_dir = std::env::current_dir()?.to_string_lossy().to_string();
        let search_path = Arc::new(Mutex::new(SearchPath::new(startup_dir)));
        let quiet = flags.is_set("quiet");

        let mut commands = BTreeMap::new();
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert("pwd".to_string(), CommandType::Pwd(PwdCommand::new(quiet)));
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new(quiet)));
        commands.insert(
            "setpath".to_string(),
            CommandType::SetPath(SetPathCommand::new(search_path.clone())),
        );
        commands.insert(
            "getpath".to_string(),
            CommandType::GetPath(GetPathCommand::new(search_path.clone(), quiet)),
        );
        commands.insert("ls".to_string(), CommandType::Ls(LsCommand::new(quiet)));
        commands.insert("help".to_string(), CommandType::Help(HelpCommand::new(quiet)));

        Ok(Self {
            commands,
            process_executor: ProcessExecutor::new(search_path.clone(), quiet),
            search_path,
        })
    }

    pub fn execute(&self, command: &str, args: &[String]) -> Result<Signal, CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            return cmd.execute(args);
        }

        // External command: the unresolved name stays argv[0].
        let mut tokens = Vec::with_capacity(args.len() + 1);
        tokens.push(command.to_string());
        tokens.extend(args.iter().cloned());
        self.process_executor.launch(&tokens)?;
        Ok(Signal::Continue)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn search_path(&self) -> Arc<Mutex<SearchPath>> {
        self.search_path.clone()
    }
}

/// Advisory for built-ins that received more arguments than they use.
/// Not an error; the command still runs.
pub(crate) fn warn_ignored_args(quiet: bool, command: &str, ignored: &[String]) {
    if quiet || ignored.is_empty() {
        return;
    }
    let style = OutputStyle::new();
    eprintln!(
        "{}",
        style.warning(&format!(
            "{}: ignoring extra arguments: {}",
            command,
            ignored.join(" ")
        ))
    );
}
