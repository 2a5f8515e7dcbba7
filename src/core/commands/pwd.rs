use super::{warn_ignored_args, Command, CommandError, Signal};
use std::env;

#[derive(Clone)]
pub struct PwdCommand {
    quiet: bool,
}

impl PwdCommand {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Command for PwdCommand {
    fn execute(&self, args: &[String]) -> Result<Signal, CommandError> {
        warn_ignored_args(self.quiet, "pwd", args);

        let cwd = env::current_dir()?;
        println!("{}", cwd.display());
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwd_runs() {
        let cmd = PwdCommand::new(true);
        assert_eq!(cmd.execute(&[]).unwrap(), Signal::Continue);
    }

    #[test]
    fn test_pwd_tolerates_extra_args() {
        let cmd = PwdCommand::new(true);
        assert!(cmd.execute(&["spurious".to_string()]).is_ok());
    }
}
