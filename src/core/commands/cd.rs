use super::{warn_ignored_args, Command, CommandError, Signal};
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct CdCommand {
    quiet: bool,
}

impl CdCommand {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<Signal, CommandError> {
        let target = match args.first() {
            Some(dir) => {
                if args.len() > 1 {
                    warn_ignored_args(self.quiet, "cd", &args[1..]);
                }
                PathBuf::from(dir)
            }
            None => dirs::home_dir().ok_or(CommandError::HomeDirNotFound)?,
        };

        // set_current_dir either fully succeeds or leaves the working
        // directory exactly as it was.
        env::set_current_dir(&target)
            .map_err(|e| CommandError::DirectoryChangeFailed(e.to_string()))?;

        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the working-directory moves happen in a fixed order.
    #[test]
    fn test_cd_behavior() {
        let cmd = CdCommand::new(true);

        // Home by default
        cmd.execute(&[]).unwrap();
        assert_eq!(env::current_dir().unwrap(), dirs::home_dir().unwrap());

        // Explicit target
        let temp_dir = env::temp_dir();
        cmd.execute(&[temp_dir.to_string_lossy().to_string()])
            .unwrap();
        assert_eq!(env::current_dir().unwrap(), temp_dir);

        // A failed cd reports the error and moves nothing
        let before = env::current_dir().unwrap();
        let result = cmd.execute(&["/conch/no/such/dir".to_string()]);
        assert!(matches!(
            result,
            Err(CommandError::DirectoryChangeFailed(_))
        ));
        assert_eq!(env::current_dir().unwrap(), before);

        // Extra arguments: first one wins, rest are ignored
        cmd.execute(&[
            temp_dir.to_string_lossy().to_string(),
            "ignored".to_string(),
        ])
        .unwrap();
        assert_eq!(env::current_dir().unwrap(), temp_dir);
    }
}
