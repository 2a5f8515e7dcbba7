use std::io::ErrorKind;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use super::ProcessError;
use crate::core::paths::SearchPath;
use crate::style::OutputStyle;

/// Resolves and runs external commands. Candidates are tried strictly
/// in search-path order; the first one that actually starts wins and
/// the parent blocks until that child exits.
#[derive(Clone)]
pub struct ProcessExecutor {
    search_path: Arc<Mutex<SearchPath>>,
    quiet_mode: bool,
    style: OutputStyle,
}

impl ProcessExecutor {
    pub fn new(search_path: Arc<Mutex<SearchPath>>, quiet_mode: bool) -> Self {
        Self {
            search_path,
            quiet_mode,
            style: OutputStyle::new(),
        }
    }

    /// Launches `tokens` as an external command. `tokens[0]` is the
    /// command name as typed; it stays argv[0] for the child even though
    /// the program actually executed is the resolved candidate path.
    pub fn launch(&self, tokens: &[String]) -> Result<(), ProcessError> {
        let name = match tokens.first() {
            Some(name) => name,
            None => return Ok(()),
        };

        // Snapshot the entries so the lock is not held across the child's
        // whole lifetime.
        let dirs: Vec<String> = {
            let paths = self
                .search_path
                .lock()
                .map_err(|_| ProcessError::Other("search path lock poisoned".to_string()))?;
            paths.entries().to_vec()
        };

        for dir in &dirs {
            let candidate = Path::new(dir).join(name);

            let mut command = Command::new(&candidate);
            command
                .arg0(name)
                .args(&tokens[1..])
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            match command.spawn() {
                Ok(mut child) => {
                    let status = child
                        .wait()
                        .map_err(|e| ProcessError::Other(e.to_string()))?;

                    if !status.success() && !self.quiet_mode {
                        eprintln!(
                            "{}",
                            self.style
                                .warning(&format!("process exited with {}", status))
                        );
                    }
                    return Ok(());
                }
                // Missing file or a non-executable namesake: keep searching.
                Err(e)
                    if e.kind() == ErrorKind::NotFound
                        || e.kind() == ErrorKind::PermissionDenied =>
                {
                    continue;
                }
                Err(e) => return Err(ProcessError::CreationFailed(e.to_string())),
            }
        }

        Err(ProcessError::CommandNotFound(name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn searching(dirs: &[&PathBuf]) -> ProcessExecutor {
        let mut paths = SearchPath::new("/unused");
        paths
            .set(dirs
                .iter()
                .map(|d| d.to_string_lossy().to_string())
                .collect())
            .unwrap();
        ProcessExecutor::new(Arc::new(Mutex::new(paths)), true)
    }

    fn write_script(dir: &PathBuf, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn temp_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("conch_launch_{}", label));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_launch_not_found() {
        let a = temp_dir("nf_a");
        let b = temp_dir("nf_b");
        let executor = searching(&[&a, &b]);

        let result = executor.launch(&["quxquxqux".to_string()]);
        assert!(matches!(result, Err(ProcessError::CommandNotFound(_))));
    }

    #[test]
    fn test_launch_found_in_second_dir() {
        let a = temp_dir("second_a");
        let b = temp_dir("second_b");
        write_script(&b, "qux", "exit 0");

        let executor = searching(&[&a, &b]);
        assert!(executor.launch(&["qux".to_string()]).is_ok());
    }

    #[test]
    fn test_launch_skips_non_executable() {
        let a = temp_dir("skip_a");
        let b = temp_dir("skip_b");

        // Same name in the first dir, but not runnable
        let decoy = a.join("zorp");
        fs::write(&decoy, "not a program").unwrap();
        fs::set_permissions(&decoy, fs::Permissions::from_mode(0o644)).unwrap();

        write_script(&b, "zorp", "exit 0");

        let executor = searching(&[&a, &b]);
        assert!(executor.launch(&["zorp".to_string()]).is_ok());
    }

    #[test]
    fn test_launch_waits_for_child() {
        let a = temp_dir("wait_a");
        let marker = a.join("marker");
        let _ = fs::remove_file(&marker);
        write_script(&a, "touchmark", &format!("touch {}", marker.display()));

        let executor = searching(&[&a]);
        executor.launch(&["touchmark".to_string()]).unwrap();

        // Synchronous wait means the side effect is visible on return
        assert!(marker.exists());
    }

    #[test]
    fn test_launch_passes_arguments() {
        let a = temp_dir("args_a");
        let out = a.join("argv_out");
        let _ = fs::remove_file(&out);
        write_script(&a, "recorder", &format!("echo \"$1 $2\" > {}", out.display()));

        let executor = searching(&[&a]);
        executor
            .launch(&[
                "recorder".to_string(),
                "alpha".to_string(),
                "beta".to_string(),
            ])
            .unwrap();

        let recorded = fs::read_to_string(&out).unwrap();
        assert_eq!(recorded.trim(), "alpha beta");
    }

    #[test]
    fn test_launch_keeps_unresolved_name_as_argv0() {
        let a = temp_dir("argv0_a");
        let out = a.join("argv0_out");
        let _ = fs::remove_file(&out);

        // A real interpreter under an alias: with `-c` and no operand,
        // sh assigns its own argv[0] to $0.
        let alias = a.join("shalias");
        let _ = fs::remove_file(&alias);
        std::os::unix::fs::symlink("/bin/sh", &alias).unwrap();

        let executor = searching(&[&a]);
        executor
            .launch(&[
                "shalias".to_string(),
                "-c".to_string(),
                format!("echo $0 > {}", out.display()),
            ])
            .unwrap();

        let recorded = fs::read_to_string(&out).unwrap();
        // The name as typed, not the resolved candidate path
        assert_eq!(recorded.trim(), "shalias");
    }

    #[test]
    fn test_launch_first_match_wins() {
        let a = temp_dir("order_a");
        let b = temp_dir("order_b");
        let out = a.join("order_out");
        let _ = fs::remove_file(&out);

        // Runnable namesakes in both directories; only the first may run
        write_script(&a, "dup", &format!("echo first > {}", out.display()));
        write_script(&b, "dup", &format!("echo second > {}", out.display()));

        let executor = searching(&[&a, &b]);
        executor.launch(&["dup".to_string()]).unwrap();

        let recorded = fs::read_to_string(&out).unwrap();
        assert_eq!(recorded.trim(), "first");
    }

    #[test]
    fn test_launch_empty_tokens_is_noop() {
        let a = temp_dir("noop_a");
        let executor = searching(&[&a]);
        assert!(executor.launch(&[]).is_ok());
    }
}
