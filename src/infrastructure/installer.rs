use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use super::ui;
use crate::application::port::{CommandOutcome, CommandRunner};

/// Runs external commands with the target directory as working
/// directory. Captured runs show a spinner; interactive runs hand the
/// terminal to the child.
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutcome> {
        let spinner = ui::spinner(&format!("Running {program} {}...", args.join(" ")));
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .with_context(|| format!("failed to start `{program}`"))?;
        spinner.finish_and_clear();

        Ok(CommandOutcome {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_interactive(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutcome> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to start `{program}`"))?;

        Ok(CommandOutcome {
            code: status.code(),
            stderr: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_reports_exit_code_and_stderr() {
        let tmp = tempfile::TempDir::new().unwrap();
        let runner = ProcessRunner::new();

        let outcome = runner
            .run("sh", &["-c", "echo oops >&2; exit 3"], tmp.path())
            .unwrap();
        assert_eq!(outcome.code, Some(3));
        assert!(outcome.stderr.contains("oops"));
        assert!(!outcome.success());
    }

    #[test]
    fn test_run_succeeds_in_working_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("marker"), "x").unwrap();
        let runner = ProcessRunner::new();

        let outcome = runner.run("sh", &["-c", "test -f marker"], tmp.path()).unwrap();
        assert!(outcome.success());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let runner = ProcessRunner::new();

        let err = runner
            .run("definitely-not-a-real-program", &[], tmp.path())
            .unwrap_err();
        assert!(err.to_string().contains("failed to start"));
    }
}
