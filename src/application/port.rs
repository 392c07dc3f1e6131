use std::path::Path;

use anyhow::Result;

use crate::domain::model::{Language, Orm, ProjectPlan};

pub trait UserPrompt {
    fn input_project_name(&self, default: &str) -> Result<String>;
    fn select_language(&self) -> Result<Language>;
    fn select_orm(&self) -> Result<Orm>;
    fn confirm_eslint(&self) -> Result<bool>;
    fn confirm_esm(&self) -> Result<bool>;
    fn confirm_prettier(&self) -> Result<bool>;
}

pub trait Materializer {
    fn materialize(&self, plan: &ProjectPlan) -> Result<()>;
}

/// Result of a finished external command. A non-zero exit code is not an
/// `Err` at this level; callers decide whether it aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub code: Option<i32>,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Run to completion with captured output.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutcome>;

    /// Run to completion with the parent terminal's stdio attached, for
    /// subprocesses that prompt the user themselves.
    fn run_interactive(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutcome>;
}
