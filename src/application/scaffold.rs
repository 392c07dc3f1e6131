use std::fs;
use std::path::Path;

use anyhow::{Context, Error, Result, bail};

use super::port::{CommandRunner, Materializer, UserPrompt};
use crate::config::CliConfig;
use crate::domain::model::{Answers, Language, Orm, ProjectPaths, ProjectPlan, Strategy};
use crate::domain::validation::validate_project_name;

pub struct ScaffoldArgs {
    pub name: Option<String>,
    pub language: Option<String>,
    pub orm: Option<String>,
    pub strategy: Strategy,
    pub eslint: Option<bool>,
    pub esm: Option<bool>,
    pub prettier: Option<bool>,
    pub yes: bool,
    pub skip_install: bool,
}

pub struct ScaffoldUseCase<P: UserPrompt, M: Materializer, R: CommandRunner> {
    prompt: P,
    materializer: M,
    runner: R,
    config: CliConfig,
}

impl<P: UserPrompt, M: Materializer, R: CommandRunner> ScaffoldUseCase<P, M, R> {
    pub fn new(prompt: P, materializer: M, runner: R, config: CliConfig) -> Self {
        Self {
            prompt,
            materializer,
            runner,
            config,
        }
    }

    pub fn execute(&self, args: &ScaffoldArgs) -> Result<ProjectPlan> {
        let answers = self.collect_answers(args)?;

        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        let paths = ProjectPaths::resolve(&answers.project_name, &cwd);
        ensure_target_available(&paths.root)?;

        let plan = ProjectPlan { answers, paths };
        self.materializer.materialize(&plan)?;

        if !args.skip_install {
            self.install_dependencies(&plan)?;
            if args.strategy == Strategy::Generate {
                self.run_post_setup(&plan)?;
            }
        }

        Ok(plan)
    }

    fn collect_answers(&self, args: &ScaffoldArgs) -> Result<Answers> {
        let interactive = !args.yes;

        let raw_name = match &args.name {
            Some(name) => name.clone(),
            None if interactive => self.prompt.input_project_name(&self.config.default_name)?,
            None => bail!("project name is required in non-interactive mode (use --name)"),
        };
        let project_name = validate_project_name(&raw_name)?;

        let language = match &args.language {
            Some(value) => value.parse::<Language>().map_err(Error::msg)?,
            None if interactive => self.prompt.select_language()?,
            None => Language::TypeScript,
        };

        let orm = match &args.orm {
            Some(value) => value.parse::<Orm>().map_err(Error::msg)?,
            None if interactive => self.prompt.select_orm()?,
            None => Orm::Mongoose,
        };

        // The copy templates are self-contained; the lint/format/module
        // toggles only shape generated projects.
        let (use_eslint, use_esm, use_prettier) = if args.strategy == Strategy::Generate {
            (
                self.resolve_toggle(args.eslint, interactive, |p| p.confirm_eslint())?,
                self.resolve_toggle(args.esm, interactive, |p| p.confirm_esm())?,
                self.resolve_toggle(args.prettier, interactive, |p| p.confirm_prettier())?,
            )
        } else {
            (false, false, false)
        };

        Ok(Answers {
            project_name,
            language,
            orm,
            use_eslint,
            use_esm,
            use_prettier,
        })
    }

    fn resolve_toggle(
        &self,
        flag: Option<bool>,
        interactive: bool,
        ask: impl Fn(&P) -> Result<bool>,
    ) -> Result<bool> {
        match flag {
            Some(value) => Ok(value),
            None if interactive => ask(&self.prompt),
            None => Ok(true),
        }
    }

    fn install_dependencies(&self, plan: &ProjectPlan) -> Result<()> {
        let pm = &self.config.package_manager;
        let outcome = self.runner.run(pm, &["install"], &plan.paths.root)?;
        if !outcome.success() {
            bail!(
                "`{pm} install` failed ({}): {}",
                describe_exit(outcome.code),
                outcome.stderr.trim()
            );
        }
        Ok(())
    }

    fn run_post_setup(&self, plan: &ProjectPlan) -> Result<()> {
        // TypeScript projects get an inline .eslintrc.json instead.
        if plan.answers.use_eslint && plan.answers.language == Language::JavaScript {
            let pm = &self.config.package_manager;
            let outcome = self.runner.run_interactive(
                pm,
                &["init", "@eslint/config@latest"],
                &plan.paths.root,
            )?;
            if !outcome.success() {
                bail!(
                    "`{pm} init @eslint/config` failed ({})",
                    describe_exit(outcome.code)
                );
            }
        }

        if plan.answers.orm == Orm::Prisma {
            let outcome =
                self.runner
                    .run_interactive("npx", &["prisma", "init"], &plan.paths.root)?;
            if !outcome.success() {
                bail!("`npx prisma init` failed ({})", describe_exit(outcome.code));
            }
        }

        Ok(())
    }
}

/// Refuses to scaffold into a directory that already has contents, for
/// both strategies. An existing empty directory is fine.
pub fn ensure_target_available(root: &Path) -> Result<()> {
    if root.exists() {
        let mut entries = fs::read_dir(root)
            .with_context(|| format!("cannot inspect target directory {}", root.display()))?;
        if entries.next().is_some() {
            bail!(
                "target directory {} already exists and is not empty",
                root.display()
            );
        }
    }
    Ok(())
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
