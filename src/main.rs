use anyhow::{Error, Result};
use clap::Parser;

use create_exbackend_app::application::scaffold::{ScaffoldArgs, ScaffoldUseCase};
use create_exbackend_app::cli::Cli;
use create_exbackend_app::config::{CliConfig, load_config};
use create_exbackend_app::domain::model::{ProjectPlan, Strategy};
use create_exbackend_app::infrastructure::generator::FsGenerator;
use create_exbackend_app::infrastructure::installer::ProcessRunner;
use create_exbackend_app::infrastructure::prompt::DialoguerPrompt;
use create_exbackend_app::infrastructure::template_copy::TemplateCopier;
use create_exbackend_app::infrastructure::ui;

fn main() {
    let cli = Cli::parse();
    ui::render_banner();

    if let Err(e) = run(cli) {
        eprintln!("{}", ui::format_error(&format!("{e:#}")));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;

    let strategy = match cli.strategy.as_deref() {
        Some(value) => value.parse::<Strategy>().map_err(Error::msg)?,
        None => config
            .default_strategy
            .parse::<Strategy>()
            .map_err(Error::msg)?,
    };

    let args = ScaffoldArgs {
        name: cli.name,
        language: cli.language,
        orm: cli.orm,
        strategy,
        eslint: cli.eslint,
        esm: cli.esm,
        prettier: cli.prettier,
        yes: cli.yes,
        skip_install: cli.skip_install || config.skip_install,
    };

    let plan = scaffold(strategy, &args, config)?;
    report_success(&plan);
    Ok(())
}

fn scaffold(strategy: Strategy, args: &ScaffoldArgs, config: CliConfig) -> Result<ProjectPlan> {
    let prompt = DialoguerPrompt::new();
    let runner = ProcessRunner::new();
    match strategy {
        Strategy::Copy => {
            ScaffoldUseCase::new(prompt, TemplateCopier::new(), runner, config).execute(args)
        }
        Strategy::Generate => {
            ScaffoldUseCase::new(prompt, FsGenerator::new(), runner, config).execute(args)
        }
    }
}

fn report_success(plan: &ProjectPlan) {
    println!();
    println!(
        "{}",
        ui::format_success(&format!("Project {} is ready! 🎉", plan.paths.name))
    );
    println!(
        "{}",
        ui::format_hint(&format!("Location: {}", plan.paths.root.display()))
    );
    println!("{}", ui::format_hint("To start:"));
    if plan.answers.project_name != "." && plan.answers.project_name != "./" {
        println!("{}", ui::format_hint(&format!("  cd {}", plan.paths.name)));
    }
    println!("{}", ui::format_hint("  npm run dev"));
}
