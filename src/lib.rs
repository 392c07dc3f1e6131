pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use cli::Cli;
pub use config::{CliConfig, load_config};
pub use domain::model::{Answers, Language, Orm, ProjectPaths, ProjectPlan, Strategy};
