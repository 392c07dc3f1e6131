use clap::Parser;

/// Every prompt has a matching flag so the tool can run fully scripted;
/// anything left unset is asked interactively.
#[derive(Parser, Debug)]
#[command(
    name = "create-exbackend-app",
    version,
    about = "Scaffold an Express backend starter project"
)]
pub struct Cli {
    /// Project name, or "." to scaffold into the current directory
    #[arg(short, long)]
    pub name: Option<String>,

    /// Language variant (javascript, typescript)
    #[arg(short, long)]
    pub language: Option<String>,

    /// ORM/ODM setup (mongoose, prisma)
    #[arg(short, long)]
    pub orm: Option<String>,

    /// Materialization strategy (copy, generate)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Include ESLint tooling (--eslint true|false)
    #[arg(long)]
    pub eslint: Option<bool>,

    /// Emit an ES-module project (--esm true|false)
    #[arg(long)]
    pub esm: Option<bool>,

    /// Include Prettier tooling (--prettier true|false)
    #[arg(long)]
    pub prettier: Option<bool>,

    /// Never prompt; take flags and defaults as final
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Skip dependency installation and setup commands
    #[arg(long, default_value_t = false)]
    pub skip_install: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_no_flags_is_interactive() {
        let cli = Cli::parse_from(["create-exbackend-app"]);
        assert!(cli.name.is_none());
        assert!(cli.language.is_none());
        assert!(!cli.yes);
        assert!(!cli.skip_install);
    }

    #[test]
    fn test_parse_full_flag_set() {
        let cli = Cli::parse_from([
            "create-exbackend-app",
            "--name",
            "my-app",
            "--language",
            "typescript",
            "--orm",
            "prisma",
            "--strategy",
            "generate",
            "--eslint",
            "true",
            "--esm",
            "false",
            "--prettier",
            "true",
            "--yes",
            "--skip-install",
        ]);

        assert_eq!(cli.name.as_deref(), Some("my-app"));
        assert_eq!(cli.language.as_deref(), Some("typescript"));
        assert_eq!(cli.orm.as_deref(), Some("prisma"));
        assert_eq!(cli.strategy.as_deref(), Some("generate"));
        assert_eq!(cli.eslint, Some(true));
        assert_eq!(cli.esm, Some(false));
        assert_eq!(cli.prettier, Some(true));
        assert!(cli.yes);
        assert!(cli.skip_install);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::parse_from([
            "create-exbackend-app",
            "-n",
            "api",
            "-l",
            "js",
            "-o",
            "mongoose",
            "-s",
            "copy",
            "-y",
        ]);
        assert_eq!(cli.name.as_deref(), Some("api"));
        assert_eq!(cli.language.as_deref(), Some("js"));
        assert_eq!(cli.orm.as_deref(), Some("mongoose"));
        assert_eq!(cli.strategy.as_deref(), Some("copy"));
        assert!(cli.yes);
    }

    #[test]
    fn test_current_dir_name_parses() {
        let cli = Cli::parse_from(["create-exbackend-app", "--name", "."]);
        assert_eq!(cli.name.as_deref(), Some("."));
    }
}
