use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn is_typescript(&self) -> bool {
        matches!(self, Language::TypeScript)
    }

    /// Entry file at the project root, e.g. `index.ts`.
    pub fn entry_file(&self) -> &'static str {
        match self {
            Language::JavaScript => "index.js",
            Language::TypeScript => "index.ts",
        }
    }

    pub fn source_ext(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Language::JavaScript),
            "ts" | "typescript" => Ok(Language::TypeScript),
            other => Err(format!(
                "unknown language '{other}' (expected 'javascript' or 'typescript')"
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::JavaScript => write!(f, "JavaScript"),
            Language::TypeScript => write!(f, "TypeScript"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orm {
    Mongoose,
    Prisma,
}

impl FromStr for Orm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongoose" => Ok(Orm::Mongoose),
            "prisma" => Ok(Orm::Prisma),
            other => Err(format!(
                "unknown ORM '{other}' (expected 'mongoose' or 'prisma')"
            )),
        }
    }
}

impl fmt::Display for Orm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orm::Mongoose => write!(f, "Mongoose"),
            Orm::Prisma => write!(f, "Prisma"),
        }
    }
}

/// How project files reach the disk: extract a prebuilt template tree,
/// or synthesize every file from the collected answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Copy,
    #[default]
    Generate,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "copy" => Ok(Strategy::Copy),
            "generate" => Ok(Strategy::Generate),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'copy' or 'generate')"
            )),
        }
    }
}

/// Maps a language/ORM pair onto one of the four prebuilt template trees.
pub fn template_id(language: Language, orm: Orm) -> &'static str {
    match (orm, language) {
        (Orm::Mongoose, Language::JavaScript) => "mongoosejs",
        (Orm::Mongoose, Language::TypeScript) => "mongoosets",
        (Orm::Prisma, Language::JavaScript) => "prismajs",
        (Orm::Prisma, Language::TypeScript) => "prismats",
    }
}

/// Everything the user chose, collected once per invocation and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub language: Language,
    pub orm: Orm,
    pub use_eslint: bool,
    pub use_esm: bool,
    pub use_prettier: bool,
}

/// Final project name and absolute target directory derived from the
/// raw project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub name: String,
    pub root: PathBuf,
}

impl ProjectPaths {
    /// `"."` (or `"./"`) scaffolds into the current directory and takes
    /// its basename as the project name; any other name becomes a new
    /// subdirectory of `cwd`.
    pub fn resolve(project_name: &str, cwd: &Path) -> Self {
        if project_name == "." || project_name == "./" {
            let name = cwd
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "app".to_string());
            Self {
                name,
                root: cwd.to_path_buf(),
            }
        } else {
            Self {
                name: project_name.to_string(),
                root: cwd.join(project_name),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    pub answers: Answers,
    pub paths: ProjectPaths,
}
