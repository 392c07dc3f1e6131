pub mod configs;
pub mod project;
pub mod server;

use std::path::PathBuf;

use anyhow::Result;

use super::manifest;
use crate::domain::model::ProjectPlan;

/// Folder skeleton created under the project root before any file is
/// written.
pub const SKELETON_DIRS: &[&str] = &[
    "src/routes",
    "src/controllers",
    "src/models",
    "src/config",
    "src/middleware",
    "src/services",
];

/// Synthesizes every file of a generated project as (relative path,
/// content) pairs. Writes are order-independent once parent directories
/// exist.
pub fn generate_project_files(plan: &ProjectPlan) -> Result<Vec<(PathBuf, String)>> {
    let answers = &plan.answers;
    let ext = answers.language.source_ext();

    let mut files = vec![
        (
            PathBuf::from(answers.language.entry_file()),
            server::entry_point(),
        ),
        (PathBuf::from(format!("src/app.{ext}")), server::app_module()),
        (
            PathBuf::from(format!("src/config/envConfig.{ext}")),
            server::env_config(),
        ),
        (PathBuf::from(".env"), project::env_file()),
        (PathBuf::from(".gitignore"), project::gitignore()),
        (PathBuf::from("README.md"), project::readme(plan)),
    ];

    if answers.language.is_typescript() {
        files.push((
            PathBuf::from("tsconfig.json"),
            configs::tsconfig(answers.use_esm)?,
        ));
    }
    if answers.use_prettier {
        files.push((PathBuf::from(".prettierrc"), configs::prettierrc()?));
    }
    if answers.use_eslint && answers.language.is_typescript() {
        files.push((PathBuf::from(".eslintrc.json"), configs::eslintrc()?));
    }

    let manifest = manifest::build_manifest(&plan.paths.name, answers);
    files.push((PathBuf::from("package.json"), manifest::to_json(&manifest)?));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::domain::model::{Answers, Language, Orm, ProjectPaths};

    fn plan(language: Language) -> ProjectPlan {
        ProjectPlan {
            answers: Answers {
                project_name: "demo".to_string(),
                language,
                orm: Orm::Mongoose,
                use_eslint: true,
                use_esm: true,
                use_prettier: true,
            },
            paths: ProjectPaths {
                name: "demo".to_string(),
                root: PathBuf::from("/tmp/demo"),
            },
        }
    }

    fn paths(files: &[(PathBuf, String)]) -> Vec<&Path> {
        files.iter().map(|(p, _)| p.as_path()).collect()
    }

    #[test]
    fn test_typescript_file_set() {
        let files = generate_project_files(&plan(Language::TypeScript)).unwrap();
        let paths = paths(&files);

        for expected in [
            "index.ts",
            "src/app.ts",
            "src/config/envConfig.ts",
            ".env",
            ".gitignore",
            "README.md",
            "tsconfig.json",
            ".prettierrc",
            ".eslintrc.json",
            "package.json",
        ] {
            assert!(paths.contains(&Path::new(expected)), "missing {expected}");
        }
    }

    #[test]
    fn test_javascript_file_set_has_no_ts_configs() {
        let files = generate_project_files(&plan(Language::JavaScript)).unwrap();
        let paths = paths(&files);

        assert!(paths.contains(&Path::new("index.js")));
        assert!(paths.contains(&Path::new("src/app.js")));
        assert!(!paths.contains(&Path::new("tsconfig.json")));
        // Inline ESLint config is TypeScript-only.
        assert!(!paths.contains(&Path::new(".eslintrc.json")));
    }

    #[test]
    fn test_manifest_carries_resolved_name() {
        let files = generate_project_files(&plan(Language::TypeScript)).unwrap();
        let (_, manifest) = files
            .iter()
            .find(|(p, _)| p == Path::new("package.json"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(manifest).unwrap();
        assert_eq!(value["name"], "demo");
    }
}
