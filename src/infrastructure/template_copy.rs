use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use include_dir::{Dir, DirEntry, include_dir};
use serde_json::Value;

use crate::application::port::Materializer;
use crate::domain::model::{ProjectPlan, template_id};

static TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Copy-strategy materializer: extracts one of the prebuilt template
/// trees embedded in the binary, then renames the copied manifest.
pub struct TemplateCopier;

impl TemplateCopier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TemplateCopier {
    fn default() -> Self {
        Self::new()
    }
}

impl Materializer for TemplateCopier {
    fn materialize(&self, plan: &ProjectPlan) -> Result<()> {
        let id = template_id(plan.answers.language, plan.answers.orm);
        let template = TEMPLATES
            .get_dir(id)
            .ok_or_else(|| anyhow!("template '{id}' is missing from this build"))?;

        let root = &plan.paths.root;
        fs::create_dir_all(root)
            .with_context(|| format!("failed to create project directory {}", root.display()))?;
        extract_tree(template, Path::new(id), root)?;

        patch_manifest_name(&root.join("package.json"), &plan.paths.name)
    }
}

/// Writes an embedded directory under `target`, with entry paths taken
/// relative to `strip`.
fn extract_tree(dir: &Dir<'_>, strip: &Path, target: &Path) -> Result<()> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => {
                let relative = subdir.path().strip_prefix(strip)?;
                let path = target.join(relative);
                fs::create_dir_all(&path)
                    .with_context(|| format!("failed to create directory {}", path.display()))?;
                extract_tree(subdir, strip, target)?;
            }
            DirEntry::File(file) => {
                let relative = file.path().strip_prefix(strip)?;
                let path = target.join(relative);
                fs::write(&path, file.contents())
                    .with_context(|| format!("failed to write file {}", path.display()))?;
            }
        }
    }
    Ok(())
}

/// Rewrites only the `name` field of the copied package.json.
fn patch_manifest_name(manifest_path: &Path, name: &str) -> Result<()> {
    let text = fs::read_to_string(manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let mut value: Value = serde_json::from_str(&text)
        .with_context(|| format!("invalid JSON in {}", manifest_path.display()))?;

    let object = value
        .as_object_mut()
        .ok_or_else(|| anyhow!("{} is not a JSON object", manifest_path.display()))?;
    object.insert("name".to_string(), Value::String(name.to_string()));

    let mut patched = serde_json::to_string_pretty(&value)?;
    patched.push('\n');
    fs::write(manifest_path, patched)
        .with_context(|| format!("failed to write {}", manifest_path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::model::{Answers, Language, Orm, ProjectPaths};

    fn plan_in(tmp: &TempDir, language: Language, orm: Orm) -> ProjectPlan {
        let root = tmp.path().join("copied-app");
        ProjectPlan {
            answers: Answers {
                project_name: "copied-app".to_string(),
                language,
                orm,
                use_eslint: false,
                use_esm: false,
                use_prettier: false,
            },
            paths: ProjectPaths {
                name: "copied-app".to_string(),
                root,
            },
        }
    }

    #[test]
    fn test_all_four_templates_are_embedded() {
        for id in ["mongoosejs", "mongoosets", "prismajs", "prismats"] {
            let dir = TEMPLATES.get_dir(id);
            assert!(dir.is_some(), "missing template {id}");
            assert!(
                TEMPLATES
                    .get_file(format!("{id}/package.json"))
                    .is_some(),
                "template {id} has no manifest"
            );
        }
    }

    #[test]
    fn test_copies_javascript_mongoose_template() {
        let tmp = TempDir::new().unwrap();
        let plan = plan_in(&tmp, Language::JavaScript, Orm::Mongoose);

        TemplateCopier::new().materialize(&plan).unwrap();

        let root = &plan.paths.root;
        for file in [
            "package.json",
            "index.js",
            "src/app.js",
            "src/config/envConfig.js",
            ".gitignore",
            "README.md",
        ] {
            assert!(root.join(file).exists(), "missing {file}");
        }
    }

    #[test]
    fn test_copies_typescript_template_with_tsconfig() {
        let tmp = TempDir::new().unwrap();
        let plan = plan_in(&tmp, Language::TypeScript, Orm::Prisma);

        TemplateCopier::new().materialize(&plan).unwrap();

        let root = &plan.paths.root;
        assert!(root.join("index.ts").exists());
        assert!(root.join("tsconfig.json").exists());
        assert!(!root.join("index.js").exists());
    }

    #[test]
    fn test_manifest_name_is_patched() {
        let tmp = TempDir::new().unwrap();
        let plan = plan_in(&tmp, Language::JavaScript, Orm::Prisma);

        TemplateCopier::new().materialize(&plan).unwrap();

        let manifest =
            std::fs::read_to_string(plan.paths.root.join("package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value["name"], "copied-app");
        assert!(value["dependencies"]["@prisma/client"].is_string());
    }
}
