use std::fs;

use anyhow::{Context, Result};

use super::templates::{SKELETON_DIRS, generate_project_files};
use crate::application::port::Materializer;
use crate::domain::model::ProjectPlan;

/// Generate-strategy materializer: synthesizes every file from the
/// collected answers and writes it under the project root.
pub struct FsGenerator;

impl FsGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Materializer for FsGenerator {
    fn materialize(&self, plan: &ProjectPlan) -> Result<()> {
        let root = &plan.paths.root;
        fs::create_dir_all(root)
            .with_context(|| format!("failed to create project directory {}", root.display()))?;

        for dir in SKELETON_DIRS {
            let path = root.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("failed to create directory {}", path.display()))?;
        }

        for (relative_path, content) in generate_project_files(plan)? {
            let full_path = root.join(&relative_path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(&full_path, content)
                .with_context(|| format!("failed to write file {}", full_path.display()))?;
        }

        Ok(())
    }
}
