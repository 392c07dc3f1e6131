use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use crate::domain::model::{Answers, Language, Orm};

/// The package.json descriptor for a generated project. Dependency
/// tables use ordered maps so output is deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub main: String,
    #[serde(rename = "type")]
    pub package_type: String,
    pub scripts: Scripts,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scripts {
    pub dev: String,
    pub build: String,
    pub start: String,
}

const BASE_DEPENDENCIES: &[(&str, &str)] = &[
    ("compression", "^1.8.0"),
    ("cookie-parser", "^1.4.7"),
    ("cors", "^2.8.5"),
    ("dotenv", "^16.5.0"),
    ("express", "^5.1.0"),
    ("express-mongo-sanitize", "^2.2.0"),
    ("express-rate-limit", "^7.5.0"),
    ("helmet", "^8.1.0"),
    ("hpp", "^0.2.3"),
    ("morgan", "^1.10.0"),
];

const TYPE_PACKAGES: &[(&str, &str)] = &[
    ("typescript", "^5.8.3"),
    ("@types/node", "^22.14.1"),
    ("@types/express", "^5.0.1"),
    ("@types/morgan", "^1.9.9"),
    ("@types/cors", "^2.8.17"),
    ("@types/cookie-parser", "^1.4.8"),
    ("@types/compression", "^1.7.5"),
    ("@types/hpp", "^0.2.6"),
];

const ESLINT_PACKAGES: &[(&str, &str)] = &[
    ("eslint", "^9.24.0"),
    ("@typescript-eslint/eslint-plugin", "^8.30.1"),
    ("@typescript-eslint/parser", "^8.30.1"),
];

pub fn build_manifest(name: &str, answers: &Answers) -> PackageManifest {
    let ts = answers.language.is_typescript();

    let mut dependencies: BTreeMap<String, String> = BASE_DEPENDENCIES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    match answers.orm {
        Orm::Prisma => dependencies.insert("@prisma/client".to_string(), "^6.6.0".to_string()),
        Orm::Mongoose => dependencies.insert("mongoose".to_string(), "^8.13.2".to_string()),
    };

    let mut dev_dependencies = BTreeMap::new();
    if ts {
        for (k, v) in TYPE_PACKAGES {
            dev_dependencies.insert(k.to_string(), v.to_string());
        }
        dev_dependencies.insert("tsx".to_string(), "^4.19.3".to_string());
    } else {
        dev_dependencies.insert("nodemon".to_string(), "^3.1.0".to_string());
    }
    if answers.use_eslint && ts {
        for (k, v) in ESLINT_PACKAGES {
            dev_dependencies.insert(k.to_string(), v.to_string());
        }
    }
    if answers.use_prettier {
        dev_dependencies.insert("prettier".to_string(), "^3.5.3".to_string());
    }
    if answers.orm == Orm::Prisma {
        dev_dependencies.insert("prisma".to_string(), "^6.6.0".to_string());
    }

    let package_type = if answers.use_esm { "module" } else { "commonjs" };

    PackageManifest {
        name: name.to_string(),
        version: "1.0.0".to_string(),
        main: answers.language.entry_file().to_string(),
        package_type: package_type.to_string(),
        scripts: scripts_for(answers.language),
        dependencies,
        dev_dependencies,
    }
}

fn scripts_for(language: Language) -> Scripts {
    match language {
        Language::TypeScript => Scripts {
            dev: "tsx watch index.ts".to_string(),
            build: "tsc".to_string(),
            start: "node dist/index.js".to_string(),
        },
        Language::JavaScript => Scripts {
            dev: "nodemon index.js".to_string(),
            build: "echo \"No build step needed for JS\"".to_string(),
            start: "node index.js".to_string(),
        },
    }
}

pub fn to_json(manifest: &PackageManifest) -> Result<String> {
    let mut text = serde_json::to_string_pretty(manifest)?;
    text.push('\n');
    Ok(text)
}
