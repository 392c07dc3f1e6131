use crate::domain::model::{Language, ProjectPlan};

pub fn readme(plan: &ProjectPlan) -> String {
    let name = &plan.paths.name;
    let answers = &plan.answers;

    let mut extras = String::new();
    if answers.use_eslint {
        extras.push_str(", ESLint");
    }
    if answers.use_prettier {
        extras.push_str(", Prettier");
    }

    let run = match answers.language {
        Language::TypeScript => "npm run build && node dist/index.js",
        Language::JavaScript => "node index.js",
    };

    format!(
        r#"# {name}

A minimal backend starter project created with `create-exbackend-app`.

## 📦 Stack
- Express.js
- {language}
- {orm}
- dotenv, morgan, cors, cookie-parser{extras}

## 🚀 Quick Start

```bash
cd {name}
npm install
{run}
```

## 🧱 Folder Structure

```
{name}/
├── src/
│   ├── routes/
│   ├── controllers/
│   ├── models/
│   ├── config/
│   ├── middleware/
│   └── services/
├── .env
├── .gitignore
├── {entry}
└── README.md
```

---

Created with ❤️ by create-exbackend-app CLI
"#,
        language = answers.language,
        orm = answers.orm,
        entry = answers.language.entry_file(),
    )
}

pub fn env_file() -> String {
    "PORT=5000\nNODE_ENV=development\n".to_string()
}

pub fn gitignore() -> String {
    "node_modules/\ndist/\n.env\n*.log\n*.tsbuildinfo\n.cache/\n.vscode/\n".to_string()
}
