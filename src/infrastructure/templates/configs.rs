use anyhow::Result;
use serde_json::json;

pub fn tsconfig(use_esm: bool) -> Result<String> {
    let value = json!({
        "compilerOptions": {
            "target": "ESNext",
            "module": if use_esm { "ESNext" } else { "CommonJS" },
            "moduleResolution": "node",
            "esModuleInterop": true,
            "forceConsistentCasingInFileNames": true,
            "strict": true,
            "skipLibCheck": true,
            "rootDir": "./",
            "outDir": "dist",
        },
        "include": ["src", "index.ts"],
    });
    pretty(&value)
}

pub fn prettierrc() -> Result<String> {
    let value = json!({
        "semi": true,
        "singleQuote": true,
        "printWidth": 80,
        "tabWidth": 2,
        "trailingComma": "es5",
    });
    pretty(&value)
}

pub fn eslintrc() -> Result<String> {
    let value = json!({
        "parser": "@typescript-eslint/parser",
        "extends": ["eslint:recommended", "plugin:@typescript-eslint/recommended"],
        "parserOptions": {
            "ecmaVersion": "latest",
            "sourceType": "module",
        },
        "rules": {},
    });
    pretty(&value)
}

fn pretty(value: &serde_json::Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsconfig_module_keyed_by_esm() {
        let value: serde_json::Value = serde_json::from_str(&tsconfig(true).unwrap()).unwrap();
        assert_eq!(value["compilerOptions"]["module"], "ESNext");
        assert_eq!(value["compilerOptions"]["strict"], true);

        let value: serde_json::Value = serde_json::from_str(&tsconfig(false).unwrap()).unwrap();
        assert_eq!(value["compilerOptions"]["module"], "CommonJS");
    }

    #[test]
    fn test_prettierrc_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&prettierrc().unwrap()).unwrap();
        assert_eq!(value["singleQuote"], true);
        assert_eq!(value["printWidth"], 80);
    }

    #[test]
    fn test_eslintrc_targets_typescript() {
        let value: serde_json::Value = serde_json::from_str(&eslintrc().unwrap()).unwrap();
        assert_eq!(value["parser"], "@typescript-eslint/parser");
    }
}
