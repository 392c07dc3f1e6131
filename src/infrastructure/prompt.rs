use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::application::port::UserPrompt;
use crate::domain::model::{Language, Orm};
use crate::domain::validation::validate_project_name;

pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }

    fn theme(&self) -> ColorfulTheme {
        ColorfulTheme::default()
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPrompt for DialoguerPrompt {
    fn input_project_name(&self, default: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme())
            .with_prompt("Project name (\".\" for the current directory)")
            .default(default.to_string())
            .validate_with(|input: &String| {
                validate_project_name(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn select_language(&self) -> Result<Language> {
        let items = ["Express + JS", "Express + TS"];
        let selection = Select::with_theme(&self.theme())
            .with_prompt("Which language do you want to use?")
            .items(&items)
            .default(1)
            .interact()?;
        Ok(match selection {
            0 => Language::JavaScript,
            _ => Language::TypeScript,
        })
    }

    fn select_orm(&self) -> Result<Orm> {
        let items = ["Mongoose", "Prisma"];
        let selection = Select::with_theme(&self.theme())
            .with_prompt("Which ORM/ODM setup do you want?")
            .items(&items)
            .default(0)
            .interact()?;
        Ok(match selection {
            0 => Orm::Mongoose,
            _ => Orm::Prisma,
        })
    }

    fn confirm_eslint(&self) -> Result<bool> {
        self.confirm("Use ESLint?")
    }

    fn confirm_esm(&self) -> Result<bool> {
        self.confirm("Use ES modules (ESM)?")
    }

    fn confirm_prettier(&self) -> Result<bool> {
        self.confirm("Set up Prettier?")
    }
}

impl DialoguerPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        let value = Confirm::with_theme(&self.theme())
            .with_prompt(message)
            .default(true)
            .interact()?;
        Ok(value)
    }
}
