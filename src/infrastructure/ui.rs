use std::time::Duration;

use console::style;
use indicatif::ProgressBar;

pub fn render_banner() {
    let line = style("━".repeat(44)).cyan();
    println!("{line}");
    println!(
        "  {}",
        style("✨ create-exbackend-app").cyan().bold()
    );
    println!(
        "  {}",
        style("Express backend project scaffolding").cyan()
    );
    println!("{line}");
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), style(message).green())
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("✗").red(), style(message).red())
}

pub fn format_hint(message: &str) -> String {
    format!("  {}", style(message).cyan())
}

pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_success() {
        let line = format_success("Project my-app is ready");
        assert!(line.contains("✓"));
        assert!(line.contains("Project my-app is ready"));
    }

    #[test]
    fn test_format_error() {
        let line = format_error("target directory is not empty");
        assert!(line.contains("✗"));
        assert!(line.contains("not empty"));
    }

    #[test]
    fn test_format_hint() {
        let line = format_hint("npm run dev");
        assert!(line.contains("npm run dev"));
    }
}
