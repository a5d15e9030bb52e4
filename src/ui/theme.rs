//! Visual theme and styling.

use console::Style;

use crate::environment::Environment;

/// Terminal theme for deployenv output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for environment names (bold magenta).
    pub environment: Style,
    /// Style for alias lists (normal).
    pub alias: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            environment: Style::new().bold().magenta(),
            alias: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            environment: Style::new(),
            alias: Style::new(),
        }
    }

    /// Pick [`Theme::new`] or [`Theme::plain`] for the current terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an environment with its aliases, e.g. `TEST  qa, internal-acceptance`.
    pub fn format_environment(&self, env: Environment, aliases: &[String]) -> String {
        let name = format!("{:<12}", env.name());
        if aliases.is_empty() {
            format!(
                "{} {}",
                self.environment.apply_to(name),
                self.dim.apply_to("(no aliases)")
            )
        } else {
            format!(
                "{} {}",
                self.environment.apply_to(name),
                self.alias.apply_to(aliases.join(", "))
            )
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
