//! Theme system for human-mode output.

use console::Style;

/// Visual theme for edprof human-mode output.
///
/// Centralizes styles for consistent rendering.
#[derive(Debug, Clone)]
pub struct ProfileTheme {
    pub accent: Style,
    pub success: Style,
    pub error: Style,
    pub warning: Style,
    pub muted: Style,

    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub item_id: Style,
    pub separator: Style,
    pub group: Style,
    pub category: Style,
}

impl Default for ProfileTheme {
    fn default() -> Self {
        Self {
            accent: Style::new().blue().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warning: Style::new().yellow().bold(),
            muted: Style::new().dim(),
            header: Style::new().blue().bold().underlined(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            item_id: Style::new().cyan(),
            separator: Style::new().dim(),
            group: Style::new().magenta().bold(),
            category: Style::new().yellow(),
        }
    }
}

impl ProfileTheme {
    /// Theme with every style stripped, for `--no-color` and pipes.
    pub fn plain() -> Self {
        let plain = Style::new().force_styling(false);
        Self {
            accent: plain.clone(),
            success: plain.clone(),
            error: plain.clone(),
            warning: plain.clone(),
            muted: plain.clone(),
            header: plain.clone(),
            label: plain.clone(),
            value: plain.clone(),
            item_id: plain.clone(),
            separator: plain.clone(),
            group: plain.clone(),
            category: plain,
        }
    }
}
