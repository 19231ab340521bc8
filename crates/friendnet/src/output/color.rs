//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:   green  (completed mutations)
//!   - Warning:   yellow (no path, empty results)
//!   - Error:     red    (failed commands)
//!   - Info:      cyan   (user names)
//!   - Emphasis:  bold   (section headers)
//!   - Muted:     dimmed (arrows, separators)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Bold text for headers.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Dimmed text for separators.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Join user names with a separator, each name colored as info.
pub(crate) fn colorize_names(names: &[String], separator: &str, config: &OutputConfig) -> String {
    let separator = dimmed(separator, config);
    names
        .iter()
        .map(|name| info(name, config))
        .collect::<Vec<_>>()
        .join(&separator)
}
