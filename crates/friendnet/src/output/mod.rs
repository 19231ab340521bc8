//! Output formatting for session commands.
//!
//! Every printer writes either human-readable text or JSON, chosen by
//! [`OutputMode`]. Printers take any `Write` so the session can target
//! stdout and tests can target a buffer.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use crate::domain::{Connection, NetworkStats, ShortestPath, UserDegree, format_weight};
use serde::Serialize;
use serde_json::json;
use std::env;
use std::io::{self, Write};

pub use color::{error, info, success, warning};

use color::{bold, colorize_names, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `FRIENDNET_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        // Respect NO_COLOR standard (https://no-color.org/)
        if env::var_os("NO_COLOR").is_some() {
            return Self::new(false);
        }

        let use_colors = match env::var("FRIENDNET_COLOR") {
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
            Ok(v) if v.is_empty() || v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) => {
                tracing::warn!(
                    env_var = "FRIENDNET_COLOR",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                true
            }
            Err(_) => true,
        };

        Self::new(use_colors)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// JSON
// ============================================================================

/// Write any serializable value as a single line of JSON.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Printers
// ============================================================================

/// Report a successful mutation.
pub fn print_success<W: Write>(
    w: &mut W,
    message: &str,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &json!({ "status": "ok", "message": message })),
        OutputMode::Text => writeln!(w, "{}", success(message, config)),
    }
}

/// Report a failed command.
pub fn print_error<W: Write>(
    w: &mut W,
    err: &dyn std::fmt::Display,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    let message = err.to_string();
    match mode {
        OutputMode::Json => write_json(w, &json!({ "status": "error", "error": message })),
        OutputMode::Text => writeln!(w, "{} {}", error("error:", config), message),
    }
}

/// Print the user list in index order.
pub fn print_users<W: Write>(
    w: &mut W,
    users: &[String],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &json!({ "users": users })),
        OutputMode::Text => {
            if users.is_empty() {
                return writeln!(w, "{}", warning("No users", config));
            }
            writeln!(w, "{}", bold(&format!("Users ({})", users.len()), config))?;
            for (index, name) in users.iter().enumerate() {
                writeln!(w, "  {} {}", dimmed(&format!("{index:>3}"), config), info(name, config))?;
            }
            Ok(())
        }
    }
}

/// Print a traversal order, labelled by the traversal kind.
pub fn print_traversal<W: Write>(
    w: &mut W,
    kind: &str,
    order: &[String],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &json!({ "traversal": kind, "order": order })),
        OutputMode::Text => writeln!(
            w,
            "{}: {}",
            bold(kind, config),
            colorize_names(order, " -> ", config)
        ),
    }
}

/// Print a shortest path.
pub fn print_path<W: Write>(
    w: &mut W,
    route: &ShortestPath,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, route),
        OutputMode::Text => writeln!(
            w,
            "{}: {} {}",
            bold("Path", config),
            colorize_names(&route.path, " -> ", config),
            dimmed(&format!("(distance {})", format_weight(route.distance)), config)
        ),
    }
}

/// Print connected components, one per line.
pub fn print_components<W: Write>(
    w: &mut W,
    components: &[Vec<String>],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &json!({ "components": components })),
        OutputMode::Text => {
            writeln!(
                w,
                "{}",
                bold(&format!("Components ({})", components.len()), config)
            )?;
            for (position, members) in components.iter().enumerate() {
                writeln!(
                    w,
                    "  {} {}",
                    dimmed(&format!("{}.", position + 1), config),
                    colorize_names(members, ", ", config)
                )?;
            }
            Ok(())
        }
    }
}

/// Print user degrees.
pub fn print_degrees<W: Write>(
    w: &mut W,
    degrees: &[UserDegree],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &json!({ "degrees": degrees })),
        OutputMode::Text => {
            let width = degrees.iter().map(|d| d.name.chars().count()).max().unwrap_or(0);
            for entry in degrees {
                let padded = format!("{:<width$}", entry.name);
                writeln!(w, "{}  {}", info(&padded, config), entry.degree)?;
            }
            Ok(())
        }
    }
}

/// Print the edge list.
pub fn print_connections<W: Write>(
    w: &mut W,
    connections: &[Connection],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &json!({ "connections": connections })),
        OutputMode::Text => {
            if connections.is_empty() {
                return writeln!(w, "{}", warning("No connections", config));
            }
            for edge in connections {
                writeln!(
                    w,
                    "{} {} {} {}",
                    info(&edge.a, config),
                    dimmed("--", config),
                    info(&edge.b, config),
                    dimmed(&format!("({})", format_weight(edge.weight)), config)
                )?;
            }
            Ok(())
        }
    }
}

/// Print a single named metric.
pub fn print_metric<W: Write>(
    w: &mut W,
    name: &str,
    value: f64,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &json!({ "metric": name, "value": value })),
        OutputMode::Text => writeln!(w, "{}: {value:.4}", bold(name, config)),
    }
}

/// Print the full statistics summary.
pub fn print_stats<W: Write>(
    w: &mut W,
    stats: &NetworkStats,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, stats),
        OutputMode::Text => {
            writeln!(w, "{}", bold("Network Statistics", config))?;
            writeln!(w, "  Users:            {}", stats.users)?;
            writeln!(w, "  Connections:      {}", stats.connections)?;
            writeln!(w, "  Components:       {}", stats.components)?;
            writeln!(w, "  Average friends:  {:.4}", stats.average_friends)?;
            writeln!(w, "  Density:          {:.4}", stats.density)?;
            writeln!(w, "  Clustering:       {:.4}", stats.clustering)
        }
    }
}

/// Print a pre-rendered block (matrix table, DOT source).
///
/// In JSON mode the block is wrapped under `key`.
pub fn print_block<W: Write>(
    w: &mut W,
    key: &str,
    block: &str,
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &json!({ key: block })),
        OutputMode::Text => write!(w, "{block}"),
    }
}
