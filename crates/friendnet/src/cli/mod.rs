//! Command-line interface for friendnet.
//!
//! The binary runs a line-oriented session: each line of standard input is
//! one command, parsed with clap's derive API. Results are printed as text
//! or, with `--json`, as one JSON object per line.
//!
//! # Commands
//!
//! - `add-user <name>` / `remove-user <name>`
//! - `connect <a> <b> [--weight <w>]` / `disconnect <a> <b>`
//! - `users`, `show`, `edges`, `degree [name]`
//! - `bfs <name>`, `dfs <name>`, `path <from> <to>`, `components`
//! - `average-friends`, `density`, `clustering`, `stats`
//! - `dot`, `exit`
//!
//! Blank lines and lines starting with `#` are ignored.
//!
//! # Example
//!
//! ```bash
//! printf 'add-user alice\nadd-user bob\nconnect alice bob\nbfs alice\n' | friendnet
//! friendnet --config network.yaml --json < queries.txt
//! ```

mod args;
mod execute;
mod validators;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::app::App;
use crate::output::{OutputConfig, OutputMode};

// Re-export argument structs
pub use args::{ConnectArgs, DegreeArgs, PairArgs, SessionCommand, SessionLine, UserArgs};

pub use execute::{Flow, Outcome, execute_command};

// Re-export validators for external use
pub use validators::{MAX_USER_NAME_LENGTH, validate_user_name, validate_weight};

const PROMPT: &str = "friendnet> ";

/// Friendnet - a small social network you can query from the terminal
///
/// Reads one command per line from standard input. Type `help` for the
/// list of commands.
#[derive(Parser, Debug)]
#[command(name = "friendnet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long)]
    pub json: bool,

    /// YAML file with users and connections to load at startup
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Stop at the first rejected command and exit with an error
    #[arg(long)]
    pub fail_fast: bool,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands that ran successfully
    pub succeeded: usize,
    /// Commands rejected by the store or by argument parsing
    pub rejected: usize,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Run a session over standard input.
    pub async fn execute(&self) -> Result<()> {
        let mut app = match &self.config {
            Some(path) => App::from_config(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => App::new(),
        };

        let interactive = std::io::stdin().is_terminal() && !self.json;
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        let config = OutputConfig::from_env();

        let summary = run_session(
            &mut app,
            stdin,
            &mut stdout,
            &SessionOptions {
                mode: self.output_mode(),
                config,
                prompt: interactive,
                fail_fast: self.fail_fast,
            },
        )
        .await?;

        tracing::debug!(
            succeeded = summary.succeeded,
            rejected = summary.rejected,
            "Session finished"
        );

        if self.fail_fast && summary.rejected > 0 {
            anyhow::bail!("Session stopped after a rejected command");
        }
        Ok(())
    }
}

/// Settings for [`run_session`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Text or JSON output
    pub mode: OutputMode,
    /// Color settings
    pub config: OutputConfig,
    /// Print a prompt before each line
    pub prompt: bool,
    /// Stop after the first rejected command
    pub fail_fast: bool,
}

/// Read commands from `input` until `exit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Rejected
/// commands are counted, not returned.
pub async fn run_session<R, W>(
    app: &mut App,
    input: R,
    out: &mut W,
    options: &SessionOptions,
) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    loop {
        if options.prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = match SessionLine::parse_line(trimmed) {
            Ok(parsed) => parsed.command,
            Err(err) if err.kind() == clap::error::ErrorKind::DisplayHelp => {
                write!(out, "{}", err.render())?;
                continue;
            }
            Err(err) => {
                tracing::warn!(line = trimmed, "Could not parse command");
                let message = err.render().to_string();
                let first_line = message.lines().next().unwrap_or_default();
                crate::output::print_error(
                    out,
                    &first_line.trim_start_matches("error: "),
                    options.mode,
                    &options.config,
                )?;
                summary.rejected += 1;
                if options.fail_fast {
                    break;
                }
                continue;
            }
        };

        match execute_command(app, &command, out, options.mode, &options.config).await? {
            Outcome::Done(Flow::Continue) => summary.succeeded += 1,
            Outcome::Done(Flow::Exit) => break,
            Outcome::Rejected(_) => {
                summary.rejected += 1;
                if options.fail_fast {
                    break;
                }
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(mode: OutputMode, fail_fast: bool) -> SessionOptions {
        SessionOptions {
            mode,
            config: OutputConfig::new(false),
            prompt: false,
            fail_fast,
        }
    }

    async fn session(script: &str, options: &SessionOptions) -> (String, SessionSummary) {
        let mut app = App::new();
        let mut out = Vec::new();
        let summary = run_session(&mut app, script.as_bytes(), &mut out, options)
            .await
            .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    // ========== CLI Parsing Tests ==========

    #[test]
    fn test_parse_no_flags() {
        let cli = Cli::try_parse_from(["friendnet"]).unwrap();
        assert!(!cli.json);
        assert!(cli.config.is_none());
        assert_eq!(cli.output_mode(), OutputMode::Text);
    }

    #[test]
    fn test_parse_json_and_config() {
        let cli = Cli::try_parse_from(["friendnet", "--json", "-c", "net.yaml"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Json);
        assert_eq!(cli.config, Some(PathBuf::from("net.yaml")));
    }

    // ========== Session Tests ==========

    #[tokio::test]
    async fn test_session_runs_script() {
        let script = "\
# build a path graph
add-user A
add-user B
add-user C

connect A B
connect B C
bfs A
dfs A
";
        let (out, summary) = session(script, &options(OutputMode::Text, false)).await;
        assert_eq!(summary, SessionSummary { succeeded: 7, rejected: 0 });
        assert!(out.contains("BFS: A -> B -> C\n"));
        assert!(out.contains("DFS: A -> B -> C\n"));
    }

    #[tokio::test]
    async fn test_session_continues_after_rejection() {
        let script = "add-user A\nbfs Z\nfly away\nusers\n";
        let (out, summary) = session(script, &options(OutputMode::Text, false)).await;
        assert_eq!(summary, SessionSummary { succeeded: 2, rejected: 2 });
        assert!(out.contains("error: User not found: Z"));
    }

    #[tokio::test]
    async fn test_session_fail_fast_stops() {
        let script = "bfs Z\nadd-user A\n";
        let (out, summary) = session(script, &options(OutputMode::Text, true)).await;
        assert_eq!(summary, SessionSummary { succeeded: 0, rejected: 1 });
        assert!(!out.contains("Added user"));
    }

    #[tokio::test]
    async fn test_session_exit_ignores_rest() {
        let script = "add-user A\nexit\nadd-user B\n";
        let (_, summary) = session(script, &options(OutputMode::Text, false)).await;
        assert_eq!(summary.succeeded, 1);
    }

    #[tokio::test]
    async fn test_session_json_lines() {
        let script = "add-user A\nadd-user B\nconnect A B\ndensity\n";
        let (out, _) = session(script, &options(OutputMode::Json, false)).await;
        let last: serde_json::Value =
            serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["metric"], "Network density");
        assert_eq!(last["value"], 1.0);
    }

    #[tokio::test]
    async fn test_session_help_is_not_a_rejection() {
        let (out, summary) = session("help\n", &options(OutputMode::Text, false)).await;
        assert_eq!(summary, SessionSummary::default());
        assert!(out.contains("add-user"));
    }
}
