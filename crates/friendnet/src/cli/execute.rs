//! Command execution logic.
//!
//! Each session command maps to one store call followed by one printer
//! call. Store failures are values: they are printed and the session goes
//! on. Only output failures abort the session.

use std::io::Write;

use super::args::{ConnectArgs, DegreeArgs, PairArgs, SessionCommand, UserArgs};
use crate::app::App;
use crate::domain::UserDegree;
use crate::error::{Error, Result};
use crate::output::{self, OutputConfig, OutputMode};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop the session
    Exit,
}

/// Outcome of one executed command.
#[derive(Debug)]
pub enum Outcome {
    /// The command ran and its result was printed
    Done(Flow),
    /// The store rejected the command; the error was printed
    Rejected(Error),
}

/// Execute one session command against the app, printing its result.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails.
pub async fn execute_command<W: Write>(
    app: &mut App,
    command: &SessionCommand,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> std::io::Result<Outcome> {
    match run(app, command, out, mode, config).await {
        Ok(flow) => Ok(Outcome::Done(flow)),
        Err(Error::Io(e)) => Err(e),
        Err(err) => {
            tracing::warn!(error = %err, "Command rejected");
            output::print_error(out, &err, mode, config)?;
            Ok(Outcome::Rejected(err))
        }
    }
}

async fn run<W: Write>(
    app: &mut App,
    command: &SessionCommand,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<Flow> {
    match command {
        SessionCommand::AddUser(args) => execute_add_user(app, args, out, mode, config).await?,
        SessionCommand::RemoveUser(args) => {
            execute_remove_user(app, args, out, mode, config).await?;
        }
        SessionCommand::Connect(args) => execute_connect(app, args, out, mode, config).await?,
        SessionCommand::Disconnect(args) => {
            execute_disconnect(app, args, out, mode, config).await?;
        }
        SessionCommand::Users => {
            let users = app.store().all_users().await?;
            output::print_users(out, &users, mode, config)?;
        }
        SessionCommand::Show => {
            let table = app.store().render_matrix().await?;
            output::print_block(out, "matrix", &table, mode)?;
        }
        SessionCommand::Bfs(args) => {
            let order = app.store().bfs(&args.name).await?;
            output::print_traversal(out, "BFS", &order, mode, config)?;
        }
        SessionCommand::Dfs(args) => {
            let order = app.store().dfs(&args.name).await?;
            output::print_traversal(out, "DFS", &order, mode, config)?;
        }
        SessionCommand::Path(args) => {
            let route = app.store().shortest_path(&args.a, &args.b).await?;
            output::print_path(out, &route, mode, config)?;
        }
        SessionCommand::Components => {
            let components = app.store().connected_components().await?;
            output::print_components(out, &components, mode, config)?;
        }
        SessionCommand::Degree(args) => execute_degree(app, args, out, mode, config).await?,
        SessionCommand::Edges => {
            let connections = app.store().connections().await?;
            output::print_connections(out, &connections, mode, config)?;
        }
        SessionCommand::AverageFriends => {
            let value = app.store().average_friends_per_user().await?;
            output::print_metric(out, "Average friends per user", value, mode, config)?;
        }
        SessionCommand::Density => {
            let value = app.store().network_density().await?;
            output::print_metric(out, "Network density", value, mode, config)?;
        }
        SessionCommand::Clustering => {
            let value = app.store().clustering_coefficient().await?;
            output::print_metric(out, "Clustering coefficient", value, mode, config)?;
        }
        SessionCommand::Stats => {
            let stats = app.store().stats().await?;
            output::print_stats(out, &stats, mode, config)?;
        }
        SessionCommand::Dot => {
            let dot = app.store().to_dot().await?;
            output::print_block(out, "dot", &dot, mode)?;
        }
        SessionCommand::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

async fn execute_add_user<W: Write>(
    app: &mut App,
    args: &UserArgs,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let index = app.store_mut().add_user(&args.name).await?;
    output::print_success(
        out,
        &format!("Added user {} (index {index})", args.name),
        mode,
        config,
    )?;
    Ok(())
}

async fn execute_remove_user<W: Write>(
    app: &mut App,
    args: &UserArgs,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    app.store_mut().remove_user(&args.name).await?;
    output::print_success(out, &format!("Removed user {}", args.name), mode, config)?;
    Ok(())
}

async fn execute_connect<W: Write>(
    app: &mut App,
    args: &ConnectArgs,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let store = app.store_mut();
    match args.weight {
        Some(weight) => store.add_weighted_connection(&args.a, &args.b, weight).await?,
        None => store.add_connection(&args.a, &args.b).await?,
    }
    output::print_success(
        out,
        &format!("Connected {} and {}", args.a, args.b),
        mode,
        config,
    )?;
    Ok(())
}

async fn execute_disconnect<W: Write>(
    app: &mut App,
    args: &PairArgs,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    app.store_mut().remove_connection(&args.a, &args.b).await?;
    output::print_success(
        out,
        &format!("Disconnected {} and {}", args.a, args.b),
        mode,
        config,
    )?;
    Ok(())
}

async fn execute_degree<W: Write>(
    app: &mut App,
    args: &DegreeArgs,
    out: &mut W,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let degrees = match &args.name {
        Some(name) => vec![UserDegree {
            name: name.clone(),
            degree: app.store().degree(name).await?,
        }],
        None => app.store().degrees().await?,
    };
    output::print_degrees(out, &degrees, mode, config)?;
    Ok(())
}
