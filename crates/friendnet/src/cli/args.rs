//! Argument structs for session commands.
//!
//! Each input line is parsed with [`SessionLine`], so these structs define
//! the command language of the interactive session.

use clap::{Args, Parser, Subcommand};

use super::validators::{validate_user_name, validate_weight};

/// One parsed line of session input.
#[derive(Parser, Debug)]
#[command(name = "friendnet", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    /// Command to run
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands accepted by the session.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Add a user to the network
    AddUser(UserArgs),

    /// Remove a user and all of their connections
    ///
    /// Users added after the removed one shift down by one index.
    RemoveUser(UserArgs),

    /// Connect two users
    ///
    /// Without `--weight` the connection is an ordinary friendship.
    Connect(ConnectArgs),

    /// Remove the connection between two users
    Disconnect(PairArgs),

    /// List users in index order
    Users,

    /// Show the adjacency matrix
    Show,

    /// Breadth-first traversal from a user
    Bfs(UserArgs),

    /// Depth-first traversal from a user
    Dfs(UserArgs),

    /// Shortest path between two users
    Path(PairArgs),

    /// List connected components
    Components,

    /// Friend count of one user, or of every user
    Degree(DegreeArgs),

    /// List every connection once
    Edges,

    /// Average number of friends per user
    AverageFriends,

    /// Fraction of possible friendships that exist
    Density,

    /// Average local clustering coefficient
    Clustering,

    /// All network metrics
    Stats,

    /// Print the network in Graphviz DOT format
    Dot,

    /// End the session
    #[command(alias = "quit")]
    Exit,
}

/// A command that names one user.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct UserArgs {
    /// User name
    #[arg(value_parser = validate_user_name)]
    pub name: String,
}

/// A command that names two users.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct PairArgs {
    /// First user
    #[arg(value_parser = validate_user_name)]
    pub a: String,

    /// Second user
    #[arg(value_parser = validate_user_name)]
    pub b: String,
}

/// Arguments for the `connect` command.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ConnectArgs {
    /// First user
    #[arg(value_parser = validate_user_name)]
    pub a: String,

    /// Second user
    #[arg(value_parser = validate_user_name)]
    pub b: String,

    /// Connection weight (finite, greater than zero)
    #[arg(short, long, value_parser = validate_weight)]
    pub weight: Option<f64>,
}

/// Arguments for the `degree` command.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct DegreeArgs {
    /// User name; every user when omitted
    #[arg(value_parser = validate_user_name)]
    pub name: Option<String>,
}

impl SessionLine {
    /// Parse a whitespace-separated input line.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse_from(line.split_whitespace())
    }
}
