//! Domain types for the social network.
//!
//! These are the values the graph store hands back to callers. None of them
//! reference the adjacency matrix directly, so they stay valid after the
//! network is mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight written by a plain `add_connection`.
///
/// Traversal and the friendship metrics only follow cells holding exactly
/// this value.
pub const CONNECTED: f64 = 1.0;

/// Matrix value meaning "no edge". Dijkstra treats it as infinite distance.
pub const SENTINEL: f64 = f64::INFINITY;

/// Result of a shortest path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Users along the route, starting with the source and ending with the target
    pub path: Vec<String>,

    /// Sum of the connection weights along `path`
    pub distance: f64,
}

impl ShortestPath {
    /// Number of connections traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (distance {})",
            self.path.join(" -> "),
            format_weight(self.distance)
        )
    }
}

/// A single undirected connection, reported once per user pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// User with the lower matrix index
    pub a: String,

    /// User with the higher (or equal, for a self-loop) matrix index
    pub b: String,

    /// Connection weight; `1` for an ordinary friendship
    pub weight: f64,
}

impl Connection {
    /// Whether both ends are the same user.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// A user together with their friend count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDegree {
    /// User name
    pub name: String,

    /// Number of cells equal to 1 in the user's matrix row
    pub degree: usize,
}

/// Summary of the whole network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Number of users
    pub users: usize,

    /// Number of distinct connections, self-loops and weighted edges included
    pub connections: usize,

    /// Number of connected components
    pub components: usize,

    /// Average friends per user (directed cell count over user count)
    pub average_friends: f64,

    /// Network density in `[0, 1]`
    pub density: f64,

    /// Average local clustering coefficient in `[0, 1]`
    pub clustering: f64,
}

/// Format a weight the way the matrix view does: integral values without a
/// fractional part.
pub fn format_weight(weight: f64) -> String {
    if weight.is_finite() && weight.fract() == 0.0 {
        format!("{weight:.0}")
    } else {
        format!("{weight}")
    }
}
