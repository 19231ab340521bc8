//! The graph store: users, friendships, and the algorithms over them.
//!
//! [`FriendGraph`] keeps users as dense indices into a square
//! [`AdjacencyMatrix`](matrix::AdjacencyMatrix) of `f64` weights. A missing
//! edge is stored as [`SENTINEL`] (positive infinity); an ordinary friendship
//! is stored as [`CONNECTED`] (`1.0`).
//!
//! # Indexing
//!
//! Indices are always contiguous in `0..len()`. Adding a user appends index
//! `len()`. Removing the user at index `k` deletes row and column `k` and
//! moves every user with an index above `k` down by one, so the matrix never
//! has holes.
//!
//! # Edge eligibility
//!
//! Different algorithms look at different edges:
//!
//! - BFS, DFS, degree and the friendship metrics follow cells equal to `1`.
//! - Connected components and Dijkstra follow any finite weight.
//!
//! With only `add_connection` in play the two rules agree. They diverge as
//! soon as [`FriendGraph::add_weighted_connection`] writes a weight other
//! than `1`.
//!
//! # Example
//!
//! ```
//! use friendnet::graph::FriendGraph;
//!
//! let mut graph = FriendGraph::new();
//! graph.add_user("alice").unwrap();
//! graph.add_user("bob").unwrap();
//! graph.add_user("carol").unwrap();
//! graph.add_connection("alice", "bob").unwrap();
//! graph.add_connection("bob", "carol").unwrap();
//!
//! assert_eq!(graph.bfs("alice").unwrap(), ["alice", "bob", "carol"]);
//! let route = graph.shortest_path("alice", "carol").unwrap();
//! assert_eq!(route.distance, 2.0);
//! ```

mod display;
pub(crate) mod matrix;
mod metrics;
mod shortest_path;
mod traversal;

use crate::domain::{CONNECTED, Connection, SENTINEL};
use crate::error::{Error, Result};
use matrix::AdjacencyMatrix;
use std::collections::HashMap;

/// Undirected social graph over an adjacency matrix.
#[derive(Debug, Clone, Default)]
pub struct FriendGraph {
    /// User name -> matrix index. A bijection onto `0..names.len()`.
    index_of: HashMap<String, usize>,

    /// Matrix index -> user name. Inverse of `index_of`.
    names: Vec<String>,

    /// Edge weights, `names.len()` square.
    matrix: AdjacencyMatrix,
}

impl FriendGraph {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the network has no users.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is a user.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of.contains_key(name)
    }

    /// Current matrix index of `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_of.get(name).copied()
    }

    /// All user names ordered by matrix index.
    pub fn all_users(&self) -> Vec<String> {
        self.names.clone()
    }

    /// Add a user with no connections.
    ///
    /// Returns the index assigned to the new user.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserAlreadyExists` if the name is taken; the network
    /// is left untouched.
    pub fn add_user(&mut self, name: &str) -> Result<usize> {
        if self.index_of.contains_key(name) {
            return Err(Error::UserAlreadyExists(name.to_string()));
        }

        let index = self.names.len();
        self.index_of.insert(name.to_string(), index);
        self.names.push(name.to_string());
        self.matrix.push_vertex();

        tracing::debug!(user = name, index, "Added user");
        Ok(index)
    }

    /// Remove a user and every connection touching them.
    ///
    /// Users with a higher index move down by one.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if the user does not exist.
    pub fn remove_user(&mut self, name: &str) -> Result<()> {
        let removed = self.require(name)?;

        self.matrix.remove_vertex_at(removed);
        self.names.remove(removed);
        self.index_of.remove(name);

        // Every name from `removed` onward slid left by one in `names`.
        for (index, shifted) in self.names.iter().enumerate().skip(removed) {
            if let Some(slot) = self.index_of.get_mut(shifted) {
                *slot = index;
            }
        }

        tracing::debug!(user = name, index = removed, "Removed user");
        Ok(())
    }

    /// Connect two users with the canonical friendship weight `1`.
    ///
    /// Connecting a user to themselves writes a diagonal cell.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if either user does not exist.
    pub fn add_connection(&mut self, a: &str, b: &str) -> Result<()> {
        self.set_connection(a, b, CONNECTED)
    }

    /// Connect two users with an explicit weight.
    ///
    /// Weights other than `1` are seen by shortest paths and connected
    /// components, but not by BFS, DFS or the friendship metrics.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidWeight` if `weight` is not finite or not positive
    /// - `Error::UserNotFound` if either user does not exist
    pub fn add_weighted_connection(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidWeight(weight));
        }
        self.set_connection(a, b, weight)
    }

    /// Remove the connection between two users.
    ///
    /// Both cells return to the sentinel. Removing a connection that does
    /// not exist succeeds without changing anything.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if either user does not exist.
    pub fn remove_connection(&mut self, a: &str, b: &str) -> Result<()> {
        self.set_connection(a, b, SENTINEL)
    }

    /// Weight of the connection between two users, `None` if they are not connected.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if either user does not exist.
    pub fn weight(&self, a: &str, b: &str) -> Result<Option<f64>> {
        let (i, j) = (self.require(a)?, self.require(b)?);
        let weight = self.matrix.get(i, j);
        Ok((weight < SENTINEL).then_some(weight))
    }

    /// Whether two users are friends (a connection of weight exactly `1`).
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if either user does not exist.
    pub fn are_connected(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.weight(a, b)? == Some(CONNECTED))
    }

    /// Every connection once, ordered by the lower endpoint's index.
    ///
    /// Includes self-loops and weighted connections.
    pub fn connections(&self) -> Vec<Connection> {
        let mut edges = Vec::new();
        for (i, row) in self.matrix.rows().enumerate() {
            for (j, &weight) in row.iter().enumerate().skip(i) {
                if weight < SENTINEL {
                    edges.push(Connection {
                        a: self.names[i].clone(),
                        b: self.names[j].clone(),
                        weight,
                    });
                }
            }
        }
        edges
    }

    /// Resolve a user name to its index.
    fn require(&self, name: &str) -> Result<usize> {
        self.index_of
            .get(name)
            .copied()
            .ok_or_else(|| Error::UserNotFound(name.to_string()))
    }

    fn set_connection(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        let (i, j) = (self.require(a)?, self.require(b)?);
        self.matrix.set_symmetric(i, j, weight);
        tracing::debug!(a, b, weight, "Updated connection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(users: &[&str]) -> FriendGraph {
        let mut graph = FriendGraph::new();
        for user in users {
            graph.add_user(user).unwrap();
        }
        graph
    }

    fn assert_consistent(graph: &FriendGraph) {
        assert!(graph.matrix.is_square());
        assert!(graph.matrix.is_symmetric());
        assert_eq!(graph.matrix.len(), graph.len());
        assert_eq!(graph.index_of.len(), graph.len());
        for (index, name) in graph.names.iter().enumerate() {
            assert_eq!(graph.index_of[name], index);
        }
    }

    #[test]
    fn test_add_user_assigns_next_index() {
        let mut graph = FriendGraph::new();
        assert_eq!(graph.add_user("alice").unwrap(), 0);
        assert_eq!(graph.add_user("bob").unwrap(), 1);
        assert_eq!(graph.len(), 2);
        assert_consistent(&graph);
    }

    #[test]
    fn test_add_duplicate_user_is_rejected() {
        let mut graph = graph_with(&["alice", "bob"]);
        graph.add_connection("alice", "bob").unwrap();
        let before = graph.matrix.clone();

        let result = graph.add_user("alice");

        assert!(matches!(result, Err(Error::UserAlreadyExists(name)) if name == "alice"));
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.matrix, before);
    }

    #[test]
    fn test_remove_user_reindexes_higher_users() {
        let mut graph = graph_with(&["A", "B", "C", "D"]);
        graph.add_connection("A", "C").unwrap();
        graph.add_connection("C", "D").unwrap();
        graph.add_connection("A", "B").unwrap();

        graph.remove_user("B").unwrap();

        assert_eq!(graph.index_of("A"), Some(0));
        assert_eq!(graph.index_of("C"), Some(1));
        assert_eq!(graph.index_of("D"), Some(2));
        assert_eq!(graph.index_of("B"), None);
        assert!(graph.are_connected("A", "C").unwrap());
        assert!(graph.are_connected("C", "D").unwrap());
        assert!(!graph.are_connected("A", "D").unwrap());
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_last_user() {
        let mut graph = graph_with(&["A", "B"]);
        graph.remove_user("B").unwrap();
        assert_eq!(graph.all_users(), ["A"]);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_missing_user() {
        let mut graph = graph_with(&["A"]);
        let result = graph.remove_user("Z");
        assert!(matches!(result, Err(Error::UserNotFound(name)) if name == "Z"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_connection_round_trip_restores_sentinel() {
        let mut graph = graph_with(&["A", "B"]);
        let before = graph.matrix.clone();

        graph.add_connection("A", "B").unwrap();
        assert_eq!(graph.matrix.get(0, 1), CONNECTED);
        graph.remove_connection("A", "B").unwrap();

        assert_eq!(graph.matrix, before);
        assert_eq!(graph.matrix.get(0, 1), SENTINEL);
    }

    #[test]
    fn test_connection_with_missing_user_changes_nothing() {
        let mut graph = graph_with(&["A"]);
        let before = graph.matrix.clone();

        assert!(matches!(
            graph.add_connection("A", "ghost"),
            Err(Error::UserNotFound(name)) if name == "ghost"
        ));
        assert!(graph.remove_connection("ghost", "A").is_err());
        assert_eq!(graph.matrix, before);
    }

    #[test]
    fn test_self_connection_writes_diagonal() {
        let mut graph = graph_with(&["A"]);
        graph.add_connection("A", "A").unwrap();
        assert_eq!(graph.matrix.get(0, 0), CONNECTED);
        assert_eq!(graph.connections().len(), 1);
        assert!(graph.connections()[0].is_self_loop());
    }

    #[test]
    fn test_weighted_connection_validation() {
        let mut graph = graph_with(&["A", "B"]);
        assert!(matches!(
            graph.add_weighted_connection("A", "B", 0.0),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(
            graph.add_weighted_connection("A", "B", f64::NAN),
            Err(Error::InvalidWeight(_))
        ));
        assert!(graph.add_weighted_connection("A", "B", f64::INFINITY).is_err());

        graph.add_weighted_connection("A", "B", 2.5).unwrap();
        assert_eq!(graph.weight("A", "B").unwrap(), Some(2.5));
        assert!(!graph.are_connected("A", "B").unwrap());
    }

    #[test]
    fn test_connections_listed_once() {
        let mut graph = graph_with(&["A", "B", "C"]);
        graph.add_connection("B", "A").unwrap();
        graph.add_weighted_connection("C", "B", 4.0).unwrap();

        let edges = graph.connections();
        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].a.as_str(), edges[0].b.as_str()), ("A", "B"));
        assert_eq!(
            (edges[1].a.as_str(), edges[1].b.as_str(), edges[1].weight),
            ("B", "C", 4.0)
        );
    }
}
