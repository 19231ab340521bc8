//! Storage abstraction over the friendship graph.
//!
//! Front-ends talk to the network through the [`GraphStore`] trait instead of
//! holding a [`FriendGraph`](crate::graph::FriendGraph) directly. The trait is
//! object-safe, so callers keep a `Box<dyn GraphStore>` and never see how
//! the graph is shared.
//!
//! # Locking
//!
//! The in-memory backend wraps the graph in `Arc<Mutex<FriendGraph>>`. Each
//! method takes the lock once and holds it until it returns, so a traversal
//! always runs against a graph that cannot change underneath it.
//!
//! # Example
//!
//! ```
//! use friendnet::store::{GraphStore, new_in_memory_store};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut store = new_in_memory_store();
//!     store.add_user("alice").await?;
//!     store.add_user("bob").await?;
//!     store.add_connection("alice", "bob").await?;
//!
//!     assert_eq!(store.bfs("alice").await?, ["alice", "bob"]);
//!     Ok(())
//! }
//! ```

use crate::domain::{Connection, NetworkStats, ShortestPath, UserDegree};
use crate::error::Result;
use async_trait::async_trait;

pub mod in_memory;

pub use in_memory::new_in_memory_store;

/// Operations available on a social network.
///
/// # Method Categories
///
/// - **Mutation**: `add_user`, `remove_user`, `add_connection`,
///   `add_weighted_connection`, `remove_connection`
/// - **Queries**: `all_users`, `weight`, `bfs`, `dfs`, `shortest_path`,
///   `connected_components`, `degree`, `degrees`, `connections`
/// - **Metrics**: `average_friends_per_user`, `network_density`,
///   `clustering_coefficient`, `stats`
/// - **Views**: `render_matrix`, `to_dot`
///
/// # Error Handling
///
/// - `UserNotFound`: a referenced user does not exist
/// - `UserAlreadyExists`: duplicate `add_user`
/// - `NoPath`: `shortest_path` between disconnected users
/// - `InvalidWeight`: non-positive or non-finite weight
///
/// A failed call never changes the network.
#[async_trait]
pub trait GraphStore: Send + Sync {
    // ========== Mutation ==========

    /// Add a user, returning the assigned index.
    async fn add_user(&mut self, name: &str) -> Result<usize>;

    /// Remove a user and all their connections.
    async fn remove_user(&mut self, name: &str) -> Result<()>;

    /// Connect two users with weight `1`.
    async fn add_connection(&mut self, a: &str, b: &str) -> Result<()>;

    /// Connect two users with an explicit weight.
    async fn add_weighted_connection(&mut self, a: &str, b: &str, weight: f64) -> Result<()>;

    /// Remove the connection between two users.
    async fn remove_connection(&mut self, a: &str, b: &str) -> Result<()>;

    // ========== Queries ==========

    /// All users in index order.
    async fn all_users(&self) -> Result<Vec<String>>;

    /// Connection weight between two users, `None` if unconnected.
    async fn weight(&self, a: &str, b: &str) -> Result<Option<f64>>;

    /// Breadth-first order from `start`.
    async fn bfs(&self, start: &str) -> Result<Vec<String>>;

    /// Depth-first order from `start`.
    async fn dfs(&self, start: &str) -> Result<Vec<String>>;

    /// Cheapest route between two users.
    async fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath>;

    /// Connected components.
    async fn connected_components(&self) -> Result<Vec<Vec<String>>>;

    /// Friend count of one user.
    async fn degree(&self, name: &str) -> Result<usize>;

    /// Friend count of every user.
    async fn degrees(&self) -> Result<Vec<UserDegree>>;

    /// Every connection once.
    async fn connections(&self) -> Result<Vec<Connection>>;

    // ========== Metrics ==========

    /// Mean number of friends per user.
    async fn average_friends_per_user(&self) -> Result<f64>;

    /// Fraction of possible friendships present.
    async fn network_density(&self) -> Result<f64>;

    /// Average local clustering coefficient.
    async fn clustering_coefficient(&self) -> Result<f64>;

    /// All metrics at once.
    async fn stats(&self) -> Result<NetworkStats>;

    // ========== Views ==========

    /// Text table of the adjacency matrix.
    async fn render_matrix(&self) -> Result<String>;

    /// Graphviz DOT of the network.
    async fn to_dot(&self) -> Result<String>;
}
