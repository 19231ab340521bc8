//! In-memory store: a [`FriendGraph`] behind an async mutex.
//!
//! All data lives in RAM and is lost when the process exits.

use super::GraphStore;
use crate::domain::{Connection, NetworkStats, ShortestPath, UserDegree};
use crate::error::Result;
use crate::graph::FriendGraph;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Thread-safe in-memory store.
pub(crate) type InMemoryStore = Arc<Mutex<FriendGraph>>;

/// Create an empty in-memory store.
pub fn new_in_memory_store() -> Box<dyn GraphStore> {
    Box::new(Arc::new(Mutex::new(FriendGraph::new())))
}

/// Wrap an existing graph in an in-memory store.
pub fn in_memory_store_from(graph: FriendGraph) -> Box<dyn GraphStore> {
    Box::new(Arc::new(Mutex::new(graph)))
}

#[async_trait]
impl GraphStore for InMemoryStore {
    async fn add_user(&mut self, name: &str) -> Result<usize> {
        self.lock().await.add_user(name)
    }

    async fn remove_user(&mut self, name: &str) -> Result<()> {
        self.lock().await.remove_user(name)
    }

    async fn add_connection(&mut self, a: &str, b: &str) -> Result<()> {
        self.lock().await.add_connection(a, b)
    }

    async fn add_weighted_connection(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        self.lock().await.add_weighted_connection(a, b, weight)
    }

    async fn remove_connection(&mut self, a: &str, b: &str) -> Result<()> {
        self.lock().await.remove_connection(a, b)
    }

    async fn all_users(&self) -> Result<Vec<String>> {
        Ok(self.lock().await.all_users())
    }

    async fn weight(&self, a: &str, b: &str) -> Result<Option<f64>> {
        self.lock().await.weight(a, b)
    }

    async fn bfs(&self, start: &str) -> Result<Vec<String>> {
        self.lock().await.bfs(start)
    }

    async fn dfs(&self, start: &str) -> Result<Vec<String>> {
        self.lock().await.dfs(start)
    }

    async fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath> {
        self.lock().await.shortest_path(start, end)
    }

    async fn connected_components(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.lock().await.connected_components())
    }

    async fn degree(&self, name: &str) -> Result<usize> {
        self.lock().await.degree(name)
    }

    async fn degrees(&self) -> Result<Vec<UserDegree>> {
        Ok(self.lock().await.degrees())
    }

    async fn connections(&self) -> Result<Vec<Connection>> {
        Ok(self.lock().await.connections())
    }

    async fn average_friends_per_user(&self) -> Result<f64> {
        Ok(self.lock().await.average_friends_per_user())
    }

    async fn network_density(&self) -> Result<f64> {
        Ok(self.lock().await.network_density())
    }

    async fn clustering_coefficient(&self) -> Result<f64> {
        Ok(self.lock().await.clustering_coefficient())
    }

    async fn stats(&self) -> Result<NetworkStats> {
        Ok(self.lock().await.stats())
    }

    async fn render_matrix(&self) -> Result<String> {
        Ok(self.lock().await.render_matrix())
    }

    async fn to_dot(&self) -> Result<String> {
        Ok(self.lock().await.to_dot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_store_round_trip() {
        let mut store = new_in_memory_store();
        store.add_user("alice").await.unwrap();
        store.add_user("bob").await.unwrap();
        store.add_connection("alice", "bob").await.unwrap();

        assert_eq!(store.weight("alice", "bob").await.unwrap(), Some(1.0));
        store.remove_connection("alice", "bob").await.unwrap();
        assert_eq!(store.weight("alice", "bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_reports_errors() {
        let mut store = new_in_memory_store();
        store.add_user("alice").await.unwrap();

        assert!(matches!(
            store.add_user("alice").await,
            Err(Error::UserAlreadyExists(_))
        ));
        assert!(matches!(
            store.bfs("nobody").await,
            Err(Error::UserNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_store_from_existing_graph() {
        let mut graph = FriendGraph::new();
        graph.add_user("alice").unwrap();
        let store = in_memory_store_from(graph);
        assert_eq!(store.all_users().await.unwrap(), ["alice"]);
    }

    #[tokio::test]
    async fn test_shared_handle_sees_mutations() {
        let shared: InMemoryStore = Arc::new(Mutex::new(FriendGraph::new()));
        let mut writer = Arc::clone(&shared);
        let reader = Arc::clone(&shared);

        let task = tokio::spawn(async move {
            writer.add_user("alice").await.unwrap();
            writer.add_user("bob").await.unwrap();
            writer.add_connection("alice", "bob").await.unwrap();
        });
        task.await.unwrap();

        assert_eq!(reader.bfs("bob").await.unwrap(), ["bob", "alice"]);
    }
}
