//! Seed configuration for a session.
//!
//! A session can start from a YAML file listing users and connections:
//!
//! ```yaml
//! users: [alice, bob, carol]
//! connections:
//!   - { a: alice, b: bob }
//!   - { a: bob, b: carol, weight: 2.5 }
//! ```
//!
//! The file is only read; the network is never written back.

use crate::cli::validate_user_name;
use crate::error::{Error, Result};
use crate::store::GraphStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;

/// Users and connections to load before the first command runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Users, added in order
    #[serde(default)]
    pub users: Vec<String>,

    /// Connections between listed users
    #[serde(default)]
    pub connections: Vec<SeedConnection>,
}

/// One connection in the seed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConnection {
    /// One endpoint
    pub a: String,

    /// The other endpoint
    pub b: String,

    /// Optional weight; plain friendship when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl NetworkConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        Self::from_yaml(&content)
    }

    /// Add every user and connection to `store`.
    ///
    /// Names go through the same validation as session arguments, so
    /// surrounding whitespace is trimmed and empty names or names with
    /// control characters are refused.
    ///
    /// Any failure is reported as `Error::Config` naming the offending entry.
    pub async fn apply(&self, store: &mut dyn GraphStore) -> Result<()> {
        for (position, user) in self.users.iter().enumerate() {
            let entry = format!("users[{position}]");
            let name = validate_user_name(user).map_err(|e| entry_error(&entry, e))?;
            store
                .add_user(&name)
                .await
                .map_err(|e| entry_error(&entry, e))?;
        }

        for (position, seed) in self.connections.iter().enumerate() {
            let entry = format!("connections[{position}]");
            let a = validate_user_name(&seed.a).map_err(|e| entry_error(&entry, e))?;
            let b = validate_user_name(&seed.b).map_err(|e| entry_error(&entry, e))?;
            let outcome = match seed.weight {
                Some(weight) => store.add_weighted_connection(&a, &b, weight).await,
                None => store.add_connection(&a, &b).await,
            };
            outcome.map_err(|e| entry_error(&entry, e))?;
        }

        tracing::info!(
            users = self.users.len(),
            connections = self.connections.len(),
            "Loaded seed network"
        );
        Ok(())
    }
}

fn entry_error(entry: &str, err: impl fmt::Display) -> Error {
    Error::Config(format!("{entry}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::new_in_memory_store;
    use rstest::rstest;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
users: [alice, bob, carol]
connections:
  - { a: alice, b: bob }
  - { a: bob, b: carol, weight: 2.5 }
";

    #[test]
    fn test_parse_yaml() {
        let config = NetworkConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.users, ["alice", "bob", "carol"]);
        assert_eq!(config.connections.len(), 2);
        assert_eq!(config.connections[0].weight, None);
        assert_eq!(config.connections[1].weight, Some(2.5));
    }

    #[test]
    fn test_parse_empty_document() {
        let config = NetworkConfig::from_yaml("{}").unwrap();
        assert_eq!(config, NetworkConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = NetworkConfig::from_yaml("people: [alice]");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_load_from_file_and_apply() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("network.yaml");
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let config = NetworkConfig::load(&path).await.unwrap();
        let mut store = new_in_memory_store();
        config.apply(store.as_mut()).await.unwrap();

        assert_eq!(store.all_users().await.unwrap(), ["alice", "bob", "carol"]);
        assert_eq!(store.weight("bob", "carol").await.unwrap(), Some(2.5));
        assert_eq!(store.bfs("alice").await.unwrap(), ["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = NetworkConfig::load(&temp_dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_apply_reports_unknown_user() {
        let config = NetworkConfig {
            users: vec!["alice".into()],
            connections: vec![SeedConnection {
                a: "alice".into(),
                b: "ghost".into(),
                weight: None,
            }],
        };
        let mut store = new_in_memory_store();
        let err = config.apply(store.as_mut()).await.unwrap_err();
        assert!(err.to_string().contains("connections[0]"));
        assert!(err.to_string().contains("ghost"));
    }

    #[tokio::test]
    async fn test_apply_reports_duplicate_user() {
        let config = NetworkConfig {
            users: vec!["alice".into(), "alice".into()],
            connections: vec![],
        };
        let mut store = new_in_memory_store();
        let err = config.apply(store.as_mut()).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_apply_trims_names() {
        let config = NetworkConfig::from_yaml(
            "users: [\"  alice  \", bob]\nconnections:\n  - { a: \" alice\", b: \"bob \" }\n",
        )
        .unwrap();
        let mut store = new_in_memory_store();
        config.apply(store.as_mut()).await.unwrap();

        assert_eq!(store.all_users().await.unwrap(), ["alice", "bob"]);
        assert!(store.are_connected("alice", "bob").await.unwrap());
    }

    #[rstest]
    #[case::empty("users: [\"\"]", "users[0]")]
    #[case::blank("users: [alice, \"   \"]", "users[1]")]
    #[case::newline("users: [\"a\\nb\"]", "users[0]")]
    #[case::bad_endpoint(
        "users: [alice]\nconnections:\n  - { a: alice, b: \"\" }",
        "connections[0]"
    )]
    #[tokio::test]
    async fn test_apply_rejects_invalid_names(#[case] yaml: &str, #[case] entry: &str) {
        let config = NetworkConfig::from_yaml(yaml).unwrap();
        let mut store = new_in_memory_store();

        let err = config.apply(store.as_mut()).await.unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(entry), "{err}");
    }
}
