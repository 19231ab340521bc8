//! Network-wide metrics: degree, average friends, density, clustering.
//!
//! All of these count friendships, i.e. cells equal to `1`. Weighted
//! connections are invisible here.

use super::FriendGraph;
use crate::domain::{CONNECTED, NetworkStats, UserDegree};
use crate::error::Result;
use petgraph::graph::{NodeIndex, UnGraph};

impl FriendGraph {
    /// Number of cells equal to `1` in the user's row.
    ///
    /// A self-loop counts once.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if the user does not exist.
    pub fn degree(&self, name: &str) -> Result<usize> {
        let index = self.require(name)?;
        Ok(row_degree(self.matrix.row(index)))
    }

    /// Degree of every user, in index order.
    pub fn degrees(&self) -> Vec<UserDegree> {
        self.names
            .iter()
            .zip(self.matrix.rows())
            .map(|(name, row)| UserDegree {
                name: name.clone(),
                degree: row_degree(row),
            })
            .collect()
    }

    /// Friendship cells divided by user count.
    ///
    /// Each friendship is seen from both ends, so this is the mean degree.
    /// Returns `0.0` for an empty network.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_friends_per_user(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let cells = self.matrix.count_cells(true, |w| w == CONNECTED);
        cells as f64 / self.len() as f64
    }

    /// Friendships present divided by friendships possible, `n(n-1)/2`.
    ///
    /// Self-loops are not counted. Returns `0.0` with fewer than two users.
    #[allow(clippy::cast_precision_loss)]
    pub fn network_density(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }
        let actual = self.matrix.count_cells(false, |w| w == CONNECTED) as f64 / 2.0;
        let possible = (n * (n - 1)) as f64 / 2.0;
        actual / possible
    }

    /// Average local clustering coefficient over all users.
    ///
    /// Users with fewer than two friends contribute `0`. Self-loops are
    /// dropped before counting.
    #[allow(clippy::cast_precision_loss)]
    pub fn clustering_coefficient(&self) -> f64 {
        let graph = self.friendship_graph();
        if graph.node_count() == 0 {
            return 0.0;
        }

        let total: f64 = graph
            .node_indices()
            .map(|node| local_clustering(&graph, node))
            .sum();
        total / graph.node_count() as f64
    }

    /// All metrics in one pass over the store.
    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            users: self.len(),
            connections: self.connections().len(),
            components: self.connected_components().len(),
            average_friends: self.average_friends_per_user(),
            density: self.network_density(),
            clustering: self.clustering_coefficient(),
        }
    }

    /// Simple undirected graph of friendships (`i < j`, weight `1`).
    ///
    /// Node `i` of the result corresponds to matrix index `i`.
    pub(crate) fn friendship_graph(&self) -> UnGraph<&str, ()> {
        let mut graph = UnGraph::with_capacity(self.len(), 0);
        for name in &self.names {
            graph.add_node(name.as_str());
        }
        for (i, row) in self.matrix.rows().enumerate() {
            for (j, &weight) in row.iter().enumerate().skip(i + 1) {
                if weight == CONNECTED {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }
        graph
    }
}

fn row_degree(row: &[f64]) -> usize {
    row.iter().filter(|&&w| w == CONNECTED).count()
}

/// Fraction of neighbor pairs of `node` that are themselves connected.
#[allow(clippy::cast_precision_loss)]
fn local_clustering(graph: &UnGraph<&str, ()>, node: NodeIndex) -> f64 {
    let neighbors: Vec<NodeIndex> = graph.neighbors(node).collect();
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let mut links = 0usize;
    for (position, &u) in neighbors.iter().enumerate() {
        for &v in &neighbors[position + 1..] {
            if graph.contains_edge(u, v) {
                links += 1;
            }
        }
    }

    let possible = (k * (k - 1)) as f64 / 2.0;
    links as f64 / possible
}
