//! Breadth-first and depth-first traversal, plus connected components.
//!
//! BFS and DFS follow cells equal to `1`; component discovery follows any
//! finite weight. See the module docs on [`FriendGraph`] for why both rules
//! exist.

use super::FriendGraph;
use crate::domain::{CONNECTED, SENTINEL};
use crate::error::Result;
use std::collections::VecDeque;

impl FriendGraph {
    /// Breadth-first visitation order starting at `start`.
    ///
    /// Neighbors are discovered in increasing index order and marked visited
    /// when enqueued. Only the start's component is visited.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if `start` does not exist.
    pub fn bfs(&self, start: &str) -> Result<Vec<String>> {
        let start = self.require(start)?;
        let n = self.len();

        let mut visited = vec![false; n];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            order.push(self.names[current].clone());
            for (neighbor, &weight) in self.matrix.row(current).iter().enumerate() {
                if weight == CONNECTED && !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(order)
    }

    /// Depth-first visitation order starting at `start`.
    ///
    /// Iterative: neighbors are pushed in increasing index order and marked
    /// visited on push, so the highest-index neighbor is explored first.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if `start` does not exist.
    pub fn dfs(&self, start: &str) -> Result<Vec<String>> {
        let start = self.require(start)?;
        let order = self.depth_first(start, &mut vec![false; self.len()], |w| {
            w == CONNECTED
        });
        Ok(order
            .into_iter()
            .map(|index| self.names[index].clone())
            .collect())
    }

    /// Partition users into connected components.
    ///
    /// Users are taken in index order as component seeds; any finite weight
    /// counts as an edge. Isolated users form singleton components.
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        let mut visited = vec![false; self.len()];
        let mut components = Vec::new();

        for seed in 0..self.len() {
            if visited[seed] {
                continue;
            }
            let members = self.depth_first(seed, &mut visited, |w| w < SENTINEL);
            components.push(
                members
                    .into_iter()
                    .map(|index| self.names[index].clone())
                    .collect(),
            );
        }

        components
    }

    /// Stack-based DFS from `start` over cells accepted by `follows`.
    ///
    /// `visited` is shared so callers can sweep several components.
    fn depth_first(
        &self,
        start: usize,
        visited: &mut [bool],
        follows: impl Fn(f64) -> bool,
    ) -> Vec<usize> {
        let mut order = Vec::new();
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(current) = stack.pop() {
            order.push(current);
            for (neighbor, &weight) in self.matrix.row(current).iter().enumerate() {
                if follows(weight) && !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }

        order
    }
}
