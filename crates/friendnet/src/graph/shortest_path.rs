//! Dijkstra shortest path over connection weights.

use super::FriendGraph;
use crate::domain::{SENTINEL, ShortestPath};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority queue entry, ordered so that `BinaryHeap` pops the smallest
/// distance first and, among equal distances, the smallest name.
#[derive(Debug)]
struct Candidate<'a> {
    distance: f64,
    name: &'a str,
    index: usize,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.name.cmp(self.name))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl FriendGraph {
    /// Cheapest route between two users.
    ///
    /// Every finite weight is an edge. The search stops as soon as `end` is
    /// popped from the queue.
    ///
    /// # Errors
    ///
    /// - `Error::UserNotFound` if either user does not exist
    /// - `Error::NoPath` if `end` is unreachable from `start`
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath> {
        let source = self.require(start)?;
        let target = self.require(end)?;
        let n = self.len();

        let mut distances = vec![SENTINEL; n];
        let mut previous: Vec<Option<usize>> = vec![None; n];
        let mut queue = BinaryHeap::new();

        distances[source] = 0.0;
        queue.push(Candidate {
            distance: 0.0,
            name: &self.names[source],
            index: source,
        });

        while let Some(Candidate {
            distance, index, ..
        }) = queue.pop()
        {
            if distance > distances[index] {
                continue;
            }

            if index == target {
                return Ok(ShortestPath {
                    path: self.unwind(&previous, target),
                    distance,
                });
            }

            for (neighbor, &weight) in self.matrix.row(index).iter().enumerate() {
                if weight == SENTINEL {
                    continue;
                }
                let candidate = distance + weight;
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    previous[neighbor] = Some(index);
                    queue.push(Candidate {
                        distance: candidate,
                        name: &self.names[neighbor],
                        index: neighbor,
                    });
                }
            }
        }

        Err(Error::NoPath {
            from: start.to_string(),
            to: end.to_string(),
        })
    }

    /// Follow predecessor links back from `target` and reverse them.
    fn unwind(&self, previous: &[Option<usize>], target: usize) -> Vec<String> {
        let mut path = vec![self.names[target].clone()];
        let mut current = target;
        while let Some(prior) = previous[current] {
            path.push(self.names[prior].clone());
            current = prior;
        }
        path.reverse();
        path
    }
}
