//! Dense, symmetric adjacency matrix.
//!
//! Rows and columns are positional: the user at index `i` owns row `i` and
//! column `i`. Removing a vertex shifts every later row and column down by
//! one, which is why the owning graph re-indexes its users at the same time.

use crate::domain::SENTINEL;

/// Square matrix of edge weights. Absent edges hold [`SENTINEL`].
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AdjacencyMatrix {
    rows: Vec<Vec<f64>>,
}

impl AdjacencyMatrix {
    /// Number of rows (and columns).
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Append a vertex with no edges.
    ///
    /// Every existing row grows by one sentinel column, then a new row of
    /// sentinels is pushed.
    pub(crate) fn push_vertex(&mut self) {
        let row_length = self.rows.len() + 1;
        for row in &mut self.rows {
            row.push(SENTINEL);
        }
        self.rows.push(vec![SENTINEL; row_length]);
    }

    /// Remove the vertex at `index`, dropping its row and its column.
    ///
    /// Caller guarantees `index < self.len()`.
    pub(crate) fn remove_vertex_at(&mut self, index: usize) {
        self.rows.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
    }

    /// Weight stored at `(i, j)`.
    pub(crate) fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Write `weight` to both `(i, j)` and `(j, i)`.
    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, weight: f64) {
        self.rows[i][j] = weight;
        self.rows[j][i] = weight;
    }

    /// The full row for vertex `i`.
    pub(crate) fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Iterate all rows in index order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Count cells for which `predicate` holds, optionally skipping the diagonal.
    pub(crate) fn count_cells(
        &self,
        include_diagonal: bool,
        predicate: impl Fn(f64) -> bool,
    ) -> usize {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, &w)| (include_diagonal || i != j) && predicate(w))
                    .count()
            })
            .sum()
    }

    /// Whether every row has exactly `len()` columns.
    #[cfg(test)]
    pub(crate) fn is_square(&self) -> bool {
        let n = self.rows.len();
        self.rows.iter().all(|row| row.len() == n)
    }

    /// Whether `(i, j)` equals `(j, i)` for every pair.
    #[cfg(test)]
    pub(crate) fn is_symmetric(&self) -> bool {
        let n = self.rows.len();
        (0..n).all(|i| (0..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_vertex_grows_square() {
        let mut matrix = AdjacencyMatrix::default();
        for expected in 1..=4 {
            matrix.push_vertex();
            assert_eq!(matrix.len(), expected);
            assert!(matrix.is_square());
        }
        assert!(matrix.rows().flatten().all(|&w| w == SENTINEL));
    }

    #[test]
    fn test_set_symmetric() {
        let mut matrix = AdjacencyMatrix::default();
        matrix.push_vertex();
        matrix.push_vertex();
        matrix.set_symmetric(0, 1, 1.0);
        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.get(1, 0), 1.0);
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn test_remove_vertex_shifts_later_cells() {
        let mut matrix = AdjacencyMatrix::default();
        for _ in 0..3 {
            matrix.push_vertex();
        }
        matrix.set_symmetric(0, 2, 7.0);
        matrix.set_symmetric(1, 2, 3.0);

        matrix.remove_vertex_at(1);

        assert_eq!(matrix.len(), 2);
        assert!(matrix.is_square());
        assert_eq!(matrix.get(0, 1), 7.0);
        assert_eq!(matrix.get(1, 0), 7.0);
    }

    #[test]
    fn test_count_cells_diagonal_toggle() {
        let mut matrix = AdjacencyMatrix::default();
        matrix.push_vertex();
        matrix.push_vertex();
        matrix.set_symmetric(0, 0, 1.0);
        matrix.set_symmetric(0, 1, 1.0);

        assert_eq!(matrix.count_cells(true, |w| w == 1.0), 3);
        assert_eq!(matrix.count_cells(false, |w| w == 1.0), 2);
    }
}
