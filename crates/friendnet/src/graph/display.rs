//! Text and DOT views of the network.
//!
//! Both are derived on demand; nothing here is stored.

use super::FriendGraph;
use crate::domain::{CONNECTED, SENTINEL, format_weight};
use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

impl FriendGraph {
    /// Render the adjacency matrix as a table.
    ///
    /// Rows and columns are labelled by user name in sorted order. Missing
    /// connections are shown as `0`.
    pub fn render_matrix(&self) -> String {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| self.names[a].cmp(&self.names[b]));

        let cells: Vec<Vec<String>> = order
            .iter()
            .map(|&i| {
                order
                    .iter()
                    .map(|&j| match self.matrix.get(i, j) {
                        w if w == SENTINEL => "0".to_string(),
                        w => format_weight(w),
                    })
                    .collect()
            })
            .collect();

        let label_width = order
            .iter()
            .map(|&i| self.names[i].chars().count())
            .max()
            .unwrap_or(0);
        let column_widths: Vec<usize> = order
            .iter()
            .enumerate()
            .map(|(col, &j)| {
                cells
                    .iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(self.names[j].chars().count()))
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        let mut out = format!("{:label_width$}", "");
        for (&j, width) in order.iter().zip(&column_widths) {
            out.push_str(&format!("  {:>width$}", self.names[j]));
        }
        out.push('\n');

        for (row, &i) in cells.iter().zip(&order) {
            out.push_str(&format!("{:<label_width$}", self.names[i]));
            for (cell, width) in row.iter().zip(&column_widths) {
                out.push_str(&format!("  {cell:>width$}"));
            }
            out.push('\n');
        }

        out
    }

    /// Graphviz DOT for every connection, weights as edge labels.
    ///
    /// Friendships of weight `1` are drawn without a label.
    pub fn to_dot(&self) -> String {
        let mut graph: UnGraph<&str, String> = UnGraph::with_capacity(self.len(), 0);
        for name in &self.names {
            graph.add_node(name.as_str());
        }
        for (i, row) in self.matrix.rows().enumerate() {
            for (j, &weight) in row.iter().enumerate().skip(i) {
                if weight < SENTINEL {
                    let label = if weight == CONNECTED {
                        String::new()
                    } else {
                        format_weight(weight)
                    };
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), label);
                }
            }
        }

        format!(
            "{:?}",
            Dot::with_attr_getters(
                &graph,
                &[Config::EdgeNoLabel, Config::NodeNoLabel],
                &|_, edge| {
                    let label = EdgeRef::weight(&edge);
                    if label.is_empty() {
                        String::new()
                    } else {
                        format!("label = \"{}\"", escape_label(label))
                    }
                },
                &|_, (_, name)| format!("label = \"{}\"", escape_label(name)),
            )
        )
    }
}

/// Escape `\` and `"` so `label` can sit inside a quoted DOT attribute.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
