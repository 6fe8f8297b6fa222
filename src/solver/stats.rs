use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated across one solve, propagation included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered, the root included.
    pub nodes_visited: u64,
    /// Abandoned value choices, whether rejected by propagation or by an
    /// exhausted subtree.
    pub backtracks: u64,
    /// Arc revisions attempted by AC-3.
    pub revise_calls: u64,
    /// Individual values removed from domains by AC-3.
    pub values_pruned: u64,
    /// Arcs popped off the AC-3 worklist, duplicates included.
    pub arcs_processed: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows: [(&str, u64); 5] = [
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Revise calls", stats.revise_calls),
        ("Values pruned", stats.values_pruned),
        ("Arcs processed", stats.arcs_processed),
    ];
    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            nodes_visited: 7,
            backtracks: 2,
            revise_calls: 31,
            values_pruned: 5,
            arcs_processed: 31,
        };

        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Nodes visited"));
        assert!(rendered.contains("31"));
    }
}
