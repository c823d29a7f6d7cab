pub mod levenshtein;

use crate::model::{ClosestCell, Grid};

/// Find the grid cell whose text lies closest to `query` by edit
/// distance.
///
/// Tokens are compared individually against the full query, scanning
/// columns, rows and tokens in order; the returned coordinate identifies
/// the row that produced the minimum, not the token. Strict less-than
/// tracking keeps the first-encountered coordinate on ties (the opposite
/// tie-break from column assignment). An empty query degenerates to each
/// token's own length, so the shortest token's row wins.
pub fn find_closest_cell(grid: &Grid, query: &str) -> Option<ClosestCell> {
    let mut closest: Option<ClosestCell> = None;

    for (column_idx, column) in grid.columns.iter().enumerate() {
        for (row_idx, cell) in column.iter().enumerate() {
            for token in cell {
                let distance = levenshtein::distance(token, query);
                if closest.map_or(true, |c| distance < c.distance) {
                    closest = Some(ClosestCell {
                        column: column_idx,
                        row: row_idx,
                        distance,
                    });
                }
            }
        }
    }

    closest
}
