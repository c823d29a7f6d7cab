pub mod columns;
pub mod gaps;

use tracing::debug;

use crate::error::TextgridError;
use crate::model::{Cell, Column, Fragment, Grid, LayoutOptions};

/// Run the full layout pass: cluster fragments into columns, order them,
/// infer missing cells against the densest column, and project the
/// result into a grid of token arrays.
pub fn reconstruct(
    fragments: &[Fragment],
    options: &LayoutOptions,
) -> Result<Grid, TextgridError> {
    if fragments.is_empty() {
        return Err(TextgridError::EmptyInput);
    }

    let mut columns = columns::assign_columns(fragments, options.column_bound);
    debug!(
        fragments = fragments.len(),
        columns = columns.len(),
        "assigned fragments to columns"
    );

    // One-shot ordering pass. Placeholders inserted below sit at y = 0,
    // so the grid must never be re-sorted by y after this point.
    columns.sort_by_key(|column| column.anchor_x);
    for column in &mut columns {
        column.rows.sort_by_key(|row| row.y);
    }

    let gap_indices = gaps::find_gap_indices(&columns, options.row_window);
    debug!(?gap_indices, "inferred missing cells");
    gaps::insert_placeholders(&mut columns, &gap_indices);

    let grid = project(columns);
    debug!(columns = grid.columns.len(), "built grid");
    Ok(grid)
}

/// Drop position metadata, keeping only each column's cell token arrays.
fn project(columns: Vec<Column>) -> Grid {
    let columns = columns
        .into_iter()
        .map(|column| {
            column
                .rows
                .into_iter()
                .map(|row| row.tokens)
                .collect::<Vec<Cell>>()
        })
        .collect();
    Grid { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(x: i32, y: i32, text: &str) -> Fragment {
        Fragment::new(x, y, vec![text.to_string()])
    }

    #[test]
    fn test_columns_ordered_by_anchor() {
        let grid = reconstruct(
            &[fragment(900, 0, "right"), fragment(0, 0, "left")],
            &LayoutOptions::default(),
        )
        .unwrap();
        assert_eq!(grid.columns[0], vec![vec!["left".to_string()]]);
        assert_eq!(grid.columns[1], vec![vec!["right".to_string()]]);
    }

    #[test]
    fn test_rows_ordered_by_y() {
        let grid = reconstruct(
            &[fragment(0, 500, "below"), fragment(0, 10, "above")],
            &LayoutOptions::default(),
        )
        .unwrap();
        assert_eq!(
            grid.columns[0],
            vec![vec!["above".to_string()], vec!["below".to_string()]]
        );
    }

    #[test]
    fn test_equal_y_preserves_input_order() {
        let grid = reconstruct(
            &[fragment(0, 100, "first"), fragment(0, 100, "second")],
            &LayoutOptions::default(),
        )
        .unwrap();
        assert_eq!(
            grid.columns[0],
            vec![vec!["first".to_string()], vec!["second".to_string()]]
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let result = reconstruct(&[], &LayoutOptions::default());
        assert!(matches!(result, Err(TextgridError::EmptyInput)));
    }
}
