use serde::{Deserialize, Serialize};

use crate::tokenize::Tokenizer;

/// Horizontal proximity threshold for column clustering, in the OCR
/// engine's coordinate units.
pub const COLUMN_BOUND: i32 = 300;

/// Vertical half-window for deciding whether a reference row has a
/// counterpart in another column.
pub const ROW_WINDOW: i32 = 150;

/// Token stored in cells synthesized for missing entries.
pub const PLACEHOLDER_TOKEN: &str = "Empty";

/// One OCR-recognized text block, reduced to its bounding-box origin and
/// tokenized text. Immutable once created; the whole structure is rebuilt
/// from scratch on every recognition run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub origin_x: i32,
    pub origin_y: i32,
    pub tokens: Vec<String>,
}

impl Fragment {
    pub fn new(origin_x: i32, origin_y: i32, tokens: Vec<String>) -> Self {
        Fragment {
            origin_x,
            origin_y,
            tokens,
        }
    }
}

/// One fragment's data after placement inside a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub y: i32,
    pub tokens: Vec<String>,
}

impl Row {
    /// Synthetic row marking a missing cell.
    pub fn placeholder() -> Row {
        Row {
            y: 0,
            tokens: vec![PLACEHOLDER_TOKEN.to_string()],
        }
    }
}

/// A cluster of horizontally co-located fragments.
///
/// `anchor_x` is the origin of the first fragment assigned to the column
/// and is never recomputed; later fragments merge in without shifting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub anchor_x: i32,
    pub rows: Vec<Row>,
}

/// A single grid cell: the tokens of one reconstructed table entry.
pub type Cell = Vec<String>;

/// Final column-major structure of token arrays. Columns are ordered
/// ascending by their anchor position; the positions themselves are
/// dropped at this stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Space-joined text of the cell at (column, row), if present.
    pub fn cell_text(&self, column: usize, row: usize) -> Option<String> {
        self.columns.get(column)?.get(row).map(|cell| cell.join(" "))
    }
}

/// Coordinate of the grid cell closest to a query, plus the winning
/// edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosestCell {
    pub column: usize,
    pub row: usize,
    pub distance: usize,
}

/// Knobs for the layout pass.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Maximum horizontal distance between a fragment and a column anchor.
    pub column_bound: i32,
    /// Vertical half-window when matching rows against the reference column.
    pub row_window: i32,
    /// How fragment text is split into tokens.
    pub tokenizer: Tokenizer,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            column_bound: COLUMN_BOUND,
            row_window: ROW_WINDOW,
            tokenizer: Tokenizer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_joins_tokens() {
        let grid = Grid {
            columns: vec![vec![vec!["Alice".to_string(), "Smith".to_string()]]],
        };
        assert_eq!(grid.cell_text(0, 0), Some("Alice Smith".to_string()));
        assert_eq!(grid.cell_text(0, 1), None);
        assert_eq!(grid.cell_text(1, 0), None);
    }

    #[test]
    fn test_placeholder_row() {
        let row = Row::placeholder();
        assert_eq!(row.y, 0);
        assert_eq!(row.tokens, vec!["Empty".to_string()]);
    }
}
