use crate::model::{Column, Row};

/// For each column, the row indices (relative to the densest column) at
/// which it is missing an entry.
///
/// The densest column is the reference and is assumed to have no gaps of
/// its own; with photographed lists that assumption can fail, and the
/// inferred gaps are then wrong. This is a known limitation of the
/// heuristic, not corrected here.
///
/// Columns must already be row-sorted. Callers guard against an empty
/// column set before invoking this.
pub fn find_gap_indices(columns: &[Column], window: i32) -> Vec<Vec<usize>> {
    let reference = densest(columns);

    columns
        .iter()
        .map(|column| {
            // Columns tied with the reference row count get no gaps,
            // including the reference itself.
            if column.rows.len() == reference.len() {
                Vec::new()
            } else {
                row_gaps(reference, &column.rows, window)
            }
        })
        .collect()
}

/// Rows of the column with the most entries, first such column on ties.
fn densest(columns: &[Column]) -> &[Row] {
    let mut best: &[Row] = &columns[0].rows;
    for column in &columns[1..] {
        if column.rows.len() > best.len() {
            best = &column.rows;
        }
    }
    best
}

/// Reference-row indices with no counterpart in `rows` inside the open
/// interval (reference y - window, reference y + window).
fn row_gaps(reference: &[Row], rows: &[Row], window: i32) -> Vec<usize> {
    let mut gaps = Vec::new();
    for (idx, reference_row) in reference.iter().enumerate() {
        let covered = rows
            .iter()
            .any(|row| reference_row.y - window < row.y && row.y < reference_row.y + window);
        if !covered {
            gaps.push(idx);
        }
    }
    gaps
}

/// Insert a placeholder row at each recorded gap index.
///
/// Indices were computed against the unmodified reference column and are
/// applied in ascending order as absolute positions in the final row
/// sequence; they are not re-validated against the growing column.
pub fn insert_placeholders(columns: &mut [Column], gap_indices: &[Vec<usize>]) {
    for (column, indices) in columns.iter_mut().zip(gap_indices) {
        for &idx in indices {
            column.rows.insert(idx, Row::placeholder());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(anchor_x: i32, ys: &[i32]) -> Column {
        Column {
            anchor_x,
            rows: ys
                .iter()
                .map(|&y| Row {
                    y,
                    tokens: vec![format!("r{y}")],
                })
                .collect(),
        }
    }

    #[test]
    fn test_sparser_column_gets_gap() {
        let columns = vec![column(0, &[0, 400]), column(700, &[0])];
        let gaps = find_gap_indices(&columns, 150);
        // Reference row 0 (y=0) is covered by the row at y=0; reference
        // row 1 (y=400) has no counterpart.
        assert_eq!(gaps, vec![vec![], vec![1]]);
    }

    #[test]
    fn test_tied_columns_are_skipped() {
        // Same row count as the reference, but wildly different y values:
        // still no gaps inferred.
        let columns = vec![column(0, &[0, 400]), column(700, &[1000, 2000])];
        let gaps = find_gap_indices(&columns, 150);
        assert_eq!(gaps, vec![Vec::<usize>::new(), Vec::<usize>::new()]);
    }

    #[test]
    fn test_first_column_wins_density_tie() {
        // Both columns have 2 rows; the first is the reference, so the
        // third column's gaps are measured against y = 0/400, not 50/800.
        let columns = vec![
            column(0, &[0, 400]),
            column(700, &[50, 800]),
            column(1400, &[400]),
        ];
        let gaps = find_gap_indices(&columns, 150);
        assert_eq!(gaps, vec![vec![], vec![], vec![0]]);
    }

    #[test]
    fn test_window_is_open_interval() {
        // |150 - 0| is exactly the window; the open interval excludes it.
        let columns = vec![column(0, &[0, 400]), column(700, &[150])];
        let gaps = find_gap_indices(&columns, 150);
        assert_eq!(gaps, vec![vec![], vec![0, 1]]);
    }

    #[test]
    fn test_insert_placeholders_at_absolute_indices() {
        let mut columns = vec![column(0, &[0, 300, 600]), column(700, &[300])];
        insert_placeholders(&mut columns, &[vec![], vec![0, 2]]);

        let ys: Vec<i32> = columns[1].rows.iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![0, 300, 0]);
        assert_eq!(columns[1].rows[0].tokens, vec!["Empty".to_string()]);
        assert_eq!(columns[1].rows[2].tokens, vec!["Empty".to_string()]);
    }
}
