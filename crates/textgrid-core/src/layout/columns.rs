use crate::model::{Column, Fragment, Row};

/// Assign fragments to columns by horizontal proximity.
///
/// Fragments are processed in input order: the first fragment of a new
/// column fixes its anchor, and every later fragment within `bound` of
/// that anchor merges into it. Input order is significant and must be
/// preserved by callers.
pub fn assign_columns(fragments: &[Fragment], bound: i32) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();

    for fragment in fragments {
        let row = Row {
            y: fragment.origin_y,
            tokens: fragment.tokens.clone(),
        };
        match find_near_column(&columns, fragment.origin_x, bound) {
            Some(idx) => columns[idx].rows.push(row),
            None => columns.push(Column {
                anchor_x: fragment.origin_x,
                rows: vec![row],
            }),
        }
    }

    columns
}

/// Index of the column whose anchor is within `bound` of `x`.
///
/// The forward scan keeps overwriting its candidate, so when several
/// columns qualify the last one in creation order wins.
fn find_near_column(columns: &[Column], x: i32, bound: i32) -> Option<usize> {
    let mut near = None;
    for (idx, column) in columns.iter().enumerate() {
        if column.anchor_x - bound <= x && x <= column.anchor_x + bound {
            near = Some(idx);
        }
    }
    near
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(x: i32, y: i32, text: &str) -> Fragment {
        Fragment::new(x, y, vec![text.to_string()])
    }

    #[test]
    fn test_within_bound_merges() {
        // 350 - 100 = 250 <= 300
        let columns = assign_columns(&[fragment(100, 0, "a"), fragment(350, 50, "b")], 300);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].anchor_x, 100);
        assert_eq!(columns[0].rows.len(), 2);
    }

    #[test]
    fn test_beyond_bound_splits() {
        // 450 - 100 = 350 > 300
        let columns = assign_columns(&[fragment(100, 0, "a"), fragment(450, 50, "b")], 300);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].anchor_x, 100);
        assert_eq!(columns[1].anchor_x, 450);
    }

    #[test]
    fn test_anchor_is_never_recomputed() {
        // The third fragment is 290 from the anchor but 40 from the most
        // recently merged fragment; only the anchor counts.
        let columns = assign_columns(
            &[fragment(100, 0, "a"), fragment(350, 50, "b"), fragment(390, 100, "c")],
            300,
        );
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].anchor_x, 100);
        assert_eq!(columns[0].rows.len(), 3);
    }

    #[test]
    fn test_last_matching_column_wins() {
        // Anchors 0 and 400 are both within 300 of x = 250; the scan
        // overwrites its candidate, so the later column takes the row.
        let columns = assign_columns(
            &[fragment(0, 0, "a"), fragment(400, 0, "b"), fragment(250, 50, "c")],
            300,
        );
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].rows.len(), 1);
        assert_eq!(columns[1].rows.len(), 2);
        assert_eq!(columns[1].rows[1].tokens, vec!["c".to_string()]);
    }

    #[test]
    fn test_empty_input_yields_no_columns() {
        assert!(assign_columns(&[], 300).is_empty());
    }
}
