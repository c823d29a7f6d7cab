use textgrid_core::model::{ClosestCell, Grid};

/// Render the grid as side-by-side columns, space-joining each cell's
/// tokens. The matched cell, if given, is bracketed.
pub fn format_grid(grid: &Grid, closest: Option<&ClosestCell>) -> String {
    let row_count = grid.columns.iter().map(|c| c.len()).max().unwrap_or(0);

    // Render cell texts first so bracketing counts toward column widths.
    let rendered: Vec<Vec<String>> = grid
        .columns
        .iter()
        .enumerate()
        .map(|(column_idx, column)| {
            column
                .iter()
                .enumerate()
                .map(|(row_idx, cell)| {
                    let text = cell.join(" ");
                    let matched = closest
                        .map(|c| c.column == column_idx && c.row == row_idx)
                        .unwrap_or(false);
                    if matched {
                        format!("[ {text} ]")
                    } else {
                        text
                    }
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = rendered
        .iter()
        .map(|column| column.iter().map(|t| t.len()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row_idx in 0..row_count {
        let line: Vec<String> = rendered
            .iter()
            .enumerate()
            .map(|(column_idx, column)| {
                let text = column.get(row_idx).map(String::as_str).unwrap_or("");
                format!("{:<width$}", text, width = widths[column_idx])
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub fn print_match(grid: &Grid, query: &str, closest: Option<&ClosestCell>) {
    print!("{}", format_grid(grid, closest));
    println!();

    match closest {
        Some(c) => {
            let text = grid.cell_text(c.column, c.row).unwrap_or_default();
            println!(
                "Closest to {:?}: {:?} at column {}, row {} (distance {})",
                query, text, c.column, c.row, c.distance
            );
        }
        None => println!("No cell to match {query:?} against"),
    }
}
