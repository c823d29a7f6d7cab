use std::path::PathBuf;

use textgrid_core::error::TextgridError;
use textgrid_core::model::LayoutOptions;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), TextgridError> {
    let options = LayoutOptions::default();
    let grid = super::build_grid(&input_file, &options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&grid)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Reconstructed {} column(s), written to {}",
                grid.columns.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => println!("{}", serde_json::to_string_pretty(&grid)?),
            _ => print!("{}", output::table::format_grid(&grid, None)),
        },
    }

    Ok(())
}
