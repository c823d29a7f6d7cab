use std::path::PathBuf;

use textgrid_core::error::TextgridError;
use textgrid_core::model::LayoutOptions;
use textgrid_core::RecognitionResult;

use crate::output;

pub fn run(input_file: PathBuf, query: &str, output_format: &str) -> Result<(), TextgridError> {
    let options = LayoutOptions::default();
    let grid = super::build_grid(&input_file, &options)?;
    let closest = textgrid_core::find_closest_cell(&grid, query);

    match output_format {
        "json" => output::json::print(&RecognitionResult { grid, closest })?,
        _ => output::table::print_match(&grid, query, closest.as_ref()),
    }

    Ok(())
}
