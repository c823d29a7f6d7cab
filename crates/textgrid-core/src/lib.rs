pub mod error;
pub mod extraction;
pub mod layout;
pub mod matching;
pub mod model;
pub mod tokenize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use error::TextgridError;
use extraction::OcrEngine;
use model::{ClosestCell, Fragment, Grid, LayoutOptions};

/// Outcome of one recognition run: the reconstructed grid and the cell
/// closest to the query, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub grid: Grid,
    pub closest: Option<ClosestCell>,
}

/// Main API entry point: OCR an image and locate the cell closest to
/// `query` in the reconstructed grid.
///
/// The pipeline runs synchronously on fully materialized data and holds
/// no state between invocations; callers own any re-invocation policy.
pub fn recognize_image(
    image: &[u8],
    engine: &dyn OcrEngine,
    query: &str,
    options: &LayoutOptions,
) -> Result<RecognitionResult, TextgridError> {
    let blocks = engine.recognize(image)?;
    debug!(
        engine = engine.engine_name(),
        blocks = blocks.len(),
        "recognized text blocks"
    );

    let fragments = extraction::fragments_from_blocks(&blocks, &options.tokenizer)?;
    let grid = build_grid_with(&fragments, options)?;
    let closest = find_closest_cell(&grid, query);

    Ok(RecognitionResult { grid, closest })
}

/// Reconstruct the tabular layout implied by `fragments` using default
/// options.
///
/// Fails with [`TextgridError::EmptyInput`] when `fragments` is empty;
/// no partial grid is produced and nothing downstream runs.
pub fn build_grid(fragments: &[Fragment]) -> Result<Grid, TextgridError> {
    build_grid_with(fragments, &LayoutOptions::default())
}

/// Reconstruct the tabular layout with explicit options.
pub fn build_grid_with(
    fragments: &[Fragment],
    options: &LayoutOptions,
) -> Result<Grid, TextgridError> {
    layout::reconstruct(fragments, options)
}

/// Find the grid coordinate whose cell text is closest to `query` by
/// edit distance. Returns `None` for a grid with no columns.
pub fn find_closest_cell(grid: &Grid, query: &str) -> Option<ClosestCell> {
    matching::find_closest_cell(grid, query)
}
