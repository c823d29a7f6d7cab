pub mod find;
pub mod parse;

use std::path::Path;

use textgrid_core::error::TextgridError;
use textgrid_core::extraction::tesseract::TesseractEngine;
use textgrid_core::extraction::{OcrEngine, TextBlock};
use textgrid_core::model::{Grid, LayoutOptions};

/// Load OCR text blocks from the input file. A `.json` file is read as a
/// pre-recognized block list; anything else is treated as an image and
/// handed to the tesseract backend.
fn load_blocks(input_file: &Path) -> Result<Vec<TextBlock>, TextgridError> {
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let bytes = std::fs::read(input_file)?;
        Ok(serde_json::from_slice(&bytes)?)
    } else {
        let image = std::fs::read(input_file)?;
        let engine = TesseractEngine::new();
        engine.recognize(&image)
    }
}

fn build_grid(input_file: &Path, options: &LayoutOptions) -> Result<Grid, TextgridError> {
    let blocks = load_blocks(input_file)?;
    let fragments = textgrid_core::extraction::fragments_from_blocks(&blocks, &options.tokenizer)?;
    textgrid_core::build_grid_with(&fragments, options)
}
