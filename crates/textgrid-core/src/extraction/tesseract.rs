use std::io::Write;
use std::process::Command;

use crate::error::TextgridError;
use crate::extraction::{OcrEngine, TextBlock};

/// OCR backend using the tesseract binary.
///
/// Runs `tesseract <image> - tsv` and folds the word-level TSV rows back
/// into line-level blocks, since the layout pass expects one block per
/// text run rather than one per word.
pub struct TesseractEngine;

impl TesseractEngine {
    pub fn new() -> Self {
        TesseractEngine
    }

    /// Check if tesseract is available on the system.
    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &[u8]) -> Result<Vec<TextBlock>, TextgridError> {
        // Write image bytes to a temp file; tesseract sniffs the format
        // from the content.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| TextgridError::Recognition(e.to_string()))?;
        tmpfile
            .write_all(image)
            .map_err(|e| TextgridError::Recognition(e.to_string()))?;

        let output = Command::new("tesseract")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .arg("tsv")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TextgridError::TesseractNotFound
                } else {
                    TextgridError::Recognition(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(TextgridError::TesseractFailed { code, stderr });
        }

        let tsv = String::from_utf8_lossy(&output.stdout);
        parse_tsv(&tsv)
    }

    fn engine_name(&self) -> &str {
        "tesseract"
    }
}

// TSV columns: level page_num block_num par_num line_num word_num
// left top width height conf text. Line rows (level 4) carry the line's
// box and no text; word rows (level 5) carry the recognized words.
const TSV_COLUMNS: usize = 12;
const LEVEL_LINE: u32 = 4;
const LEVEL_WORD: u32 = 5;

fn parse_tsv(tsv: &str) -> Result<Vec<TextBlock>, TextgridError> {
    let mut blocks: Vec<TextBlock> = Vec::new();
    let mut current: Option<(i32, i32, Vec<String>)> = None;

    for line in tsv.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < TSV_COLUMNS {
            return Err(TextgridError::TsvParse(format!(
                "expected {} columns, got {} in {:?}",
                TSV_COLUMNS,
                fields.len(),
                line
            )));
        }

        let level: u32 = parse_field(fields[0], "level")?;
        match level {
            LEVEL_LINE => {
                flush(&mut blocks, current.take());
                let left: i32 = parse_field(fields[6], "left")?;
                let top: i32 = parse_field(fields[7], "top")?;
                current = Some((left, top, Vec::new()));
            }
            LEVEL_WORD => {
                let word = fields[11].trim();
                if word.is_empty() {
                    continue;
                }
                match &mut current {
                    Some((_, _, words)) => words.push(word.to_string()),
                    None => {
                        return Err(TextgridError::TsvParse(
                            "word row before any line row".to_string(),
                        ))
                    }
                }
            }
            _ => {}
        }
    }
    flush(&mut blocks, current.take());

    Ok(blocks)
}

fn flush(blocks: &mut Vec<TextBlock>, line: Option<(i32, i32, Vec<String>)>) {
    if let Some((left, top, words)) = line {
        if !words.is_empty() {
            blocks.push(TextBlock {
                x: Some(left),
                y: Some(top),
                text: words.join(" "),
            });
        }
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str) -> Result<T, TextgridError> {
    field
        .trim()
        .parse()
        .map_err(|_| TextgridError::TsvParse(format!("invalid {name} value {field:?}")))
}
