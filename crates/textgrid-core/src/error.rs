#[derive(Debug, thiserror::Error)]
pub enum TextgridError {
    #[error("no text fragments to lay out")]
    EmptyInput,

    #[error("text block {index} has no bounding-box origin")]
    MissingGeometry { index: usize },

    #[error("OCR failed: {0}")]
    Recognition(String),

    #[error("tesseract not found. Install it: brew install tesseract (macOS) or apt install tesseract-ocr (Linux)")]
    TesseractNotFound,

    #[error("tesseract failed with exit code {code}: {stderr}")]
    TesseractFailed { code: i32, stderr: String },

    #[error("failed to parse tesseract TSV output: {0}")]
    TsvParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
