pub mod tesseract;

use serde::{Deserialize, Serialize};

use crate::error::TextgridError;
use crate::model::Fragment;
use crate::tokenize::Tokenizer;

/// One text block as reported by an OCR engine: the top-left corner of
/// its bounding box and the raw recognized text.
///
/// The corner is optional because engine contracts only promise a corner
/// point for well-formed detections; conversion to [`Fragment`]s fails
/// fast when it is absent rather than defaulting to (0, 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub text: String,
}

/// Trait for OCR backends.
pub trait OcrEngine: Send + Sync {
    /// Recognize text blocks in an encoded image, in whatever order the
    /// engine reports them. That order is significant downstream.
    fn recognize(&self, image: &[u8]) -> Result<Vec<TextBlock>, TextgridError>;

    /// Name of this backend (for diagnostics).
    fn engine_name(&self) -> &str;
}

/// Convert raw OCR blocks into layout fragments, tokenizing each block's
/// text and preserving block order.
pub fn fragments_from_blocks(
    blocks: &[TextBlock],
    tokenizer: &Tokenizer,
) -> Result<Vec<Fragment>, TextgridError> {
    let mut fragments = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        let (x, y) = match (block.x, block.y) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(TextgridError::MissingGeometry { index }),
        };
        fragments.push(Fragment::new(x, y, tokenizer.tokenize(&block.text)));
    }
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_become_tokenized_fragments() {
        let blocks = vec![TextBlock {
            x: Some(10),
            y: Some(20),
            text: "Alice Smith".to_string(),
        }];
        let fragments = fragments_from_blocks(&blocks, &Tokenizer::default()).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].origin_x, 10);
        assert_eq!(fragments[0].origin_y, 20);
        assert_eq!(fragments[0].tokens, vec!["Alice", "Smith"]);
    }

    #[test]
    fn test_missing_origin_fails_fast() {
        let blocks = vec![
            TextBlock {
                x: Some(0),
                y: Some(0),
                text: "ok".to_string(),
            },
            TextBlock {
                x: Some(5),
                y: None,
                text: "broken".to_string(),
            },
        ];
        let result = fragments_from_blocks(&blocks, &Tokenizer::default());
        assert!(matches!(
            result,
            Err(TextgridError::MissingGeometry { index: 1 })
        ));
    }
}
