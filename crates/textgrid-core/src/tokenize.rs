use serde::{Deserialize, Serialize};

/// Strategy for splitting recognized text into tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenizer {
    /// Split on runs of whitespace.
    #[default]
    Whitespace,
    /// Split on a fixed delimiter character, dropping empty pieces.
    Delimiter(char),
}

impl Tokenizer {
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            Tokenizer::Whitespace => text.split_whitespace().map(str::to_string).collect(),
            Tokenizer::Delimiter(delimiter) => text
                .split(*delimiter)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}
