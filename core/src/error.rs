use alloc::string::String;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The text is not JSON at all.
    InvalidJson,
    /// Valid JSON, but not an array of strings.
    NotStringArray,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    pub(crate) fn from_json(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match err.classify() {
            Category::Data => ParseErrorKind::NotStringArray,
            Category::Io | Category::Syntax | Category::Eof => ParseErrorKind::InvalidJson,
        };
        Self {
            kind,
            message: alloc::format!("{err}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Could not read label list: {0}")]
    Parse(#[from] ParseError),
    #[error("Label list is empty, cannot draw a card")]
    EmptyPool,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Could not copy to clipboard: {0}")]
    Clipboard(String),
    #[error("Could not read file: {0}")]
    FileRead(String),
}

pub type Result<T> = core::result::Result<T, BingoError>;
