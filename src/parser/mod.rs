// src/parser/mod.rs
pub mod symbol;
pub mod template;

use satb_core::HarmonyError;
use thiserror::Error;

pub use symbol::parse_chord;
pub use template::{load_template, parse_template, Template};

/// Errors from chord symbols and template files
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unrecognized chord symbol: {0}")]
    UnknownChord(String),

    #[error("Added notes are not supported: {0}")]
    UnsupportedAddedNote(String),

    #[error("Template has no initial voicing")]
    MissingInitialVoicing,

    #[error("Template has no chords")]
    MissingChords,

    #[error(transparent)]
    Harmony(#[from] HarmonyError),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn at_line(self, line: usize) -> Self {
        ParseError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}
