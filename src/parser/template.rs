//! Template files
//!
//! ```text
//! # I IV V7 I in C
//! C4 E4 G4 C5
//! C
//! F
//! G7
//! C
//! ```
//!
//! The first line holds the starting pitches, lowest voice first or in any
//! order, and voices the first chord. Every following line holds one chord
//! symbol. `#` at the start of a line or after whitespace starts a comment,
//! so sharps such as `F#min` are left alone; blank lines are skipped.

use crate::parser::{parse_chord, ParseError};
use anyhow::{Context, Result};
use satb_core::types::{ChordFormula, Pitch};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub initial: Vec<Pitch>,
    pub chords: Vec<Arc<ChordFormula>>,
}

impl Template {
    /// Number of voices implied by the starting pitches
    pub fn voice_count(&self) -> usize {
        self.initial.len()
    }

    pub fn symbols(&self) -> Vec<String> {
        self.chords.iter().map(|chord| chord.to_string()).collect()
    }
}

/// Drop a trailing comment. A `#` glued to a note or symbol is a sharp.
fn strip_comment(line: &str) -> &str {
    let start = line
        .char_indices()
        .find(|&(index, c)| {
            c == '#' && line[..index].chars().next_back().map_or(true, char::is_whitespace)
        })
        .map_or(line.len(), |(index, _)| index);
    &line[..start]
}

/// Parse template text. Errors carry the 1-based line they occurred on.
pub fn parse_template(source: &str) -> Result<Template, ParseError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let content = strip_comment(line).trim();
            (index + 1, content)
        })
        .filter(|(_, content)| !content.is_empty());

    let (line, voicing) = lines.next().ok_or(ParseError::MissingInitialVoicing)?;
    let initial = voicing
        .split_whitespace()
        .map(|name| name.parse::<Pitch>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ParseError::from(e).at_line(line))?;

    let chords = lines
        .map(|(line, symbol)| {
            parse_chord(symbol)
                .map(Arc::new)
                .map_err(|e| e.at_line(line))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if chords.is_empty() {
        return Err(ParseError::MissingChords);
    }

    Ok(Template { initial, chords })
}

/// Read and parse a template file
pub fn load_template(path: &Path) -> Result<Template> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    parse_template(&source).with_context(|| format!("Invalid template {}", path.display()))
}
