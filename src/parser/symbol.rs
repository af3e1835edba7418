//! Chord-symbol parsing
//!
//! ```text
//! ROOT [b|#] [maj|min|dim|aug] [[b|#](7|9|11|13)] [-sus[2|4]]
//!      [-(b|#)N | -((b|#)N,(b|#)N...)] [_(6|64|65|43|42)]
//! ```
//!
//! A bare root is a major triad, a bare number a dominant chord. An
//! accidental in front of 9, 11 or 13 alters that extension; the modifier
//! after a dash alters any other degree.

use crate::parser::ParseError;
use regex::Regex;
use satb_core::types::{
    ChordFormula, Extension, Inversion, PitchClass, Seventh, Suspension, Triad,
};
use std::sync::LazyLock;

static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^
        (?P<root>[A-G][b\#]?)
        (?P<quality>maj|min|dim|aug)?
        (?:(?P<ext_acc>[b\#])?(?P<ext>7|9|11|13))?
        (?:-(?P<sus>sus)(?P<sus_degree>\d)?)?
        (?:-(?P<modifier>add\d+|[b\#]\d+|\([b\#]\d+(?:,[b\#]\d+)*\)))?
        (?:_(?P<inversion>6|64|65|43|42))?
        $",
    )
    .expect("chord symbol pattern is valid")
});

fn accidental_delta(accidental: &str) -> i8 {
    if accidental == "#" {
        1
    } else {
        -1
    }
}

/// Base formula for a quality / extension pair
fn base_formula(
    root: PitchClass,
    quality: Option<&str>,
    ext: Option<&str>,
) -> Option<ChordFormula> {
    let extension = match ext {
        Some("9") => Some(Extension::Ninth),
        Some("11") => Some(Extension::Eleventh),
        Some("13") => Some(Extension::Thirteenth),
        _ => None,
    };

    let formula = match (quality, ext) {
        (None | Some("maj"), None) => ChordFormula::triad(root, Triad::Major),
        (Some("min"), None) => ChordFormula::triad(root, Triad::Minor),
        (Some("dim"), None) => ChordFormula::triad(root, Triad::Diminished),
        (Some("aug"), None) => ChordFormula::triad(root, Triad::Augmented),
        (None, Some(_)) => {
            ChordFormula::triad(root, Triad::Major).with_seventh(Seventh::Minor)
        }
        (Some("maj"), Some(_)) => {
            ChordFormula::triad(root, Triad::Major).with_seventh(Seventh::Major)
        }
        (Some("min"), Some(_)) => {
            ChordFormula::triad(root, Triad::Minor).with_seventh(Seventh::Minor)
        }
        (Some("dim"), Some("7")) => {
            ChordFormula::triad(root, Triad::Diminished).with_seventh(Seventh::Diminished)
        }
        _ => return None,
    };

    Some(match extension {
        Some(extension) => formula.with_extension(extension),
        None => formula,
    })
}

/// Parse one chord symbol into a formula named after the symbol
pub fn parse_chord(symbol: &str) -> Result<ChordFormula, ParseError> {
    let symbol = symbol.trim();
    let unknown = || ParseError::UnknownChord(symbol.to_string());
    let caps = SYMBOL_RE.captures(symbol).ok_or_else(unknown)?;

    let root: PitchClass = caps["root"].parse()?;
    let quality = caps.name("quality").map(|m| m.as_str());
    let ext = caps.name("ext").map(|m| m.as_str());
    let inversion = caps
        .name("inversion")
        .and_then(|m| Inversion::from_figure(m.as_str()))
        .unwrap_or_default();

    let mut formula = base_formula(root, quality, ext)
        .ok_or_else(unknown)?
        .with_inversion(inversion);

    if let Some(accidental) = caps.name("ext_acc") {
        if ext == Some("7") {
            return Err(unknown());
        }
        formula = formula.alter_extension(accidental_delta(accidental.as_str()))?;
    }

    if caps.name("sus").is_some() {
        let suspension = match caps.name("sus_degree").map(|m| m.as_str()) {
            Some("2") => Suspension::Second,
            Some("4") | None => Suspension::Fourth,
            Some(_) => return Err(unknown()),
        };
        formula = formula.suspend(suspension)?;
    }

    if let Some(modifier) = caps.name("modifier") {
        let modifier = modifier.as_str();
        if modifier.starts_with("add") {
            return Err(ParseError::UnsupportedAddedNote(symbol.to_string()));
        }
        for alteration in modifier.trim_matches(|c| c == '(' || c == ')').split(',') {
            let (accidental, degree) = alteration.split_at(1);
            let degree: u8 = degree.parse().map_err(|_| unknown())?;
            formula = formula.alter(degree, accidental_delta(accidental))?;
        }
    }

    // Surface a bad inversion here rather than at solve time
    formula.bass_degree()?;
    Ok(formula.named(symbol))
}
