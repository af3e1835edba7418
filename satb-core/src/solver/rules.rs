//! Part-writing rules
//!
//! A closed, ordered set of validators applied to complete voice
//! assignments. Each rule sees the moves of every voice, sorted from the
//! lowest current pitch up, plus the [`TransitionContext`]. The order in
//! [`Rule::ORDERED`] puts the rules that reject most assignments first.

use crate::solver::candidates::Transition;
use crate::types::{ChordFormula, VoicedChord};
use std::collections::HashMap;

/// Vocal part with a fixed absolute range (C4 = 48)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoicePart {
    Bass,
    Baritone,
    Tenor,
    Alto,
    MezzoSoprano,
    Soprano,
}

impl VoicePart {
    const FOUR: [VoicePart; 4] = [
        VoicePart::Bass,
        VoicePart::Tenor,
        VoicePart::Alto,
        VoicePart::Soprano,
    ];
    const FIVE: [VoicePart; 5] = [
        VoicePart::Bass,
        VoicePart::Baritone,
        VoicePart::Tenor,
        VoicePart::Alto,
        VoicePart::Soprano,
    ];
    const SIX: [VoicePart; 6] = [
        VoicePart::Bass,
        VoicePart::Baritone,
        VoicePart::Tenor,
        VoicePart::Alto,
        VoicePart::MezzoSoprano,
        VoicePart::Soprano,
    ];

    /// Parts from the lowest voice up for a given voice count
    pub fn parts(voice_count: usize) -> Option<&'static [VoicePart]> {
        match voice_count {
            4 => Some(&Self::FOUR),
            5 => Some(&Self::FIVE),
            6 => Some(&Self::SIX),
            _ => None,
        }
    }

    /// Inclusive absolute range
    pub fn range(self) -> (i32, i32) {
        match self {
            VoicePart::Bass => (28, 52),         // E2–E4
            VoicePart::Baritone => (31, 53),     // G2–F4
            VoicePart::Tenor => (36, 57),        // C3–A4
            VoicePart::Alto => (41, 62),         // F3–D5
            VoicePart::MezzoSoprano => (45, 67), // A3–G5
            VoicePart::Soprano => (48, 72),      // C4–C6
        }
    }

    pub fn contains(self, abs: i32) -> bool {
        let (low, high) = self.range();
        (low..=high).contains(&abs)
    }

    pub fn name(self) -> &'static str {
        match self {
            VoicePart::Bass => "Bass",
            VoicePart::Baritone => "Baritone",
            VoicePart::Tenor => "Tenor",
            VoicePart::Alto => "Alto",
            VoicePart::MezzoSoprano => "Mezzo",
            VoicePart::Soprano => "Soprano",
        }
    }
}

/// What the rules know about the step being validated
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub current: &'a VoicedChord,
    pub next: &'a ChordFormula,
    pub voice_count: usize,
    resolving_dominant: bool,
}

impl<'a> TransitionContext<'a> {
    pub fn new(current: &'a VoicedChord, next: &'a ChordFormula, voice_count: usize) -> Self {
        let resolving_dominant = current.formula().resolves_as_dominant_to(next);
        TransitionContext {
            current,
            next,
            voice_count,
            resolving_dominant,
        }
    }

    /// True when the current dominant resolves to a tonic triad, which loosens
    /// the doubling limits of the next chord
    pub fn resolving_dominant(&self) -> bool {
        self.resolving_dominant
    }
}

/// Interval classes two voices may keep while both move
const PARALLEL_ALLOWED: [i32; 4] = [3, 4, 8, 9];

/// Allowed signed movement of each degree of a dominant-family chord
const DOMINANT_TENDENCIES: &[(u8, &[i32])] = &[
    (3, &[1]),
    (7, &[-2, -1]),
    (9, &[-2, -1]),
    (11, &[0]),
    (13, &[0, -1, -2, -3, -4]),
];

/// Allowed signed movement out of a suspension
const SUSPENSION_RESOLUTIONS: &[(u8, &[i32])] = &[(2, &[1, 2]), (4, &[-2, -1])];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    NoteFrequency,
    ParallelIntervals,
    CrossingAndSpacing,
    VoiceRange,
    TendencyTones,
}

impl Rule {
    pub const ORDERED: [Rule; 5] = [
        Rule::NoteFrequency,
        Rule::ParallelIntervals,
        Rule::CrossingAndSpacing,
        Rule::VoiceRange,
        Rule::TendencyTones,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::NoteFrequency => "note frequency",
            Rule::ParallelIntervals => "parallel intervals",
            Rule::CrossingAndSpacing => "crossing and spacing",
            Rule::VoiceRange => "voice range",
            Rule::TendencyTones => "tendency tones",
        }
    }

    /// Check one rule. `moves` must be sorted by current pitch, lowest first.
    pub fn validate(self, moves: &[Transition], ctx: &TransitionContext) -> bool {
        match self {
            Rule::NoteFrequency => note_frequency(moves, ctx),
            Rule::ParallelIntervals => parallel_intervals(moves),
            Rule::CrossingAndSpacing => crossing_and_spacing(moves),
            Rule::VoiceRange => voice_range(moves),
            Rule::TendencyTones => tendency_tones(moves, ctx),
        }
    }

    /// The first rule, in checking order, that rejects `moves`
    pub fn first_violation(moves: &[Transition], ctx: &TransitionContext) -> Option<Rule> {
        Self::ORDERED
            .into_iter()
            .find(|rule| !rule.validate(moves, ctx))
    }
}

/// A complete assignment (one move per voice) passing every rule
pub fn is_valid(moves: &[Transition], ctx: &TransitionContext) -> bool {
    moves.len() == ctx.voice_count && Rule::first_violation(moves, ctx).is_none()
}

fn note_frequency(moves: &[Transition], ctx: &TransitionContext) -> bool {
    let mut counts: HashMap<u8, usize> = HashMap::new();
    for transition in moves {
        *counts.entry(transition.to.degree).or_default() += 1;
    }

    ctx.next
        .frequency_ranges(ctx.resolving_dominant())
        .iter()
        .all(|(degree, range)| range.contains(counts.get(degree).copied().unwrap_or(0)))
}

fn parallel_intervals(moves: &[Transition]) -> bool {
    for (i, lower) in moves.iter().enumerate() {
        for upper in &moves[i + 1..] {
            if lower.from.abs() == upper.from.abs() {
                continue;
            }
            let before = (upper.from.abs() - lower.from.abs()).rem_euclid(12);
            let after = (upper.to.abs() - lower.to.abs()).rem_euclid(12);
            if before == after && !PARALLEL_ALLOWED.contains(&after) && lower.moved() {
                return false;
            }
        }
    }
    true
}

fn crossing_and_spacing(moves: &[Transition]) -> bool {
    moves.windows(2).all(|pair| {
        let gap = pair[1].to.abs() - pair[0].to.abs();
        gap > 0 && gap <= 12
    })
}

fn voice_range(moves: &[Transition]) -> bool {
    let Some(parts) = VoicePart::parts(moves.len()) else {
        return false;
    };
    moves
        .iter()
        .zip(parts)
        .all(|(transition, part)| part.contains(transition.to.abs()))
}

fn resolves_within(transition: &Transition, table: &[(u8, &[i32])]) -> bool {
    match table.iter().find(|(degree, _)| *degree == transition.from.degree) {
        Some((_, allowed)) => allowed.contains(&transition.delta()),
        None => true,
    }
}

fn tendency_tones(moves: &[Transition], ctx: &TransitionContext) -> bool {
    if ctx.current.formula().is_dominant()
        && !moves
            .iter()
            .all(|t| resolves_within(t, DOMINANT_TENDENCIES))
    {
        return false;
    }
    moves
        .iter()
        .all(|t| resolves_within(t, SUSPENSION_RESOLUTIONS))
}
