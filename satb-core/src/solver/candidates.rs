//! Transition candidate generation
//!
//! For every voice of the current chord and every degree of the next chord,
//! find the octave placement(s) of that degree closest to the voice, and
//! bucket the resulting moves by cost. The optimizer consumes the buckets
//! cheapest first.

use crate::error::Result;
use crate::types::{ChordFormula, Pitch, PitchClass, VoicedChord, VoicedNote};
use std::collections::{BTreeMap, BTreeSet};

/// Cost tag of a candidate move.
///
/// `FreeOctave` orders before every numeric cost, so the free bass moves are
/// always tried first; their real cost is the distance actually travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CandidateCost {
    FreeOctave,
    Semitones(u32),
}

/// A proposed move of one voice into the next chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Transition {
    pub from: VoicedNote,
    pub to: VoicedNote,
    pub cost: CandidateCost,
}

impl Transition {
    /// Signed movement in semitones
    pub fn delta(&self) -> i32 {
        self.to.pitch - self.from.pitch
    }

    /// Distance actually travelled, regardless of the cost tag
    pub fn distance(&self) -> u32 {
        self.delta().unsigned_abs()
    }

    pub fn moved(&self) -> bool {
        self.delta() != 0
    }

    pub fn source(&self) -> i32 {
        self.from.abs()
    }
}

/// The two absolute positions of `target` that surround `current`, one below
/// and one above. Only meaningful when `current` is not already on `target`.
pub fn octave_neighbours(current: i32, target: u8) -> (i32, i32) {
    let octave = current.div_euclid(12);
    let offset = if (target as i32) < current.rem_euclid(12) {
        0
    } else {
        -1
    };
    let lower = (octave + offset) * 12 + target as i32;
    (lower, lower + 12)
}

/// Minimal movement from `current` to any octave of `target`.
///
/// Returns the cost and the placements achieving it: one placement, or both
/// neighbours when they are a tritone away in each direction.
pub fn nearest_placements(current: i32, target: u8) -> (u32, Vec<i32>) {
    if current.rem_euclid(12) == target as i32 {
        return (0, vec![current]);
    }

    let (lower, upper) = octave_neighbours(current, target);
    let down = (current - lower) as u32;
    match down {
        6 => (6, vec![lower, upper]),
        d if d < 6 => (d, vec![lower]),
        _ => ((upper - current) as u32, vec![upper]),
    }
}

/// Candidates grouped by cost, iterated cheapest first
#[derive(Debug, Clone, Default)]
pub struct CandidateBuckets {
    buckets: BTreeMap<CandidateCost, BTreeSet<Transition>>,
}

impl CandidateBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transition: Transition) {
        self.buckets
            .entry(transition.cost)
            .or_default()
            .insert(transition);
    }

    /// Remove and return the cheapest remaining bucket
    pub fn pop_cheapest(&mut self) -> Option<(CandidateCost, Vec<Transition>)> {
        self.buckets
            .pop_first()
            .map(|(cost, transitions)| (cost, transitions.into_iter().collect()))
    }

    pub fn costs(&self) -> impl Iterator<Item = CandidateCost> + '_ {
        self.buckets.keys().copied()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.buckets.values().flatten()
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn add_nearest(&mut self, from: VoicedNote, degree: u8, class: PitchClass) {
        let (cost, placements) = nearest_placements(from.abs(), class.semitone());
        for abs in placements {
            self.push(Transition {
                from,
                to: VoicedNote::new(degree, Pitch::from_abs(class, abs)),
                cost: CandidateCost::Semitones(cost),
            });
        }
    }

    fn add_free_octave(&mut self, from: VoicedNote, degree: u8, class: PitchClass) {
        let current = from.abs();
        if current.rem_euclid(12) == class.semitone() as i32 {
            // A bass already on the right pitch class holds it
            self.add_nearest(from, degree, class);
            return;
        }

        let (lower, upper) = octave_neighbours(current, class.semitone());
        for abs in [lower, upper] {
            self.push(Transition {
                from,
                to: VoicedNote::new(degree, Pitch::from_abs(class, abs)),
                cost: CandidateCost::FreeOctave,
            });
        }
    }
}

/// Build the candidate buckets for moving `current` into `next`.
///
/// With `include_inversions` the bass voice is only moved to the bass degree
/// of `next` (free octave), while every other voice may move to any degree.
pub fn generate_candidates(
    current: &VoicedChord,
    next: &ChordFormula,
    include_inversions: bool,
) -> Result<CandidateBuckets> {
    let targets = next.voiced_degrees();
    let mut buckets = CandidateBuckets::new();

    let upper_voices = match (include_inversions, current.notes().split_first()) {
        (true, Some((bass, rest))) => {
            let degree = next.bass_degree()?;
            let class = next.bass_pitch_class()?;
            buckets.add_free_octave(*bass, degree, class);
            rest
        }
        _ => current.notes(),
    };

    for &from in upper_voices {
        for &(degree, class) in &targets {
            buckets.add_nearest(from, degree, class);
        }
    }

    log::trace!(
        "{} candidate buckets for {} -> {}",
        buckets.len(),
        current.formula(),
        next
    );
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Inversion, Triad};
    use std::sync::Arc;

    fn formula(root: &str, triad: Triad) -> ChordFormula {
        ChordFormula::triad(root.parse().unwrap(), triad)
    }

    fn voiced(formula: ChordFormula, notes: &[(u8, &str)]) -> VoicedChord {
        VoicedChord::new(
            Arc::new(formula),
            notes
                .iter()
                .map(|(d, p)| VoicedNote::new(*d, p.parse().unwrap()))
                .collect(),
        )
    }

    #[test]
    fn test_nearest_matches_brute_force() {
        for current in 30..70 {
            for target in 0..12u8 {
                let (cost, placements) = nearest_placements(current, target);

                let true_min = (-3..=3)
                    .map(|octave| {
                        let abs = (current.div_euclid(12) + octave) * 12 + target as i32;
                        (abs - current).unsigned_abs()
                    })
                    .min()
                    .unwrap();
                assert_eq!(cost, true_min, "current {current} target {target}");

                for abs in &placements {
                    assert_eq!(abs.rem_euclid(12), target as i32);
                    assert_eq!((abs - current).unsigned_abs(), cost);
                }
                if cost == 6 {
                    assert_eq!(placements.len(), 2);
                } else {
                    assert_eq!(placements.len(), 1);
                }
            }
        }
    }

    #[test]
    fn test_octave_neighbours() {
        // E4 towards G: G3 below, G4 above
        assert_eq!(octave_neighbours(52, 7), (43, 55));
        // D4 towards C: C4 below, C5 above
        assert_eq!(octave_neighbours(50, 0), (48, 60));
    }

    #[test]
    fn test_free_octave_bucket_comes_first() {
        let current = voiced(
            formula("C", Triad::Major),
            &[(1, "C4"), (3, "E4"), (5, "G4"), (1, "C5")],
        );
        let mut buckets =
            generate_candidates(&current, &formula("G", Triad::Major), true).unwrap();

        let (cost, bass_moves) = buckets.pop_cheapest().unwrap();
        assert_eq!(cost, CandidateCost::FreeOctave);
        let targets: Vec<String> = bass_moves.iter().map(|t| t.to.pitch.to_string()).collect();
        assert_eq!(targets, vec!["G3", "G4"]);
        assert!(bass_moves.iter().all(|t| t.from.abs() == 48));

        // The bass never appears outside the free-octave bucket
        assert!(buckets.transitions().all(|t| t.from.abs() != 48));

        let (cost, held) = buckets.pop_cheapest().unwrap();
        assert_eq!(cost, CandidateCost::Semitones(0));
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].to.pitch.to_string(), "G4");
    }

    #[test]
    fn test_without_inversions_bass_competes() {
        let current = voiced(
            formula("C", Triad::Major),
            &[(1, "C4"), (3, "E4"), (5, "G4"), (1, "C5")],
        );
        let buckets = generate_candidates(&current, &formula("G", Triad::Major), false).unwrap();
        assert!(buckets.costs().all(|c| c != CandidateCost::FreeOctave));
        assert!(buckets
            .transitions()
            .any(|t| t.from.abs() == 48 && t.to.pitch.to_string() == "B3"));
    }

    #[test]
    fn test_bass_on_common_tone_holds() {
        let current = voiced(
            formula("C", Triad::Major),
            &[(1, "C3"), (5, "G3"), (3, "E4"), (1, "C5")],
        );
        let a_minor_six = formula("A", Triad::Minor).with_inversion(Inversion::Six);
        let mut buckets = generate_candidates(&current, &a_minor_six, true).unwrap();
        assert!(buckets.costs().all(|c| c != CandidateCost::FreeOctave));

        let (cost, held) = buckets.pop_cheapest().unwrap();
        assert_eq!(cost, CandidateCost::Semitones(0));
        assert!(held
            .iter()
            .any(|t| t.from.abs() == 36 && t.to.abs() == 36 && t.to.degree == 3));
        assert!(buckets.transitions().all(|t| t.from.abs() != 36));
    }

    #[test]
    fn test_transition_distance() {
        let t = Transition {
            from: VoicedNote::new(1, "C4".parse().unwrap()),
            to: VoicedNote::new(1, "G3".parse().unwrap()),
            cost: CandidateCost::FreeOctave,
        };
        assert_eq!(t.delta(), -5);
        assert_eq!(t.distance(), 5);
        assert!(t.moved());
    }
}
