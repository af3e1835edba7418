//! Branch-and-bound search over voice assignments
//!
//! Candidate buckets are consumed cheapest first. Every bucket widens the set
//! of partial assignments; as soon as a tier produces a complete assignment
//! that passes the rule engine, the cheapest passing assignments are returned.

use crate::solver::candidates::{CandidateBuckets, CandidateCost, Transition};
use crate::solver::rules::{self, Rule, TransitionContext};
use crate::types::{ChordFormula, VoicedChord};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

/// Chosen move per voice, keyed by the voice's current absolute pitch.
///
/// The ordered map doubles as the canonical dedupe key: two assignments with
/// the same moves compare equal however they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment {
    moves: BTreeMap<i32, Transition>,
}

impl Assignment {
    pub fn seeded(transition: Transition) -> Self {
        let mut assignment = Self::default();
        assignment.moves.insert(transition.source(), transition);
        assignment
    }

    /// Copy of this assignment with `transition` set for its voice
    pub fn with(&self, transition: Transition) -> Self {
        let mut moves = self.moves.clone();
        moves.insert(transition.source(), transition);
        Assignment { moves }
    }

    pub fn assigns(&self, source: i32) -> bool {
        self.moves.contains_key(&source)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves ordered from the lowest current voice up
    pub fn moves(&self) -> Vec<Transition> {
        self.moves.values().copied().collect()
    }

    /// Total movement in semitones, free-octave moves counted by distance
    pub fn cost(&self) -> u32 {
        self.moves.values().map(Transition::distance).sum()
    }

    pub fn voicing(&self, formula: &Arc<ChordFormula>) -> VoicedChord {
        VoicedChord::new(
            Arc::clone(formula),
            self.moves.values().map(|t| t.to).collect(),
        )
    }
}

/// Minimum-cost voicings for one chord-to-chord step.
/// An empty `voicings` means the step is infeasible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSolution {
    pub voicings: Vec<VoicedChord>,
    pub cost: u32,
}

impl StepSolution {
    pub fn is_empty(&self) -> bool {
        self.voicings.is_empty()
    }
}

/// Search state for a single step
pub struct BranchAndBound<'a> {
    context: TransitionContext<'a>,
    formula: &'a Arc<ChordFormula>,
    partials: BTreeSet<Assignment>,
    rejected: HashSet<Assignment>,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(
        current: &'a VoicedChord,
        next: &'a Arc<ChordFormula>,
        voice_count: usize,
    ) -> Self {
        BranchAndBound {
            context: TransitionContext::new(current, next, voice_count),
            formula: next,
            partials: BTreeSet::new(),
            rejected: HashSet::new(),
        }
    }

    /// Consume `buckets` until a tier yields valid assignments
    pub fn solve(mut self, mut buckets: CandidateBuckets) -> StepSolution {
        while let Some((cost, bucket)) = buckets.pop_cheapest() {
            for transition in bucket {
                self.branch(transition);
            }

            let passing = self.validate_tier(cost);
            if let Some(min) = passing.iter().map(Assignment::cost).min() {
                let voicings: Vec<VoicedChord> = passing
                    .iter()
                    .filter(|assignment| assignment.cost() == min)
                    .map(|assignment| assignment.voicing(self.formula))
                    .collect();
                log::trace!(
                    "{} -> {}: {} voicing(s) at cost {}",
                    self.context.current.formula(),
                    self.formula,
                    voicings.len(),
                    min
                );
                return StepSolution {
                    voicings,
                    cost: min,
                };
            }
        }

        StepSolution::default()
    }

    fn branch(&mut self, transition: Transition) {
        if self.partials.is_empty() {
            self.partials.insert(Assignment::seeded(transition));
            return;
        }

        let source = transition.source();
        let mut branched = BTreeSet::new();
        for assignment in &self.partials {
            if assignment.assigns(source) {
                branched.insert(assignment.clone());
            }
            branched.insert(assignment.with(transition));
        }
        self.partials = branched;
    }

    fn validate_tier(&mut self, cost: CandidateCost) -> Vec<Assignment> {
        let voice_count = self.context.voice_count;
        let mut passing = Vec::new();

        for assignment in &self.partials {
            if assignment.len() != voice_count || self.rejected.contains(assignment) {
                continue;
            }

            let moves = assignment.moves();
            if rules::is_valid(&moves, &self.context) {
                passing.push(assignment.clone());
            } else {
                if log::log_enabled!(log::Level::Trace) {
                    if let Some(rule) = Rule::first_violation(&moves, &self.context) {
                        log::trace!("{:?} rejected by {}", cost, rule.name());
                    }
                }
                self.rejected.insert(assignment.clone());
            }
        }

        passing
    }
}
