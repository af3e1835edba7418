//! Progression-level beam search
//!
//! Chains single-step solutions into whole-progression voice leadings. The
//! beam is pruned after every intermediate chord and reduced to the global
//! optimum after the last one.

use crate::error::{HarmonyError, Result};
use crate::solver::candidates::generate_candidates;
use crate::solver::optimizer::{BranchAndBound, StepSolution};
use crate::types::{
    ChordFormula, Pitch, SolverConfig, VoiceLeadingSequence, VoicedChord, VoicedNote,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ProgressionSolver {
    config: SolverConfig,
}

impl ProgressionSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(ProgressionSolver { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Check the user's starting pitches against the first chord and tag each
    /// with its degree. Pitches are respelled to the chord's spelling.
    pub fn initial_voicing(
        &self,
        formula: &Arc<ChordFormula>,
        pitches: &[Pitch],
    ) -> Result<VoicedChord> {
        if pitches.len() != self.config.voice_count {
            return Err(HarmonyError::InvalidInitialVoicing(format!(
                "expected {} notes, got {}",
                self.config.voice_count,
                pitches.len()
            )));
        }

        let mut notes = Vec::with_capacity(pitches.len());
        for pitch in pitches {
            let degree = formula.degree_for_semitone(pitch.semitone()).ok_or_else(|| {
                HarmonyError::InvalidInitialVoicing(format!("{} is not in {}", pitch, formula))
            })?;
            let class = formula.pitch_class(degree).unwrap_or(pitch.class());
            notes.push(VoicedNote::new(degree, Pitch::from_abs(class, pitch.abs())));
        }

        let voicing = VoicedChord::new(Arc::clone(formula), notes);
        if voicing
            .notes()
            .windows(2)
            .any(|pair| pair[0].abs() == pair[1].abs())
        {
            return Err(HarmonyError::InvalidInitialVoicing(
                "two voices share a pitch".to_string(),
            ));
        }

        let bass = formula.bass_pitch_class()?;
        match voicing.bass() {
            Some(note) if note.pitch.semitone() == bass.semitone() => Ok(voicing),
            Some(note) => Err(HarmonyError::InvalidInitialVoicing(format!(
                "{} needs {} in the bass, found {}",
                formula, bass, note.pitch
            ))),
            None => Err(HarmonyError::InvalidInitialVoicing(
                "no notes given".to_string(),
            )),
        }
    }

    /// Cheapest valid voicings of `next` reachable from `current`
    pub fn solve_step(
        &self,
        current: &VoicedChord,
        next: &Arc<ChordFormula>,
    ) -> Result<StepSolution> {
        let buckets = generate_candidates(current, next, self.config.include_inversions)?;
        Ok(BranchAndBound::new(current, next, self.config.voice_count).solve(buckets))
    }

    /// Solve a whole progression from the given starting pitches.
    ///
    /// Returns every sequence tied for the minimum total cost.
    pub fn solve(
        &self,
        progression: &[Arc<ChordFormula>],
        initial: &[Pitch],
    ) -> Result<Vec<VoiceLeadingSequence>> {
        self.config.validate()?;
        let (first, rest) = progression
            .split_first()
            .ok_or(HarmonyError::EmptyProgression)?;
        for formula in progression {
            formula.validate(self.config.voice_count)?;
        }

        let seed = self.initial_voicing(first, initial)?;
        let mut beam = vec![VoiceLeadingSequence::new(seed)];
        let mut previous = first;

        for (index, next) in rest.iter().enumerate() {
            let mut steps: HashMap<Vec<Pitch>, StepSolution> = HashMap::new();
            let mut branched = Vec::new();

            for sequence in &beam {
                let last = sequence.last();
                let step = match steps.get(&last.key()) {
                    Some(step) => step.clone(),
                    None => {
                        let step = self.solve_step(last, next)?;
                        steps.insert(last.key(), step.clone());
                        step
                    }
                };
                for voicing in step.voicings {
                    branched.push(sequence.extended(voicing, step.cost));
                }
            }

            if branched.is_empty() {
                return Err(HarmonyError::UnableToTransition {
                    from: previous.to_string(),
                    to: next.to_string(),
                });
            }

            beam = if index + 1 == rest.len() {
                keep_minimum(branched)
            } else {
                aggregate(branched, self.config.cost_slack)
            };
            log::debug!("step {} ({}): beam of {}", index + 1, next, beam.len());
            previous = next;
        }

        Ok(beam)
    }
}

/// Keep the cheapest sequence(s) per resulting voicing, then drop anything
/// costing more than the overall minimum plus `slack`
pub fn aggregate(beam: Vec<VoiceLeadingSequence>, slack: u32) -> Vec<VoiceLeadingSequence> {
    let mut groups: BTreeMap<Vec<Pitch>, Vec<VoiceLeadingSequence>> = BTreeMap::new();
    for sequence in beam {
        groups.entry(sequence.last().key()).or_default().push(sequence);
    }

    let survivors: Vec<VoiceLeadingSequence> =
        groups.into_values().flat_map(keep_minimum).collect();

    let Some(min) = survivors.iter().map(VoiceLeadingSequence::cost).min() else {
        return survivors;
    };
    survivors
        .into_iter()
        .filter(|sequence| sequence.cost() <= min.saturating_add(slack))
        .collect()
}

/// Sequences tied for the minimum cost
pub fn keep_minimum(beam: Vec<VoiceLeadingSequence>) -> Vec<VoiceLeadingSequence> {
    let Some(min) = beam.iter().map(VoiceLeadingSequence::cost).min() else {
        return beam;
    };
    beam.into_iter()
        .filter(|sequence| sequence.cost() == min)
        .collect()
}
