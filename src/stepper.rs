//! Interactive stepping through a progression
//!
//! Each node of the decision tree is one chosen voicing. Children (the
//! minimum-cost voicings of the next chord) are computed the first time a
//! node is visited and kept, so going back and forward again is free.

use satb_core::{
    ChordFormula, HarmonyError, Pitch, ProgressionSolver, StepSolution, VoiceLeadingSequence,
    VoicedChord,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("The progression is already complete")]
    Complete,

    #[error("No option {0}; choose a number from the list")]
    NoSuchOption(usize),

    #[error(transparent)]
    Harmony(#[from] HarmonyError),
}

#[derive(Debug)]
struct StepNode {
    voicing: VoicedChord,
    /// Accumulated cost from the root
    cost: u32,
    parent: Option<usize>,
    depth: usize,
    children: Option<StepChildren>,
}

#[derive(Debug)]
struct StepChildren {
    step_cost: u32,
    nodes: Vec<usize>,
}

pub struct Stepper {
    solver: ProgressionSolver,
    chords: Vec<Arc<ChordFormula>>,
    nodes: Vec<StepNode>,
    cursor: usize,
}

impl Stepper {
    pub fn new(
        solver: ProgressionSolver,
        chords: Vec<Arc<ChordFormula>>,
        initial: &[Pitch],
    ) -> Result<Self, StepError> {
        solver.config().validate()?;
        let first = chords.first().ok_or(HarmonyError::EmptyProgression)?;
        for chord in &chords {
            chord.validate(solver.config().voice_count)?;
        }
        let voicing = solver.initial_voicing(first, initial)?;

        Ok(Stepper {
            solver,
            chords,
            nodes: vec![StepNode {
                voicing,
                cost: 0,
                parent: None,
                depth: 0,
                children: None,
            }],
            cursor: 0,
        })
    }

    pub fn chords(&self) -> &[Arc<ChordFormula>] {
        &self.chords
    }

    pub fn current(&self) -> &VoicedChord {
        &self.nodes[self.cursor].voicing
    }

    /// Index of the current chord in the progression
    pub fn position(&self) -> usize {
        self.nodes[self.cursor].depth
    }

    pub fn is_complete(&self) -> bool {
        self.position() + 1 >= self.chords.len()
    }

    pub fn next_chord(&self) -> Option<&Arc<ChordFormula>> {
        self.chords.get(self.position() + 1)
    }

    /// Voicings available for the next chord, computed on first visit
    pub fn options(&mut self) -> Result<StepSolution, StepError> {
        let next = Arc::clone(self.next_chord().ok_or(StepError::Complete)?);
        let children = match &self.nodes[self.cursor].children {
            Some(children) => children.nodes.clone(),
            None => self.expand(&next)?,
        };
        if children.is_empty() {
            return Err(HarmonyError::UnableToTransition {
                from: self.chords[self.position()].to_string(),
                to: next.to_string(),
            }
            .into());
        }

        let step_cost = self.nodes[self.cursor]
            .children
            .as_ref()
            .map(|children| children.step_cost)
            .unwrap_or(0);
        Ok(StepSolution {
            voicings: children
                .iter()
                .map(|&index| self.nodes[index].voicing.clone())
                .collect(),
            cost: step_cost,
        })
    }

    fn expand(&mut self, next: &Arc<ChordFormula>) -> Result<Vec<usize>, StepError> {
        let parent = self.cursor;
        let step = self.solver.solve_step(&self.nodes[parent].voicing, next)?;
        let (cost, depth) = (self.nodes[parent].cost, self.nodes[parent].depth);

        let mut indices = Vec::with_capacity(step.voicings.len());
        for voicing in step.voicings {
            indices.push(self.nodes.len());
            self.nodes.push(StepNode {
                voicing,
                cost: cost + step.cost,
                parent: Some(parent),
                depth: depth + 1,
                children: None,
            });
        }
        log::debug!("expanded node {} into {} options", parent, indices.len());

        self.nodes[parent].children = Some(StepChildren {
            step_cost: step.cost,
            nodes: indices.clone(),
        });
        Ok(indices)
    }

    /// Move forward to option `choice` (1-based, as listed)
    pub fn choose(&mut self, choice: usize) -> Result<&VoicedChord, StepError> {
        self.options()?;
        let index = self.nodes[self.cursor]
            .children
            .as_ref()
            .and_then(|children| children.nodes.get(choice.wrapping_sub(1)).copied())
            .ok_or(StepError::NoSuchOption(choice))?;
        self.cursor = index;
        Ok(self.current())
    }

    /// Return to the previous chord. False when already at the start.
    pub fn back(&mut self) -> bool {
        match self.nodes[self.cursor].parent {
            Some(parent) => {
                self.cursor = parent;
                true
            }
            None => false,
        }
    }

    /// The path from the starting voicing to the current node
    pub fn sequence(&self) -> VoiceLeadingSequence {
        let mut path = Vec::new();
        let mut index = self.cursor;
        while let Some(parent) = self.nodes[index].parent {
            path.push(index);
            index = parent;
        }

        let mut sequence = VoiceLeadingSequence::new(self.nodes[index].voicing.clone());
        for &index in path.iter().rev() {
            let step_cost = self.nodes[index].cost - sequence.cost();
            sequence = sequence.extended(self.nodes[index].voicing.clone(), step_cost);
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_template;
    use satb_core::SolverConfig;

    fn stepper(source: &str) -> Stepper {
        let template = parse_template(source).unwrap();
        let solver = ProgressionSolver::new(SolverConfig::default()).unwrap();
        Stepper::new(solver, template.chords, &template.initial).unwrap()
    }

    #[test]
    fn test_step_forward_and_back() {
        let mut stepper = stepper("C4 E4 G4 C5\nC\nF\nG7\nC\n");
        assert_eq!(stepper.position(), 0);
        assert!(!stepper.back());

        let options = stepper.options().unwrap();
        assert_eq!(options.cost, 10);
        assert_eq!(options.voicings.len(), 1);

        let chosen = stepper.choose(1).unwrap().clone();
        assert_eq!(chosen.formula().to_string(), "F");
        assert_eq!(stepper.position(), 1);
        assert_eq!(stepper.sequence().cost(), 10);

        assert!(stepper.back());
        assert_eq!(stepper.position(), 0);
        // Children are kept, so the same option is chosen again
        assert_eq!(stepper.choose(1).unwrap(), &chosen);
    }

    #[test]
    fn test_step_to_completion() {
        let mut stepper = stepper("C4 E4 G4 C5\nC\nF\nG7\nC\n");
        while !stepper.is_complete() {
            stepper.choose(1).unwrap();
        }
        let sequence = stepper.sequence();
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.cost(), 22);
        assert_eq!(stepper.options().unwrap_err(), StepError::Complete);
        assert_eq!(stepper.choose(1).unwrap_err(), StepError::Complete);
    }

    #[test]
    fn test_invalid_choice() {
        let mut stepper = stepper("C4 E4 G4 C5\nC\nG\n");
        assert_eq!(stepper.choose(0).unwrap_err(), StepError::NoSuchOption(0));
        assert_eq!(stepper.choose(5).unwrap_err(), StepError::NoSuchOption(5));
        assert_eq!(stepper.position(), 0);
    }

    #[test]
    fn test_dead_end_reports_chords() {
        let mut stepper = stepper("G3 D4 F4 B4\nG7\nG7\n");
        assert_eq!(
            stepper.options().unwrap_err(),
            StepError::Harmony(HarmonyError::UnableToTransition {
                from: "G7".to_string(),
                to: "G7".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_bad_start() {
        let template = parse_template("C4 E4 G4\nC\nG\n").unwrap();
        let solver = ProgressionSolver::default();
        let result = Stepper::new(solver, template.chords, &template.initial);
        assert!(matches!(
            result,
            Err(StepError::Harmony(HarmonyError::InvalidInitialVoicing(_)))
        ));
    }
}
