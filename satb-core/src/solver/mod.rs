// satb-core/src/solver/mod.rs

pub mod candidates;
pub mod optimizer;
pub mod progression;
pub mod rules;

pub use candidates::{generate_candidates, CandidateBuckets, CandidateCost, Transition};
pub use optimizer::{Assignment, BranchAndBound, StepSolution};
pub use progression::{aggregate, keep_minimum, ProgressionSolver};
pub use rules::{Rule, TransitionContext, VoicePart};
