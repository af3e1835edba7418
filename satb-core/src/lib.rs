//! # SATB Core
//!
//! Pitch model, chord formulas and the transition search behind the `satb`
//! voice-leading solver. No terminal or file dependencies.
//!
//! ## Features
//!
//! - **serde**: Serialize voicings and sequences (used for JSON output)
//!
//! ## Example
//!
//! ```
//! use satb_core::types::{ChordFormula, Pitch, SolverConfig, Triad};
//! use satb_core::ProgressionSolver;
//! use std::sync::Arc;
//!
//! let c = Arc::new(ChordFormula::triad("C".parse()?, Triad::Major));
//! let g = Arc::new(ChordFormula::triad("G".parse()?, Triad::Major));
//! let start: Vec<Pitch> = ["C4", "E4", "G4", "C5"]
//!     .iter()
//!     .map(|p| p.parse())
//!     .collect::<Result<_, _>>()?;
//!
//! let solver = ProgressionSolver::new(SolverConfig::default())?;
//! let best = solver.solve(&[c, g], &start)?;
//! assert_eq!(best[0].cost(), 8);
//! # Ok::<(), satb_core::HarmonyError>(())
//! ```

pub mod error;
pub mod solver;
pub mod types;

// Re-export commonly used types
pub use error::{HarmonyError, Result};
pub use solver::{ProgressionSolver, StepSolution};
pub use types::{ChordFormula, Pitch, PitchClass, SolverConfig, VoiceLeadingSequence, VoicedChord};
