//! # SATB
//!
//! Terminal front end for the `satb-core` voice-leading solver: chord-symbol
//! and template parsing, colored rendering, and an interactive stepper.
//!
//! ## Modules
//!
//! - `parser`: Chord symbols (`G7_65`, `Dmin7`, `C-sus4`) and template files.
//! - `render`: Pitch grids for the terminal and JSON reports.
//! - `stepper`: Decision tree for choosing one voicing per chord by hand.
//! - `repl`: rustyline loop driving the stepper.
//! - `commands`: Command registry used by the REPL.

pub mod commands;
pub mod parser;
pub mod render;
pub mod repl;
pub mod stepper;

// Re-export commonly used types and functions for convenience
pub use crate::parser::{load_template, parse_chord, parse_template, ParseError, Template};
pub use crate::stepper::{StepError, Stepper};
pub use satb_core::{HarmonyError, ProgressionSolver, SolverConfig, VoiceLeadingSequence};
