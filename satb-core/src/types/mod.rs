// satb-core/src/types/mod.rs

pub mod config;
pub mod formula;
pub mod pitch;
pub mod voicing;

pub use config::SolverConfig;
pub use formula::{ChordFormula, Extension, FrequencyRange, Inversion, Seventh, Suspension, Triad};
pub use pitch::{Accidental, Letter, Pitch, PitchClass};
pub use voicing::{VoiceLeadingSequence, VoicedChord, VoicedNote};
