use thiserror::Error;

/// Failures surfaced by the harmony core.
///
/// Everything here is fatal for the call that produced it. Rejected
/// assignments and duplicate branches during search are normal pruning and
/// never show up as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarmonyError {
    #[error("Invalid note name: {0}")]
    InvalidPitchName(String),

    #[error("Invalid inversion {inversion} for chord {chord}")]
    InvalidInversion { chord: String, inversion: String },

    #[error("Chord {chord} requires {required} essential notes but only {voices} voices are available")]
    TooManyEssentialNotes {
        chord: String,
        required: usize,
        voices: usize,
    },

    #[error("Cannot alter degree {degree} of chord {chord}")]
    InvalidAlteration { chord: String, degree: u8 },

    #[error("Invalid initial voicing: {0}")]
    InvalidInitialVoicing(String),

    #[error("Voice count must be between 4 and 6, got {0}")]
    InvalidVoiceCount(usize),

    #[error("No chords were given")]
    EmptyProgression,

    #[error("Unable to transition between: {from} and {to}")]
    UnableToTransition { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, HarmonyError>;
