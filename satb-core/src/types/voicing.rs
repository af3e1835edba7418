use crate::types::formula::ChordFormula;
use crate::types::pitch::Pitch;
use std::fmt;
use std::sync::Arc;

/// One voice of a voiced chord: the scale degree it plays and its pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoicedNote {
    pub degree: u8,
    pub pitch: Pitch,
}

impl VoicedNote {
    pub fn new(degree: u8, pitch: Pitch) -> Self {
        VoicedNote { degree, pitch }
    }

    pub fn abs(&self) -> i32 {
        self.pitch.abs()
    }
}

/// A concrete realization of a chord formula, one pitch per voice.
/// Notes are kept sorted from the lowest voice up.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoicedChord {
    formula: Arc<ChordFormula>,
    notes: Vec<VoicedNote>,
}

impl VoicedChord {
    pub fn new(formula: Arc<ChordFormula>, mut notes: Vec<VoicedNote>) -> Self {
        notes.sort_by_key(|note| note.pitch);
        VoicedChord { formula, notes }
    }

    pub fn formula(&self) -> &Arc<ChordFormula> {
        &self.formula
    }

    /// Notes from the bass up
    pub fn notes(&self) -> &[VoicedNote] {
        &self.notes
    }

    pub fn pitches(&self) -> Vec<Pitch> {
        self.notes.iter().map(|note| note.pitch).collect()
    }

    pub fn bass(&self) -> Option<&VoicedNote> {
        self.notes.first()
    }

    pub fn voice_count(&self) -> usize {
        self.notes.len()
    }

    /// Identity of the sounding voicing, independent of which formula produced it
    pub fn key(&self) -> Vec<Pitch> {
        self.pitches()
    }
}

impl fmt::Display for VoicedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pitches: Vec<String> = self.notes.iter().map(|n| n.pitch.to_string()).collect();
        write!(f, "{} [{}]", self.formula, pitches.join(", "))
    }
}

/// A chain of voiced chords with the accumulated movement cost.
///
/// Branching never mutates a sequence in place; [`VoiceLeadingSequence::extended`]
/// returns an independent copy. A sequence is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SequenceRecord"))]
pub struct VoiceLeadingSequence {
    chords: Vec<VoicedChord>,
    cost: u32,
}

/// Unchecked wire form of a sequence
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SequenceRecord {
    chords: Vec<VoicedChord>,
    cost: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<SequenceRecord> for VoiceLeadingSequence {
    type Error = String;

    fn try_from(record: SequenceRecord) -> Result<Self, Self::Error> {
        if record.chords.is_empty() {
            return Err("a voice-leading sequence needs at least one chord".to_string());
        }
        Ok(VoiceLeadingSequence {
            chords: record.chords,
            cost: record.cost,
        })
    }
}

impl VoiceLeadingSequence {
    pub fn new(initial: VoicedChord) -> Self {
        VoiceLeadingSequence {
            chords: vec![initial],
            cost: 0,
        }
    }

    pub fn extended(&self, chord: VoicedChord, step_cost: u32) -> Self {
        let mut chords = self.chords.clone();
        chords.push(chord);
        VoiceLeadingSequence {
            chords,
            cost: self.cost + step_cost,
        }
    }

    pub fn chords(&self) -> &[VoicedChord] {
        &self.chords
    }

    pub fn last(&self) -> &VoicedChord {
        // Non-empty from construction and deserialization
        &self.chords[self.chords.len() - 1]
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

impl fmt::Display for VoiceLeadingSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{}", chord)?;
        }
        write!(f, " (cost {})", self.cost)
    }
}
