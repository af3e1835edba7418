//! Chord formulas
//!
//! A [`ChordFormula`] describes a chord abstractly: a root, a map from scale
//! degree to semitone interval, which degrees must be present in every
//! voicing, which may not be doubled, and which degree sits in the bass.
//!
//! Formulas are built by chaining transformations on a base triad:
//!
//! ```
//! use satb_core::types::{ChordFormula, Inversion, PitchClass, Seventh, Triad};
//!
//! let g7 = ChordFormula::triad("G".parse::<PitchClass>().unwrap(), Triad::Major)
//!     .with_seventh(Seventh::Minor)
//!     .with_inversion(Inversion::SixFive);
//! assert!(g7.is_dominant());
//! assert_eq!(g7.bass_degree().unwrap(), 3);
//! ```

use crate::error::{HarmonyError, Result};
use crate::types::pitch::PitchClass;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Triad {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl Triad {
    fn third(self) -> i8 {
        match self {
            Triad::Major | Triad::Augmented => 4,
            Triad::Minor | Triad::Diminished => 3,
        }
    }

    fn fifth(self) -> i8 {
        match self {
            Triad::Major | Triad::Minor => 7,
            Triad::Diminished => 6,
            Triad::Augmented => 8,
        }
    }
}

/// Quality of the added seventh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seventh {
    Major,
    Minor,
    Diminished,
}

impl Seventh {
    fn interval(self) -> i8 {
        match self {
            Seventh::Major => 11,
            Seventh::Minor => 10,
            Seventh::Diminished => 9,
        }
    }
}

/// Compound extension stacked on a seventh chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extension {
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Extension {
    /// The topmost degree the extension adds
    pub fn degree(self) -> u8 {
        match self {
            Extension::Ninth => 9,
            Extension::Eleventh => 11,
            Extension::Thirteenth => 13,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suspension {
    Second,
    Fourth,
}

impl Suspension {
    pub fn degree(self) -> u8 {
        match self {
            Suspension::Second => 2,
            Suspension::Fourth => 4,
        }
    }

    fn interval(self) -> i8 {
        match self {
            Suspension::Second => 2,
            Suspension::Fourth => 5,
        }
    }
}

/// Figured-bass inversion tag.
///
/// Which tags are legal depends on the chord: triads take `6` and `64`,
/// seventh chords `65`, `43` and `42`, and chords with compound extensions
/// only root position. The check happens in [`ChordFormula::bass_degree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inversion {
    #[default]
    Root,
    Six,
    SixFour,
    SixFive,
    FourThree,
    FourTwo,
}

impl Inversion {
    /// Parse a figure such as `6`, `64` or `43`. The empty string is root position.
    pub fn from_figure(figure: &str) -> Option<Inversion> {
        match figure.trim() {
            "" | "root" | "53" | "7" => Some(Inversion::Root),
            "6" | "63" => Some(Inversion::Six),
            "64" => Some(Inversion::SixFour),
            "65" => Some(Inversion::SixFive),
            "43" => Some(Inversion::FourThree),
            "42" | "2" => Some(Inversion::FourTwo),
            _ => None,
        }
    }

    pub fn figure(&self) -> &'static str {
        match self {
            Inversion::Root => "",
            Inversion::Six => "6",
            Inversion::SixFour => "64",
            Inversion::SixFive => "65",
            Inversion::FourThree => "43",
            Inversion::FourTwo => "42",
        }
    }
}

/// Allowed number of voices on one degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyRange {
    pub min: usize,
    pub max: usize,
}

impl FrequencyRange {
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordFormula {
    name: Option<String>,
    root: PitchClass,
    triad: Triad,
    seventh: Option<Seventh>,
    extension: Option<Extension>,
    suspension: Option<Suspension>,
    inversion: Inversion,
    degrees: BTreeMap<u8, i8>,
    essential: BTreeSet<u8>,
    non_duplicable: BTreeSet<u8>,
}

impl ChordFormula {
    /// A root-position triad: degrees 1, 3 and 5, all essential
    pub fn triad(root: PitchClass, triad: Triad) -> Self {
        let degrees = BTreeMap::from([(1, 0), (3, triad.third()), (5, triad.fifth())]);
        ChordFormula {
            name: None,
            root,
            triad,
            seventh: None,
            extension: None,
            suspension: None,
            inversion: Inversion::Root,
            degrees,
            essential: BTreeSet::from([1, 3, 5]),
            non_duplicable: BTreeSet::new(),
        }
    }

    /// Add a seventh. The fifth becomes optional; the third and seventh
    /// become essential and may not be doubled.
    pub fn with_seventh(mut self, seventh: Seventh) -> Self {
        let third = self.third_degree();
        self.seventh = Some(seventh);
        self.degrees.insert(7, seventh.interval());
        self.essential.remove(&5);
        self.essential.insert(7);
        self.non_duplicable.insert(third);
        self.non_duplicable.insert(7);
        self
    }

    /// Stack a compound extension (ninth, perfect eleventh, major thirteenth
    /// and everything below it). The ninth is minor over a minor triad and
    /// major otherwise. A minor seventh is added first if the formula has no
    /// seventh yet.
    pub fn with_extension(mut self, extension: Extension) -> Self {
        if self.seventh.is_none() {
            self = self.with_seventh(Seventh::Minor);
        }
        if let Some(previous) = self.extension {
            self.essential.remove(&previous.degree());
            self.non_duplicable.remove(&previous.degree());
        }

        let ninth = match self.triad {
            Triad::Minor => 13,
            _ => 14,
        };
        self.degrees.insert(9, ninth);
        if extension >= Extension::Eleventh {
            self.degrees.insert(11, 17);
        }
        if extension >= Extension::Thirteenth {
            self.degrees.insert(13, 21);
        }

        self.extension = Some(extension);
        self.essential.insert(extension.degree());
        self.non_duplicable.insert(extension.degree());
        self
    }

    /// Raise or lower the topmost compound degree by `delta` semitones
    pub fn alter_extension(mut self, delta: i8) -> Result<Self> {
        let Some(extension) = self.extension else {
            return Err(HarmonyError::InvalidAlteration {
                chord: self.name(),
                degree: 9,
            });
        };
        let degree = extension.degree();
        if let Some(interval) = self.degrees.get_mut(&degree) {
            *interval += delta;
        }
        Ok(self)
    }

    /// Replace the third with a suspended second or fourth. Only root-position
    /// chords can be suspended.
    pub fn suspend(mut self, suspension: Suspension) -> Result<Self> {
        if self.inversion != Inversion::Root {
            return Err(HarmonyError::InvalidInversion {
                chord: self.name(),
                inversion: self.inversion.figure().to_string(),
            });
        }
        if self.degrees.remove(&3).is_none() {
            return Err(HarmonyError::InvalidAlteration {
                chord: self.name(),
                degree: 3,
            });
        }

        let degree = suspension.degree();
        self.suspension = Some(suspension);
        self.degrees.insert(degree, suspension.interval());
        if self.essential.remove(&3) {
            self.essential.insert(degree);
        }
        if self.non_duplicable.remove(&3) {
            self.non_duplicable.insert(degree);
        }
        Ok(self)
    }

    /// Raise or lower an existing degree by `delta` semitones; the altered
    /// degree becomes essential
    pub fn alter(mut self, degree: u8, delta: i8) -> Result<Self> {
        match self.degrees.get_mut(&degree) {
            Some(interval) => *interval += delta,
            None => {
                return Err(HarmonyError::InvalidAlteration {
                    chord: self.name(),
                    degree,
                })
            }
        }
        self.essential.insert(degree);
        Ok(self)
    }

    pub fn with_inversion(mut self, inversion: Inversion) -> Self {
        self.inversion = inversion;
        self
    }

    /// Attach the symbol the chord was written as, used in error messages
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_degree(&mut self, degree: u8, interval: i8) {
        self.degrees.insert(degree, interval);
    }

    pub fn remove_degree(&mut self, degree: u8) -> bool {
        self.essential.remove(&degree);
        self.non_duplicable.remove(&degree);
        self.degrees.remove(&degree).is_some()
    }

    pub fn name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.to_string(),
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn triad_quality(&self) -> Triad {
        self.triad
    }

    pub fn seventh(&self) -> Option<Seventh> {
        self.seventh
    }

    pub fn extension(&self) -> Option<Extension> {
        self.extension
    }

    pub fn suspension(&self) -> Option<Suspension> {
        self.suspension
    }

    pub fn inversion(&self) -> Inversion {
        self.inversion
    }

    pub fn degrees(&self) -> impl Iterator<Item = (u8, i8)> + '_ {
        self.degrees.iter().map(|(&d, &i)| (d, i))
    }

    pub fn interval(&self, degree: u8) -> Option<i8> {
        self.degrees.get(&degree).copied()
    }

    pub fn contains_degree(&self, degree: u8) -> bool {
        self.degrees.contains_key(&degree)
    }

    pub fn note_count(&self) -> usize {
        self.degrees.len()
    }

    /// Spelled pitch class of a degree
    pub fn pitch_class(&self, degree: u8) -> Option<PitchClass> {
        self.interval(degree)
            .map(|interval| PitchClass::spelled_degree(self.root, degree, interval))
    }

    /// Every degree with its spelled pitch class, in degree order
    pub fn voiced_degrees(&self) -> Vec<(u8, PitchClass)> {
        self.degrees
            .iter()
            .map(|(&degree, &interval)| {
                (degree, PitchClass::spelled_degree(self.root, degree, interval))
            })
            .collect()
    }

    /// The degree whose pitch class has the given semitone value
    pub fn degree_for_semitone(&self, semitone: u8) -> Option<u8> {
        let root = self.root.semitone() as i32;
        self.degrees
            .iter()
            .find(|(_, &interval)| (root + interval as i32).rem_euclid(12) == semitone as i32)
            .map(|(&degree, _)| degree)
    }

    pub fn essential_degrees(&self) -> &BTreeSet<u8> {
        &self.essential
    }

    pub fn non_duplicable_degrees(&self) -> &BTreeSet<u8> {
        &self.non_duplicable
    }

    /// Degree 3, or the suspension standing in for it
    fn third_degree(&self) -> u8 {
        self.suspension.map(Suspension::degree).unwrap_or(3)
    }

    /// How many voices may sit on `degree`.
    ///
    /// With `resolving_exception` set (a dominant resolving to this chord) the
    /// root may be tripled and the fifth may be left out.
    pub fn note_frequency_range(
        &self,
        degree: u8,
        resolving_exception: bool,
    ) -> Option<FrequencyRange> {
        if !self.contains_degree(degree) {
            return None;
        }

        let essential =
            self.essential.contains(&degree) && !(resolving_exception && degree == 5);
        let max = if self.non_duplicable.contains(&degree) {
            1
        } else if resolving_exception && degree == 1 {
            3
        } else {
            2
        };

        Some(FrequencyRange {
            min: usize::from(essential),
            max,
        })
    }

    pub fn frequency_ranges(&self, resolving_exception: bool) -> BTreeMap<u8, FrequencyRange> {
        self.degrees
            .keys()
            .filter_map(|&degree| {
                self.note_frequency_range(degree, resolving_exception)
                    .map(|range| (degree, range))
            })
            .collect()
    }

    /// The degree that must sound in the bass under this formula's inversion
    pub fn bass_degree(&self) -> Result<u8> {
        let degree = match (self.extension, self.seventh, self.inversion) {
            (_, _, Inversion::Root) => Some(1),
            (Some(_), _, _) => None,
            (None, Some(_), Inversion::SixFive) => Some(3),
            (None, Some(_), Inversion::FourThree) => Some(5),
            (None, Some(_), Inversion::FourTwo) => Some(7),
            (None, None, Inversion::Six) => Some(3),
            (None, None, Inversion::SixFour) => Some(5),
            _ => None,
        };

        degree
            .filter(|d| self.contains_degree(*d))
            .ok_or_else(|| HarmonyError::InvalidInversion {
                chord: self.name(),
                inversion: self.inversion.figure().to_string(),
            })
    }

    pub fn bass_pitch_class(&self) -> Result<PitchClass> {
        let degree = self.bass_degree()?;
        self.pitch_class(degree)
            .ok_or_else(|| HarmonyError::InvalidInversion {
                chord: self.name(),
                inversion: self.inversion.figure().to_string(),
            })
    }

    /// Major triad with a minor seventh, with or without extensions
    pub fn is_dominant(&self) -> bool {
        self.triad == Triad::Major && self.seventh == Some(Seventh::Minor)
    }

    /// Unsuspended major or minor triad with nothing added
    pub fn is_plain_triad(&self) -> bool {
        self.seventh.is_none()
            && self.suspension.is_none()
            && matches!(self.triad, Triad::Major | Triad::Minor)
    }

    /// True when this dominant resolves to `next` as V(7) to I/i
    pub fn resolves_as_dominant_to(&self, next: &ChordFormula) -> bool {
        self.is_dominant()
            && next.is_plain_triad()
            && next.root.semitone() == (self.root.semitone() + 5) % 12
    }

    /// Check the formula can be voiced with `voice_count` voices at all
    pub fn validate(&self, voice_count: usize) -> Result<()> {
        self.bass_degree()?;
        if self.essential.len() > voice_count {
            return Err(HarmonyError::TooManyEssentialNotes {
                chord: self.name(),
                required: self.essential.len(),
                voices: voice_count,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ChordFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            return write!(f, "{}", name);
        }

        write!(f, "{}", self.root)?;
        let quality = match (self.triad, self.seventh) {
            (Triad::Major, Some(Seventh::Major)) => "maj",
            (Triad::Major, _) => "",
            (Triad::Minor, _) => "min",
            (Triad::Diminished, _) => "dim",
            (Triad::Augmented, _) => "aug",
        };
        write!(f, "{}", quality)?;

        match (self.extension, self.seventh) {
            (Some(extension), _) => write!(f, "{}", extension.degree())?,
            (None, Some(_)) => write!(f, "7")?,
            (None, None) => {}
        }
        if let Some(suspension) = self.suspension {
            write!(f, "-sus{}", suspension.degree())?;
        }
        if self.inversion != Inversion::Root {
            write!(f, "_{}", self.inversion.figure())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(name: &str) -> PitchClass {
        name.parse().unwrap()
    }

    #[test]
    fn test_major_triad() {
        let c = ChordFormula::triad(pc("C"), Triad::Major);
        let names: Vec<String> = c
            .voiced_degrees()
            .iter()
            .map(|(_, p)| p.to_string())
            .collect();
        assert_eq!(names, vec!["C", "E", "G"]);
        assert_eq!(c.essential_degrees(), &BTreeSet::from([1, 3, 5]));
        assert!(c.non_duplicable_degrees().is_empty());
        assert_eq!(c.to_string(), "C");
    }

    #[test]
    fn test_seventh_changes_essentials() {
        let g7 = ChordFormula::triad(pc("G"), Triad::Major).with_seventh(Seventh::Minor);
        assert_eq!(g7.pitch_class(7).unwrap().to_string(), "F");
        assert_eq!(g7.essential_degrees(), &BTreeSet::from([1, 3, 7]));
        assert_eq!(g7.non_duplicable_degrees(), &BTreeSet::from([3, 7]));
        assert!(g7.is_dominant());
        assert_eq!(g7.to_string(), "G7");

        let cmaj7 = ChordFormula::triad(pc("C"), Triad::Major).with_seventh(Seventh::Major);
        assert!(!cmaj7.is_dominant());
        assert_eq!(cmaj7.to_string(), "Cmaj7");
    }

    #[test]
    fn test_extensions_replace_top_essential() {
        let c11 = ChordFormula::triad(pc("C"), Triad::Major).with_extension(Extension::Eleventh);
        assert!(c11.is_dominant());
        assert!(c11.contains_degree(9));
        assert!(c11.contains_degree(11));
        assert_eq!(c11.essential_degrees(), &BTreeSet::from([1, 3, 7, 11]));
        assert_eq!(c11.non_duplicable_degrees(), &BTreeSet::from([3, 7, 11]));
        assert_eq!(c11.pitch_class(11).unwrap().to_string(), "F");

        let flat9 = ChordFormula::triad(pc("G"), Triad::Major)
            .with_extension(Extension::Ninth)
            .alter_extension(-1)
            .unwrap();
        assert_eq!(flat9.pitch_class(9).unwrap().to_string(), "Ab");
    }

    #[test]
    fn test_minor_extensions_take_minor_ninth() {
        let cmin9 = ChordFormula::triad(pc("C"), Triad::Minor)
            .with_seventh(Seventh::Minor)
            .with_extension(Extension::Ninth);
        assert_eq!(cmin9.pitch_class(9).unwrap().to_string(), "Db");

        let amin13 = ChordFormula::triad(pc("A"), Triad::Minor)
            .with_seventh(Seventh::Minor)
            .with_extension(Extension::Thirteenth);
        assert_eq!(amin13.pitch_class(9).unwrap().to_string(), "Bb");
        assert_eq!(amin13.pitch_class(11).unwrap().to_string(), "D");
        assert_eq!(amin13.pitch_class(13).unwrap().to_string(), "F#");
    }

    #[test]
    fn test_alter_extension_requires_extension() {
        let c = ChordFormula::triad(pc("C"), Triad::Major);
        assert!(matches!(
            c.alter_extension(1),
            Err(HarmonyError::InvalidAlteration { degree: 9, .. })
        ));
    }

    #[test]
    fn test_suspension() {
        let sus4 = ChordFormula::triad(pc("D"), Triad::Major)
            .suspend(Suspension::Fourth)
            .unwrap();
        assert!(!sus4.contains_degree(3));
        assert_eq!(sus4.pitch_class(4).unwrap().to_string(), "G");
        assert_eq!(sus4.essential_degrees(), &BTreeSet::from([1, 4, 5]));

        let g7sus = ChordFormula::triad(pc("G"), Triad::Major)
            .with_seventh(Seventh::Minor)
            .suspend(Suspension::Second)
            .unwrap();
        assert_eq!(g7sus.non_duplicable_degrees(), &BTreeSet::from([2, 7]));

        let inverted = ChordFormula::triad(pc("C"), Triad::Major)
            .with_inversion(Inversion::Six)
            .suspend(Suspension::Fourth);
        assert!(matches!(
            inverted,
            Err(HarmonyError::InvalidInversion { .. })
        ));
    }

    #[test]
    fn test_alteration_becomes_essential() {
        let half_dim = ChordFormula::triad(pc("B"), Triad::Minor)
            .with_seventh(Seventh::Minor)
            .alter(5, -1)
            .unwrap();
        assert_eq!(half_dim.pitch_class(5).unwrap().to_string(), "F");
        assert!(half_dim.essential_degrees().contains(&5));

        let missing = ChordFormula::triad(pc("C"), Triad::Major).alter(9, 1);
        assert!(matches!(
            missing,
            Err(HarmonyError::InvalidAlteration { degree: 9, .. })
        ));
    }

    #[test]
    fn test_bass_degree_by_inversion() {
        let c = ChordFormula::triad(pc("C"), Triad::Major);
        assert_eq!(c.clone().bass_degree().unwrap(), 1);
        assert_eq!(
            c.clone().with_inversion(Inversion::Six).bass_degree().unwrap(),
            3
        );
        assert_eq!(
            c.clone()
                .with_inversion(Inversion::SixFour)
                .bass_pitch_class()
                .unwrap()
                .to_string(),
            "G"
        );

        // Seventh-chord figures do not apply to triads
        assert!(matches!(
            c.clone().with_inversion(Inversion::FourTwo).bass_degree(),
            Err(HarmonyError::InvalidInversion { .. })
        ));

        let g7 = ChordFormula::triad(pc("G"), Triad::Major).with_seventh(Seventh::Minor);
        assert_eq!(
            g7.clone()
                .with_inversion(Inversion::FourTwo)
                .bass_pitch_class()
                .unwrap()
                .to_string(),
            "F"
        );
        assert!(g7.with_inversion(Inversion::Six).bass_degree().is_err());

        let g9 = ChordFormula::triad(pc("G"), Triad::Major)
            .with_extension(Extension::Ninth)
            .with_inversion(Inversion::SixFive);
        assert!(g9.bass_degree().is_err());
    }

    #[test]
    fn test_frequency_ranges() {
        let c = ChordFormula::triad(pc("C"), Triad::Major);
        assert_eq!(
            c.note_frequency_range(1, false),
            Some(FrequencyRange { min: 1, max: 2 })
        );
        assert_eq!(c.note_frequency_range(7, false), None);

        // Resolving dominant: tripled root, optional fifth
        assert_eq!(
            c.note_frequency_range(1, true),
            Some(FrequencyRange { min: 1, max: 3 })
        );
        assert_eq!(
            c.note_frequency_range(5, true),
            Some(FrequencyRange { min: 0, max: 2 })
        );
        assert_eq!(
            c.note_frequency_range(3, true),
            Some(FrequencyRange { min: 1, max: 2 })
        );

        let g7 = ChordFormula::triad(pc("G"), Triad::Major).with_seventh(Seventh::Minor);
        let ranges = g7.frequency_ranges(false);
        assert_eq!(ranges[&3], FrequencyRange { min: 1, max: 1 });
        assert_eq!(ranges[&5], FrequencyRange { min: 0, max: 2 });
    }

    #[test]
    fn test_dominant_resolution_detection() {
        let g7 = ChordFormula::triad(pc("G"), Triad::Major).with_seventh(Seventh::Minor);
        let c = ChordFormula::triad(pc("C"), Triad::Major);
        let cm = ChordFormula::triad(pc("C"), Triad::Minor);
        let a = ChordFormula::triad(pc("A"), Triad::Minor);
        let cmaj7 = c.clone().with_seventh(Seventh::Major);

        assert!(g7.resolves_as_dominant_to(&c));
        assert!(g7.resolves_as_dominant_to(&cm));
        assert!(!g7.resolves_as_dominant_to(&a));
        assert!(!g7.resolves_as_dominant_to(&cmaj7));
        assert!(!c.resolves_as_dominant_to(&c));
    }

    #[test]
    fn test_validate_essential_cap() {
        let c13 = ChordFormula::triad(pc("C"), Triad::Major)
            .with_extension(Extension::Thirteenth)
            .alter(9, 1)
            .unwrap()
            .named("C13-#9");
        assert_eq!(c13.essential_degrees().len(), 5);
        assert!(matches!(
            c13.validate(4),
            Err(HarmonyError::TooManyEssentialNotes {
                required: 5,
                voices: 4,
                ..
            })
        ));
        assert!(c13.validate(5).is_ok());
    }

    #[test]
    fn test_inversion_figures() {
        assert_eq!(Inversion::from_figure(""), Some(Inversion::Root));
        assert_eq!(Inversion::from_figure("64"), Some(Inversion::SixFour));
        assert_eq!(Inversion::from_figure("43"), Some(Inversion::FourThree));
        assert_eq!(Inversion::from_figure("99"), None);
        assert_eq!(Inversion::FourTwo.figure(), "42");
    }
}
