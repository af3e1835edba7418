use crate::error::{HarmonyError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Natural note letter, in scale order starting from C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Semitone value of the natural note (C = 0)
    pub fn semitone(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// The letter `steps` scale steps above this one (wraps around the octave)
    pub fn step(self, steps: i32) -> Letter {
        let index = (self as i32 + steps).rem_euclid(7);
        Self::ALL[index as usize]
    }

    fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    pub fn offset(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn from_offset(offset: i32) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Accidental> {
        match symbol {
            "bb" => Some(Accidental::DoubleFlat),
            "b" => Some(Accidental::Flat),
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "x" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

/// A spelled pitch class: letter plus accidental, without octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchClass {
    letter: Letter,
    accidental: Accidental,
}

impl PitchClass {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        PitchClass { letter, accidental }
    }

    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Chromatic value 0-11 (C = 0)
    pub fn semitone(&self) -> u8 {
        (self.letter.semitone() as i8 + self.accidental.offset()).rem_euclid(12) as u8
    }

    /// Default spelling for a bare semitone value, preferring sharps
    pub fn from_semitone(semitone: u8) -> Self {
        let (letter, accidental) = match semitone % 12 {
            0 => (Letter::C, Accidental::Natural),
            1 => (Letter::C, Accidental::Sharp),
            2 => (Letter::D, Accidental::Natural),
            3 => (Letter::D, Accidental::Sharp),
            4 => (Letter::E, Accidental::Natural),
            5 => (Letter::F, Accidental::Natural),
            6 => (Letter::F, Accidental::Sharp),
            7 => (Letter::G, Accidental::Natural),
            8 => (Letter::G, Accidental::Sharp),
            9 => (Letter::A, Accidental::Natural),
            10 => (Letter::A, Accidental::Sharp),
            _ => (Letter::B, Accidental::Natural),
        };
        PitchClass::new(letter, accidental)
    }

    /// Spell the note sitting `interval` semitones above `root` as scale
    /// degree `degree` of that root.
    ///
    /// The letter is always `degree - 1` steps above the root's letter, so a
    /// minor third above C is Eb rather than D#. Differences that would need
    /// more than a double accidental fall back to [`PitchClass::from_semitone`].
    pub fn spelled_degree(root: PitchClass, degree: u8, interval: i8) -> PitchClass {
        let letter = root.letter.step(degree as i32 - 1);
        let target = (root.semitone() as i32 + interval as i32).rem_euclid(12);
        let mut change = (target - letter.semitone() as i32).rem_euclid(12);
        if change >= 6 {
            change -= 12;
        }
        match Accidental::from_offset(change) {
            Some(accidental) => PitchClass::new(letter, accidental),
            None => PitchClass::from_semitone(target as u8),
        }
    }

    pub fn name(&self) -> String {
        format!("{}{}", self.letter, self.accidental.symbol())
    }

    pub fn at_octave(self, octave: i8) -> Pitch {
        Pitch::new(self, octave)
    }
}

impl FromStr for PitchClass {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| HarmonyError::InvalidPitchName(s.to_string()))?;
        let accidental = Accidental::from_symbol(chars.as_str())
            .ok_or_else(|| HarmonyError::InvalidPitchName(s.to_string()))?;
        Ok(PitchClass { letter, accidental })
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental.symbol())
    }
}

/// A pitch class placed in an octave (scientific pitch notation, C4 = middle C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pitch {
    class: PitchClass,
    octave: i8,
}

impl Pitch {
    pub fn new(class: PitchClass, octave: i8) -> Self {
        Pitch { class, octave }
    }

    /// Place `class` at the given absolute position.
    ///
    /// `abs` must be congruent to the class's semitone value mod 12.
    pub fn from_abs(class: PitchClass, abs: i32) -> Self {
        let octave = (abs - class.semitone() as i32).div_euclid(12);
        Pitch {
            class,
            octave: octave as i8,
        }
    }

    pub fn class(&self) -> PitchClass {
        self.class
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    pub fn semitone(&self) -> u8 {
        self.class.semitone()
    }

    /// Absolute position: octave * 12 + semitone
    pub fn abs(&self) -> i32 {
        self.octave as i32 * 12 + self.class.semitone() as i32
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.abs()
            .cmp(&other.abs())
            .then_with(|| self.class.cmp(&other.class))
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Pitch {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        // The octave starts at the first digit or minus sign
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| HarmonyError::InvalidPitchName(s.to_string()))?;
        let (class_part, octave_part) = s.split_at(split);

        let class: PitchClass = class_part
            .parse()
            .map_err(|_| HarmonyError::InvalidPitchName(s.to_string()))?;
        let octave = octave_part
            .parse::<i8>()
            .map_err(|_| HarmonyError::InvalidPitchName(s.to_string()))?;

        Ok(Pitch { class, octave })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

// Transposition keeps the spelling's letter only when the result stays on it;
// otherwise the default sharp spelling is used.
impl Add<i32> for Pitch {
    type Output = Pitch;

    fn add(self, semitones: i32) -> Self::Output {
        let abs = self.abs() + semitones;
        let class = if semitones.rem_euclid(12) == 0 {
            self.class
        } else {
            PitchClass::from_semitone(abs.rem_euclid(12) as u8)
        };
        Pitch::from_abs(class, abs)
    }
}

impl Sub<i32> for Pitch {
    type Output = Pitch;

    fn sub(self, semitones: i32) -> Self::Output {
        self + (-semitones)
    }
}

// Signed distance in semitones
impl Sub<Pitch> for Pitch {
    type Output = i32;

    fn sub(self, other: Pitch) -> Self::Output {
        self.abs() - other.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_parsing() {
        let c: PitchClass = "C".parse().unwrap();
        assert_eq!(c.semitone(), 0);

        let fs: PitchClass = "F#".parse().unwrap();
        assert_eq!(fs.semitone(), 6);

        let bb: PitchClass = "Bb".parse().unwrap();
        assert_eq!(bb.semitone(), 10);

        let ebb: PitchClass = "Ebb".parse().unwrap();
        assert_eq!(ebb.semitone(), 2);

        let gx: PitchClass = "Gx".parse().unwrap();
        assert_eq!(gx.semitone(), 9);

        // Wrapping below C and above B
        let cb: PitchClass = "Cb".parse().unwrap();
        assert_eq!(cb.semitone(), 11);
        let bs: PitchClass = "B#".parse().unwrap();
        assert_eq!(bs.semitone(), 0);
    }

    #[test]
    fn test_invalid_pitch_class() {
        for bad in ["H", "", "C##", "Cbbb", "Fz", "#", "c", "bb"] {
            let result: Result<PitchClass> = bad.parse();
            assert!(
                matches!(result, Err(HarmonyError::InvalidPitchName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_enharmonic_names_share_semitone() {
        let groups = [
            vec!["C", "B#", "Dbb"],
            vec!["C#", "Db", "Bx"],
            vec!["E", "Fb", "Dx"],
            vec!["G#", "Ab"],
            vec!["A", "Gx", "Bbb"],
        ];
        for group in groups {
            let semitones: Vec<u8> = group
                .iter()
                .map(|name| name.parse::<PitchClass>().unwrap().semitone())
                .collect();
            assert!(semitones.windows(2).all(|w| w[0] == w[1]), "{group:?}");

            // Name -> semitone -> default name keeps the value
            let default = PitchClass::from_semitone(semitones[0]);
            assert_eq!(default.semitone(), semitones[0]);
        }
    }

    #[test]
    fn test_pitch_parsing_and_abs() {
        let c4: Pitch = "C4".parse().unwrap();
        assert_eq!(c4.abs(), 48);
        assert_eq!(c4.octave(), 4);

        let bb3: Pitch = "Bb3".parse().unwrap();
        assert_eq!(bb3.abs(), 46);

        let g_neg1: Pitch = "G-1".parse().unwrap();
        assert_eq!(g_neg1.octave(), -1);
        assert_eq!(g_neg1.abs(), -5);

        assert!("C".parse::<Pitch>().is_err());
        assert!("X4".parse::<Pitch>().is_err());
        assert!("C4x".parse::<Pitch>().is_err());
        assert!("c4".parse::<Pitch>().is_err());
        assert!("bb4".parse::<Pitch>().is_err());
    }

    #[test]
    fn test_pitch_display() {
        let p: Pitch = "F#5".parse().unwrap();
        assert_eq!(p.to_string(), "F#5");

        let p: Pitch = "Ebb2".parse().unwrap();
        assert_eq!(p.to_string(), "Ebb2");
    }

    #[test]
    fn test_from_abs_round_trip() {
        let fs: PitchClass = "F#".parse().unwrap();
        let p = Pitch::from_abs(fs, 54);
        assert_eq!(p.octave(), 4);
        assert_eq!(p.abs(), 54);

        let b: PitchClass = "B".parse().unwrap();
        let p = Pitch::from_abs(b, 47);
        assert_eq!(p.octave(), 3);
    }

    #[test]
    fn test_distance_and_transposition() {
        let c4: Pitch = "C4".parse().unwrap();
        let g3: Pitch = "G3".parse().unwrap();
        assert_eq!(g3 - c4, -5);
        assert_eq!(c4 - g3, 5);

        let c5 = c4 + 12;
        assert_eq!(c5.to_string(), "C5");

        let b3 = c4 - 1;
        assert_eq!(b3.abs(), 47);
        assert_eq!(b3.class().semitone(), 11);
    }

    #[test]
    fn test_ordering_follows_abs() {
        let mut pitches: Vec<Pitch> = ["G4", "C4", "E4", "C5", "B3"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        pitches.sort();
        let names: Vec<String> = pitches.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["B3", "C4", "E4", "G4", "C5"]);
    }

    #[test]
    fn test_degree_spelling() {
        let c: PitchClass = "C".parse().unwrap();
        assert_eq!(PitchClass::spelled_degree(c, 3, 3).to_string(), "Eb");
        assert_eq!(PitchClass::spelled_degree(c, 3, 4).to_string(), "E");
        assert_eq!(PitchClass::spelled_degree(c, 5, 6).to_string(), "Gb");
        assert_eq!(PitchClass::spelled_degree(c, 9, 14).to_string(), "D");
        assert_eq!(PitchClass::spelled_degree(c, 11, 18).to_string(), "F#");

        let g: PitchClass = "G".parse().unwrap();
        assert_eq!(PitchClass::spelled_degree(g, 3, 4).to_string(), "B");
        assert_eq!(PitchClass::spelled_degree(g, 7, 10).to_string(), "F");

        let fs: PitchClass = "F#".parse().unwrap();
        assert_eq!(PitchClass::spelled_degree(fs, 3, 4).to_string(), "A#");

        let db: PitchClass = "Db".parse().unwrap();
        assert_eq!(PitchClass::spelled_degree(db, 7, 10).to_string(), "Cb");
        assert_eq!(PitchClass::spelled_degree(db, 7, 9).to_string(), "Cbb");
    }
}
