//! Terminal and JSON rendering of voice leadings

use colored::*;
use satb_core::solver::VoicePart;
use satb_core::{ChordFormula, SolverConfig, StepSolution, VoiceLeadingSequence, VoicedChord};
use serde::Serialize;
use std::fmt::Write;

const LABEL_WIDTH: usize = 9;
const COLUMN_WIDTH: usize = 9;

fn pitch_names(chord: &VoicedChord) -> Vec<String> {
    chord.pitches().iter().map(|p| p.to_string()).collect()
}

/// Pitch grid: top voice first, one column per chord
pub fn render_sequence(sequence: &VoiceLeadingSequence) -> String {
    let mut out = String::new();
    let voices = sequence.last().voice_count();

    let _ = write!(out, "{:LABEL_WIDTH$}", "");
    for chord in sequence.chords() {
        let symbol = format!("{:<COLUMN_WIDTH$}", chord.formula().to_string());
        let _ = write!(out, "{}", symbol.bright_cyan().bold());
    }
    out.push('\n');

    let parts = VoicePart::parts(voices).unwrap_or(&[]);
    for voice in (0..voices).rev() {
        let label = parts.get(voice).map(|part| part.name()).unwrap_or("Voice");
        let _ = write!(out, "{}", format!("{:<LABEL_WIDTH$}", label).dimmed());
        for chord in sequence.chords() {
            let name = chord
                .pitches()
                .get(voice)
                .map(|p| p.to_string())
                .unwrap_or_default();
            let _ = write!(out, "{:<COLUMN_WIDTH$}", name);
        }
        out.push('\n');
    }
    out
}

/// Every optimal sequence with its cost
pub fn render_solutions(solutions: &[VoiceLeadingSequence]) -> String {
    let mut out = String::new();
    let plural = if solutions.len() == 1 { "" } else { "s" };
    let _ = writeln!(
        out,
        "{}",
        format!("Found {} optimal voice leading{}", solutions.len(), plural).bright_green()
    );

    for (i, sequence) in solutions.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{} {}",
            format!("Solution {}", i + 1).bold(),
            format!("(cost {})", sequence.cost()).yellow()
        );
        out.push_str(&render_sequence(sequence));
    }
    out
}

/// Numbered choices for the next chord while stepping
pub fn render_options(next: &ChordFormula, step: &StepSolution) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {}",
        "Voicings for".green(),
        next.to_string().bright_cyan().bold(),
        format!("(step cost {})", step.cost).yellow()
    );
    for (i, voicing) in step.voicings.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {} {}",
            format!("[{}]", i + 1).bright_green(),
            pitch_names(voicing).join(" ")
        );
    }
    out
}

#[derive(Debug, Serialize)]
struct SolutionReport {
    cost: u32,
    voicings: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    chords: Vec<String>,
    config: &'a SolverConfig,
    solutions: Vec<SolutionReport>,
}

/// Machine-readable solutions. Pitches are listed lowest voice first.
pub fn render_json(
    chords: &[String],
    config: &SolverConfig,
    solutions: &[VoiceLeadingSequence],
) -> serde_json::Result<String> {
    let report = Report {
        chords: chords.to_vec(),
        config,
        solutions: solutions
            .iter()
            .map(|sequence| SolutionReport {
                cost: sequence.cost(),
                voicings: sequence.chords().iter().map(pitch_names).collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use satb_core::types::Triad;
    use satb_core::ProgressionSolver;
    use std::sync::Arc;

    fn c_to_g() -> Vec<VoiceLeadingSequence> {
        let c = Arc::new(ChordFormula::triad("C".parse().unwrap(), Triad::Major));
        let g = Arc::new(ChordFormula::triad("G".parse().unwrap(), Triad::Major));
        let start: Vec<_> = ["C4", "E4", "G4", "C5"]
            .iter()
            .map(|p| p.parse().unwrap())
            .collect();
        ProgressionSolver::default().solve(&[c, g], &start).unwrap()
    }

    #[test]
    fn test_render_sequence_grid() {
        colored::control::set_override(false);
        let grid = render_sequence(&c_to_g()[0]);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains('C') && lines[0].contains('G'));
        assert!(lines[1].starts_with("Soprano"));
        assert!(lines[1].contains("C5") && lines[1].contains("B4"));
        assert!(lines[4].starts_with("Bass"));
        assert!(lines[4].contains("C4") && lines[4].contains("G3"));
    }

    #[test]
    fn test_render_solutions_header() {
        colored::control::set_override(false);
        let text = render_solutions(&c_to_g());
        assert!(text.starts_with("Found 1 optimal voice leading\n"));
        assert!(text.contains("Solution 1 (cost 8)"));
    }

    #[test]
    fn test_render_options() {
        colored::control::set_override(false);
        let solutions = c_to_g();
        let last = solutions[0].last().clone();
        let step = StepSolution {
            cost: 8,
            voicings: vec![last.clone()],
        };
        let text = render_options(last.formula(), &step);
        assert!(text.contains("Voicings for G (step cost 8)"));
        assert!(text.contains("[1] G3 D4 G4 B4"));
    }

    #[test]
    fn test_render_json() {
        let config = SolverConfig::default();
        let json = render_json(&["C".to_string(), "G".to_string()], &config, &c_to_g()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["chords"][1], "G");
        assert_eq!(value["config"]["voice_count"], 4);
        assert_eq!(value["solutions"][0]["cost"], 8);
        assert_eq!(value["solutions"][0]["voicings"][1][0], "G3");
    }
}
