//! Solver configuration
//!
//! Pure data with defaults matching classical four-part writing. Front ends
//! override fields through the builder methods.

use crate::error::{HarmonyError, Result};

/// Settings shared by every search step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Number of voices, 4 to 6
    pub voice_count: usize,
    /// Move the bass only to the next chord's inversion bass, in whichever
    /// octave the upper voices need
    pub include_inversions: bool,
    /// Beam sequences costing more than the cheapest one plus this slack are
    /// dropped. The default is wide enough that no sequence is ever pruned.
    pub cost_slack: u32,
}

impl SolverConfig {
    pub const MIN_VOICES: usize = 4;
    pub const MAX_VOICES: usize = 6;
    pub const DEFAULT_COST_SLACK: u32 = 100_000;

    pub fn new(voice_count: usize) -> Self {
        Self {
            voice_count,
            ..Self::default()
        }
    }

    pub fn with_inversions(mut self, include_inversions: bool) -> Self {
        self.include_inversions = include_inversions;
        self
    }

    pub fn with_cost_slack(mut self, cost_slack: u32) -> Self {
        self.cost_slack = cost_slack;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_VOICES..=Self::MAX_VOICES).contains(&self.voice_count) {
            return Err(HarmonyError::InvalidVoiceCount(self.voice_count));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            voice_count: 4,
            include_inversions: true,
            cost_slack: Self::DEFAULT_COST_SLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.voice_count, 4);
        assert!(config.include_inversions);
        assert_eq!(config.cost_slack, SolverConfig::DEFAULT_COST_SLACK);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_voice_count_bounds() {
        assert!(SolverConfig::new(6).validate().is_ok());
        assert_eq!(
            SolverConfig::new(3).validate(),
            Err(HarmonyError::InvalidVoiceCount(3))
        );
        assert_eq!(
            SolverConfig::new(7).validate(),
            Err(HarmonyError::InvalidVoiceCount(7))
        );
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::new(5)
            .with_inversions(false)
            .with_cost_slack(4);
        assert_eq!(config.voice_count, 5);
        assert!(!config.include_inversions);
        assert_eq!(config.cost_slack, 4);
    }
}
