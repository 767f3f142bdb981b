//! Print Time Estimation
//!
//! Simulates the toolhead over every `G0`/`G1` line at constant speed: the
//! time of a move is its XYZ length divided by the feed rate in effect.
//! There is no acceleration, jerk or cornering model.

pub mod motion;

use anyhow::{ensure, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use motion::{MotionState, Move, Position};

/// Feed rate assumed until the first `F` word, in mm/min.
pub const DEFAULT_FEED_RATE: f64 = 1200.0;

/// What an `F` word that is zero or negative does to the current feed rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroFeedPolicy {
    /// Ignore the word; the previous positive feed rate stays in effect.
    #[default]
    KeepPrevious,
    /// Apply the word; moves at a non-positive feed rate take no time.
    SkipMove,
}

impl ZeroFeedPolicy {
    pub fn next_feed_rate(self, current: f64, requested: f64) -> f64 {
        if requested > 0.0 {
            return requested;
        }

        match self {
            Self::KeepPrevious => {
                log::warn!(
                    "Ignoring non-positive feed rate F{}, keeping F{}",
                    requested,
                    current
                );
                current
            }
            Self::SkipMove => requested,
        }
    }
}

/// Estimator settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatorConfig {
    /// Feed rate before the first `F` word, in mm/min
    pub default_feed_rate: f64,
    pub zero_feed_policy: ZeroFeedPolicy,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_feed_rate: DEFAULT_FEED_RATE,
            zero_feed_policy: ZeroFeedPolicy::default(),
        }
    }
}

impl EstimatorConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.default_feed_rate.is_finite() && self.default_feed_rate > 0.0,
            "default feed rate must be a positive number of mm/min, got {}",
            self.default_feed_rate
        );
        Ok(())
    }

    /// The configured starting feed rate, or [`DEFAULT_FEED_RATE`] if the
    /// configured one is unusable.
    fn starting_feed_rate(&self) -> f64 {
        if self.validate().is_ok() {
            self.default_feed_rate
        } else {
            log::warn!(
                "Invalid default feed rate {}, using {}",
                self.default_feed_rate,
                DEFAULT_FEED_RATE
            );
            DEFAULT_FEED_RATE
        }
    }
}

/// Outcome of a motion simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    /// Unrounded elapsed time in seconds
    pub seconds: f64,
    /// Total XYZ travel in millimetres
    pub distance_mm: f64,
    /// Number of `G0`/`G1` lines executed
    pub moves: usize,
    pub final_position: Position,
    /// Feed rate in effect after the last move, in mm/min
    pub final_feed_rate: f64,
}

impl Simulation {
    /// Elapsed time rounded to the nearest whole second.
    pub fn rounded_seconds(&self) -> u64 {
        self.seconds.round() as u64
    }
}

impl From<MotionState> for Simulation {
    fn from(state: MotionState) -> Self {
        Self {
            seconds: state.elapsed,
            distance_mm: state.distance,
            moves: state.moves,
            final_position: state.position,
            final_feed_rate: state.feed_rate,
        }
    }
}

/// Run every linear move in `text` through the motion model.
pub fn simulate(text: &str, config: &EstimatorConfig) -> Simulation {
    let policy = config.zero_feed_policy;
    let state = text
        .lines()
        .filter_map(Move::parse)
        .fold(MotionState::new(config.starting_feed_rate()), |state, mv| {
            state.step(&mv, policy)
        });

    log::debug!(
        "simulated {} moves over {:.3} mm in {:.3} s",
        state.moves,
        state.distance,
        state.elapsed
    );

    state.into()
}

/// Simulated print time of `text` in whole seconds.
pub fn estimate_seconds(text: &str, config: &EstimatorConfig) -> u64 {
    simulate(text, config).rounded_seconds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_move() {
        let seconds = estimate_seconds("G1 X10 Y0 Z0 F600", &EstimatorConfig::default());
        assert_eq!(seconds, 1);
    }

    #[test]
    fn test_feed_rate_persists() {
        let simulation = simulate("G1 X10 F1200\nG1 X10 Y10\n", &EstimatorConfig::default());

        assert!((simulation.seconds - 1.0).abs() < 1e-9);
        assert_eq!(simulation.final_feed_rate, 1200.0);
        assert_eq!(simulation.rounded_seconds(), 1);
    }

    #[test]
    fn test_default_feed_rate_applies_before_first_f_word() {
        // 20 mm at 1200 mm/min
        let simulation = simulate("G0 X20\n", &EstimatorConfig::default());
        assert!((simulation.seconds - 1.0).abs() < 1e-9);

        let config = EstimatorConfig {
            default_feed_rate: 600.0,
            ..EstimatorConfig::default()
        };
        assert_eq!(estimate_seconds("G0 X20\n", &config), 2);
    }

    #[test]
    fn test_non_move_lines_are_ignored() {
        let text = "G28 X100\nM104 S200\n; G1 X500\nG92 X0\n\nG4 P1000\n";
        let simulation = simulate(text, &EstimatorConfig::default());

        assert_eq!(simulation.moves, 0);
        assert_eq!(simulation.seconds, 0.0);
        assert_eq!(simulation.final_position, Position::ORIGIN);
    }

    #[test]
    fn test_zero_feed_keep_previous() {
        // 10 mm at 600, then 30 mm still at 600
        let text = "G1 X10 F600\nG1 X40 F0\n";
        let simulation = simulate(text, &EstimatorConfig::default());

        assert!((simulation.seconds - 4.0).abs() < 1e-9);
        assert_eq!(simulation.final_feed_rate, 600.0);
    }

    #[test]
    fn test_zero_feed_skip_move() {
        let config = EstimatorConfig {
            zero_feed_policy: ZeroFeedPolicy::SkipMove,
            ..EstimatorConfig::default()
        };
        let text = "G1 X10 F600\nG1 X40 F0\nG1 X40 Y10\nG1 X50 F600\n";
        let simulation = simulate(text, &config);

        // Only the first and last moves take time.
        assert!((simulation.seconds - 2.0).abs() < 1e-9);
        assert!((simulation.distance_mm - 60.0).abs() < 1e-9);
        assert_eq!(simulation.final_position.x, 50.0);
    }

    #[test]
    fn test_invalid_default_feed_rate_falls_back() {
        let config = EstimatorConfig {
            default_feed_rate: 0.0,
            ..EstimatorConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(estimate_seconds("G0 X20\n", &config), 1);
    }

    #[test]
    fn test_rounding_to_nearest_second() {
        // 30 mm at 1000 mm/min = 1.8 s
        assert_eq!(estimate_seconds("G1 X30 F1000\n", &EstimatorConfig::default()), 2);
        // 20 mm at 1000 mm/min = 1.2 s
        assert_eq!(estimate_seconds("G1 X20 F1000\n", &EstimatorConfig::default()), 1);
    }

    #[test]
    fn test_zero_feed_policy_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: ZeroFeedPolicy,
        }

        let parsed: Wrapper = toml::from_str("policy = \"skip-move\"").expect("parse policy");
        assert_eq!(parsed.policy, ZeroFeedPolicy::SkipMove);

        let parsed: Wrapper =
            toml::from_str("policy = \"keep-previous\"").expect("parse policy");
        assert_eq!(parsed.policy, ZeroFeedPolicy::KeepPrevious);
    }
}
