//! Batch simulation types: strategies, tallies and reports.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the player does after the host opens a decoy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Final pick is the first pick.
    Keep,
    /// Final pick is the first door still closed and unselected.
    Switch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Keep, Strategy::Switch];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Switch => write!(f, "switch"),
        }
    }
}

impl FromStr for Strategy {
    type Err = GameError;

    /// Accepts `keep`, `switch` and `change` in any case. Anything else is rejected
    /// rather than silently treated as keep.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "switch" | "change" => Ok(Self::Switch),
            _ => Err(GameError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Result of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

/// Win/lose counters accumulated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    pub wins: u64,
    pub losses: u64,
}

impl SimulationResult {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.wins + self.losses
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Summary of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub strategy: Strategy,
    pub trials: u64,
    pub wins: u64,
    pub losses: u64,
    /// `round(100 * wins / trials)`
    pub win_percent: u32,
    /// `round(100 * losses / trials)`
    pub lose_percent: u32,
}

impl SimulationReport {
    pub fn new(strategy: Strategy, trials: u64, result: SimulationResult) -> Self {
        Self {
            strategy,
            trials,
            wins: result.wins,
            losses: result.losses,
            win_percent: percent(result.wins, trials),
            lose_percent: percent(result.losses, trials),
        }
    }

    /// Unrounded win rate in `0.0..=1.0`.
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.wins as f64 / self.trials as f64
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} trials, {} wins ({}%), {} losses ({}%)",
            self.strategy, self.trials, self.wins, self.win_percent, self.losses, self.lose_percent
        )
    }
}

/// Share of `trials` as a whole percentage, rounded half up.
pub fn percent(count: u64, trials: u64) -> u32 {
    if trials == 0 {
        return 0;
    }
    ((count as f64 / trials as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_known_names() {
        assert_eq!("keep".parse::<Strategy>(), Ok(Strategy::Keep));
        assert_eq!("SWITCH".parse::<Strategy>(), Ok(Strategy::Switch));
        assert_eq!("change".parse::<Strategy>(), Ok(Strategy::Switch));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert_eq!(
            "maybe".parse::<Strategy>(),
            Err(GameError::UnknownStrategy("maybe".to_string()))
        );
    }

    #[test]
    fn strategy_display_round_trips_through_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn result_records_outcomes() {
        let mut result = SimulationResult::default();
        result.record(Outcome::Win);
        result.record(Outcome::Lose);
        result.record(Outcome::Lose);

        assert_eq!(result.wins, 1);
        assert_eq!(result.losses, 2);
        assert_eq!(result.total(), 3);

        result.reset();
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(0, 10), 0);
        assert_eq!(percent(10, 10), 100);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn report_computes_percentages() {
        let report = SimulationReport::new(
            Strategy::Switch,
            1000,
            SimulationResult {
                wins: 667,
                losses: 333,
            },
        );

        assert_eq!(report.win_percent, 67);
        assert_eq!(report.lose_percent, 33);
        assert!((report.win_rate() - 0.667).abs() < 1e-9);
        assert_eq!(
            report.to_string(),
            "switch: 1000 trials, 667 wins (67%), 333 losses (33%)"
        );
    }

    #[test]
    fn report_serializes_strategy_lowercase() {
        let report = SimulationReport::new(Strategy::Keep, 1, SimulationResult { wins: 1, losses: 0 });
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["strategy"], "keep");
        assert_eq!(json["win_percent"], 100);
    }
}
