// config.rs - Simulation and driver settings

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AutomatonError, Result};
use crate::grid::{GRID_HEIGHT, GRID_WIDTH};
use crate::wolfram::Mode;

pub const DEFAULT_RULE: u64 = 30;
pub const RESEED_PERIOD: u64 = 10;

/// Which row the periodic reseed advances from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReseedPolicy {
    /// Apply the rule again to the freshly seeded top row, so a reseed tick
    /// advances the Wolfram row by two generations.
    #[default]
    Advance,
    /// Re-apply the rule to the top row as it was before the shift, so a
    /// reseed tick writes the same row an ordinary tick would.
    Repeat,
}

impl fmt::Display for ReseedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReseedPolicy::Advance => "advance",
            ReseedPolicy::Repeat => "repeat",
        })
    }
}

impl FromStr for ReseedPolicy {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "advance" => Ok(ReseedPolicy::Advance),
            "repeat" => Ok(ReseedPolicy::Repeat),
            _ => Err(AutomatonError::Parse { kind: "reseed policy", value: s.to_owned() }),
        }
    }
}

/// Everything the simulation needs to build and run a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub mode: Mode,
    pub rule: u64,
    /// Generations between reseeds; 0 disables reseeding.
    pub reseed_period: u64,
    pub reseed_policy: ReseedPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            mode: Mode::Elementary,
            rule: DEFAULT_RULE,
            reseed_period: RESEED_PERIOD,
            reseed_policy: ReseedPolicy::Advance,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AutomatonError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Step cadence presets. The delay is applied by the driver, never the core.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
    /// No delay between steps.
    Max,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Slow, Speed::Medium, Speed::Fast, Speed::Max];

    pub fn delay(self) -> Duration {
        match self {
            Speed::Slow   => Duration::from_millis(500),
            Speed::Medium => Duration::from_millis(250),
            Speed::Fast   => Duration::from_millis(100),
            Speed::Max    => Duration::ZERO,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Speed::Slow   => "SLOW",
            Speed::Medium => "MEDIUM",
            Speed::Fast   => "FAST",
            Speed::Max    => "MAX",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Speed {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self> {
        Speed::ALL
            .into_iter()
            .find(|speed| speed.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AutomatonError::Parse { kind: "speed", value: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_board() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (200, 120));
        assert_eq!(config.rule, 30);
        assert_eq!(config.reseed_period, 10);
        assert_eq!(config.reseed_policy, ReseedPolicy::Advance);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "mode": "totalistic", "reseed_policy": "repeat" }"#).unwrap();
        assert_eq!(
            config,
            SimConfig {
                mode: Mode::Totalistic,
                reseed_policy: ReseedPolicy::Repeat,
                ..SimConfig::default()
            }
        );
    }

    #[test]
    fn documents_use_lowercase_names() {
        let text = serde_json::to_string(&SimConfig::default()).unwrap();
        assert!(text.contains(r#""mode":"elementary""#), "{text}");
        assert!(text.contains(r#""reseed_policy":"advance""#), "{text}");
        assert_eq!(serde_json::from_str::<SimConfig>(&text).unwrap(), SimConfig::default());
        assert!(serde_json::from_str::<SimConfig>(r#"{ "mode": "Hexagonal" }"#).is_err());
    }

    #[test]
    fn zero_sized_boards_fail_validation() {
        let config = SimConfig { height: 0, ..SimConfig::default() };
        assert_eq!(
            config.validate(),
            Err(AutomatonError::InvalidDimensions { width: 200, height: 0 })
        );
    }

    #[test]
    fn speed_presets_map_to_delays() {
        let delays: Vec<u128> = Speed::ALL.iter().map(|s| s.delay().as_millis()).collect();
        assert_eq!(delays, [500, 250, 100, 0]);
        assert_eq!("fast".parse::<Speed>(), Ok(Speed::Fast));
        assert_eq!("MAX".parse::<Speed>(), Ok(Speed::Max));
        assert!("ludicrous".parse::<Speed>().is_err());
    }

    #[test]
    fn reseed_policies_parse() {
        assert_eq!("Repeat".parse::<ReseedPolicy>(), Ok(ReseedPolicy::Repeat));
        assert_eq!(ReseedPolicy::Advance.to_string().parse(), Ok(ReseedPolicy::Advance));
        assert!("never".parse::<ReseedPolicy>().is_err());
    }
}
