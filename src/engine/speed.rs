//! Playback speed multipliers

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::TraceError;

/// Supported playback rates relative to the base interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum SpeedMultiplier {
    /// 0.5x, twice the base delay
    Half,
    /// 1x
    #[default]
    One,
    /// 2x
    Two,
    /// 4x
    Four,
}

impl SpeedMultiplier {
    /// Every supported multiplier, slowest first
    pub const ALL: [SpeedMultiplier; 4] = [
        SpeedMultiplier::Half,
        SpeedMultiplier::One,
        SpeedMultiplier::Two,
        SpeedMultiplier::Four,
    ];

    /// Numeric factor
    pub fn factor(self) -> f64 {
        match self {
            SpeedMultiplier::Half => 0.5,
            SpeedMultiplier::One => 1.0,
            SpeedMultiplier::Two => 2.0,
            SpeedMultiplier::Four => 4.0,
        }
    }

    /// Delay between advances: `base / factor`, computed exactly
    pub fn interval(self, base: Duration) -> Duration {
        match self {
            SpeedMultiplier::Half => base * 2,
            SpeedMultiplier::One => base,
            SpeedMultiplier::Two => base / 2,
            SpeedMultiplier::Four => base / 4,
        }
    }
}

impl TryFrom<f64> for SpeedMultiplier {
    type Error = TraceError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|m| m.factor() == factor)
            .ok_or(TraceError::UnsupportedSpeed(factor))
    }
}

impl FromStr for SpeedMultiplier {
    type Err = TraceError;

    /// Accepts `0.5`, `1`, `2`, `4`, optionally suffixed with `x`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix(['x', 'X']).unwrap_or(trimmed);
        let factor: f64 = number.parse().map_err(|_| {
            TraceError::InvalidConfiguration(format!("speed '{}' is not a number", s))
        })?;
        Self::try_from(factor)
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_base_over_factor() {
        let base = Duration::from_millis(400);
        assert_eq!(SpeedMultiplier::Half.interval(base), Duration::from_millis(800));
        assert_eq!(SpeedMultiplier::One.interval(base), base);
        assert_eq!(SpeedMultiplier::Two.interval(base), Duration::from_millis(200));
        assert_eq!(SpeedMultiplier::Four.interval(base), Duration::from_millis(100));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2".parse::<SpeedMultiplier>().unwrap(), SpeedMultiplier::Two);
        assert_eq!("0.5x".parse::<SpeedMultiplier>().unwrap(), SpeedMultiplier::Half);
        assert!(matches!(
            "3".parse::<SpeedMultiplier>(),
            Err(TraceError::UnsupportedSpeed(f)) if f == 3.0
        ));
        assert!(matches!(
            "fast".parse::<SpeedMultiplier>(),
            Err(TraceError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(SpeedMultiplier::Half.to_string(), "0.5x");
        assert_eq!(SpeedMultiplier::Four.to_string(), "4x");
    }
}
