//! Speed selection - generations per second mapped to a tick interval.

use std::time::Duration;

/// Custom speed entries are bounded to this range.
pub const CUSTOM_SPEED_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// Preset speed tiers plus direct numeric entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    /// 2 generations per second.
    Low,
    /// 4 generations per second.
    Medium,
    /// 8 generations per second.
    High,
    /// 16 generations per second.
    Extreme,
    /// Direct entry, clamped to [1, 1000].
    Custom(u32),
}

impl Speed {
    /// Requested rate in generations per second.
    pub fn generations_per_second(self) -> u32 {
        match self {
            Speed::Low => 2,
            Speed::Medium => 4,
            Speed::High => 8,
            Speed::Extreme => 16,
            Speed::Custom(g) => g.clamp(*CUSTOM_SPEED_RANGE.start(), *CUSTOM_SPEED_RANGE.end()),
        }
    }

    /// Tick interval: 1000/g milliseconds, integer division.
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.generations_per_second()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_rates() {
        assert_eq!(Speed::Low.generations_per_second(), 2);
        assert_eq!(Speed::Medium.generations_per_second(), 4);
        assert_eq!(Speed::High.generations_per_second(), 8);
        assert_eq!(Speed::Extreme.generations_per_second(), 16);
    }

    #[test]
    fn test_interval_mapping() {
        assert_eq!(Speed::Medium.tick_interval(), Duration::from_millis(250));
        assert_eq!(Speed::Low.tick_interval(), Duration::from_millis(500));
        assert_eq!(Speed::Extreme.tick_interval(), Duration::from_millis(62));
        assert_eq!(
            Speed::Custom(3).tick_interval(),
            Duration::from_millis(333)
        );
    }

    #[test]
    fn test_custom_is_clamped() {
        assert_eq!(Speed::Custom(0).generations_per_second(), 1);
        assert_eq!(Speed::Custom(5000).generations_per_second(), 1000);
        assert_eq!(Speed::Custom(42).generations_per_second(), 42);
    }
}
