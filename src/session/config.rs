//! Session pacing parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session pacing parameters.
///
/// The engine never sleeps. These are the waits the host should honor
/// before calling `Session::advance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pause between the player's move and the opponent's reply.
    pub opponent_delay: Duration,

    /// Pause between a losing outcome and the strike signal.
    pub reset_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            opponent_delay: Duration::from_millis(1250),
            reset_delay: Duration::from_millis(1500),
        }
    }
}

impl SessionConfig {
    /// Config with no pacing, for tests and headless solving.
    pub fn immediate() -> Self {
        Self {
            opponent_delay: Duration::ZERO,
            reset_delay: Duration::ZERO,
        }
    }

    /// Create a new config with a custom opponent delay.
    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    /// Create a new config with a custom reset delay.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.opponent_delay, Duration::from_millis(1250));
        assert_eq!(config.reset_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::immediate().with_reset_delay(Duration::from_secs(2));
        assert_eq!(config.opponent_delay, Duration::ZERO);
        assert_eq!(config.reset_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
