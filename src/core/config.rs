//! Game configuration.
//!
//! The source material disagrees with itself about progression tuning
//! (reward cadence, round length, where the round counter restarts), so all
//! of it lives here as named, testable values instead of hard-coded folklore.
//!
//! Games configure the core at startup:
//! - `reward_interval`: a reward unlocks every N answered prompts
//! - `round_length`: how many answers the round indicator counts up to
//! - `progress_baseline`: where the round indicator restarts after a reward
//! - `rewards`: the cyclic reward suggestion list

/// Built-in reward suggestions, granted cyclically at progress milestones.
pub const DEFAULT_REWARDS: [&str; 10] = [
    "Preparale el desayuno en la cama",
    "Dale un masaje de 15 minutos",
    "Escribile una carta de amor",
    "Planea una cita sorpresa",
    "Cocinen juntos su comida favorita",
    "Organiza una noche de películas",
    "Comprale flores sin motivo",
    "Dedícale su canción favorita",
    "Hagan un picnic en casa",
    "Regálale un día libre de responsabilidades",
];

/// Default reward cadence: every 10 answered prompts.
pub const DEFAULT_REWARD_INTERVAL: u32 = 10;

/// Default round length for the "N/5" progress indicator.
pub const DEFAULT_ROUND_LENGTH: u32 = 5;

/// Default baseline the round indicator restarts from.
pub const DEFAULT_PROGRESS_BASELINE: u32 = 1;

/// Complete game configuration.
///
/// Construct with `GameConfig::default()` and override with the `with_*`
/// builder methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// A reward is granted every `reward_interval` answered prompts.
    pub reward_interval: u32,

    /// Length of one round as shown by the progress indicator.
    pub round_length: u32,

    /// Value the round indicator restarts from after a reward.
    pub progress_baseline: u32,

    /// Reward suggestion texts, cycled via the reward cursor.
    pub rewards: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reward_interval: DEFAULT_REWARD_INTERVAL,
            round_length: DEFAULT_ROUND_LENGTH,
            progress_baseline: DEFAULT_PROGRESS_BASELINE,
            rewards: DEFAULT_REWARDS.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reward interval.
    #[must_use]
    pub fn with_reward_interval(mut self, interval: u32) -> Self {
        assert!(interval > 0, "Reward interval must be at least 1");
        self.reward_interval = interval;
        self
    }

    /// Set the round length.
    #[must_use]
    pub fn with_round_length(mut self, length: u32) -> Self {
        assert!(length > 0, "Round length must be at least 1");
        self.round_length = length;
        self
    }

    /// Set the progress baseline.
    #[must_use]
    pub fn with_progress_baseline(mut self, baseline: u32) -> Self {
        assert!(
            baseline <= self.round_length,
            "Progress baseline cannot exceed the round length"
        );
        self.progress_baseline = baseline;
        self
    }

    /// Replace the reward list.
    #[must_use]
    pub fn with_rewards(mut self, rewards: Vec<String>) -> Self {
        assert!(!rewards.is_empty(), "Reward list cannot be empty");
        self.rewards = rewards;
        self
    }

    /// Look up the reward text for a cursor value.
    ///
    /// The cursor grows without bound; the modulo is applied here, at lookup.
    #[must_use]
    pub fn reward_at(&self, cursor: u32) -> &str {
        &self.rewards[cursor as usize % self.rewards.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.reward_interval, 10);
        assert_eq!(config.round_length, 5);
        assert_eq!(config.progress_baseline, 1);
        assert_eq!(config.rewards.len(), 10);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_reward_interval(3)
            .with_round_length(7)
            .with_progress_baseline(0)
            .with_rewards(vec!["a".to_string(), "b".to_string()]);

        assert_eq!(config.reward_interval, 3);
        assert_eq!(config.round_length, 7);
        assert_eq!(config.progress_baseline, 0);
        assert_eq!(config.rewards, vec!["a", "b"]);
    }

    #[test]
    fn test_reward_at_wraps() {
        let config = GameConfig::new().with_rewards(vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ]);

        assert_eq!(config.reward_at(0), "first");
        assert_eq!(config.reward_at(2), "third");
        assert_eq!(config.reward_at(3), "first");
        assert_eq!(config.reward_at(7), "second");
    }

    #[test]
    #[should_panic(expected = "Reward interval must be at least 1")]
    fn test_zero_interval_panics() {
        let _ = GameConfig::new().with_reward_interval(0);
    }

    #[test]
    #[should_panic(expected = "Reward list cannot be empty")]
    fn test_empty_rewards_panic() {
        let _ = GameConfig::new().with_rewards(Vec::new());
    }
}
