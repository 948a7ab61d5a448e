use serde::{Deserialize, Serialize};

/// Tuning constants for the simulation. Per-level upgrade effects live in
/// the upgrade catalog; this holds the base values they modify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub base_rate_per_min: f64,
    pub claim_cooldown_base_ms: u64,
    pub claim_cooldown_floor_ms: u64,
    /// Claim payout multiplier while a storm is active.
    pub storm_claim_bonus: f64,
    /// How long a finished ad view keeps the claim unlocked.
    pub ad_window_ms: u64,
    pub daily_limit_base_min: u32,
    pub storm_multiplier_base: f64,
    pub storm_duration_base_ms: u64,
    pub storm_window_min_ms: u64,
    pub storm_window_max_ms: u64,
    /// Upgrades never pull the window start below this.
    pub storm_window_floor_ms: u64,
    /// The window end stays at least this far above its start.
    pub storm_window_span_min_ms: u64,
    /// Scales the luck upgrade's chance into a per-tick probability.
    pub luck_nudge_scale: f64,
    pub daily_boost_factor: f64,
    pub daily_boost_duration_ms: u64,
    pub daily_period_ms: u64,
    pub daily_reward_base: f64,
    pub daily_reward_per_level: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_rate_per_min: 1.0,
            claim_cooldown_base_ms: 60_000,
            claim_cooldown_floor_ms: 15_000,
            storm_claim_bonus: 1.2,
            ad_window_ms: 30_000,
            daily_limit_base_min: 360,
            storm_multiplier_base: 2.0,
            storm_duration_base_ms: 30_000,
            storm_window_min_ms: 5 * 60_000,
            storm_window_max_ms: 15 * 60_000,
            storm_window_floor_ms: 3 * 60_000,
            storm_window_span_min_ms: 60_000,
            luck_nudge_scale: 0.01,
            daily_boost_factor: 1.5,
            daily_boost_duration_ms: 10 * 60_000,
            daily_period_ms: 24 * 60 * 60_000,
            daily_reward_base: 50.0,
            daily_reward_per_level: 5.0,
        }
    }
}
