use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDataFile {
    #[serde(default)]
    pub upgrades: Vec<UpgradeDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_cost: f64,
    /// Geometric growth factor, > 1 so cost strictly increases per level.
    pub cost_growth: f64,
    pub effect: UpgradeEffect,
}

impl UpgradeDefinition {
    /// Cost of buying the next level when `level` are already owned.
    pub fn cost_at(&self, level: u32) -> f64 {
        (self.base_cost * self.cost_growth.powi(level as i32)).floor()
    }
}

/// What one level of an upgrade does. Tagged so the catalog can be
/// expressed in a data file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpgradeEffect {
    /// Adds to the base production rate.
    RateBonus { per_level: f64 },
    /// Pulls both bounds of the storm scheduling window down.
    StormFrequency { min_step_ms: u64, max_step_ms: u64 },
    /// Stronger and longer storms.
    StormPower {
        multiplier_per_level: f64,
        duration_step_ms: u64,
    },
    /// Shortens the claim cooldown.
    ClaimCooldown { step_ms: u64 },
    /// Raises the daily active-minute limit.
    DailyCapacity { minutes_per_level: u32 },
    /// Small per-tick chance of an early storm, capped.
    LuckChance { per_level: f64, cap: f64 },
    /// Extends the offline catch-up window.
    OfflineCap { minutes_per_level: u64 },
    /// Multiplies the daily reward.
    DailyReward { per_level: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeCatalog {
    definitions: Vec<UpgradeDefinition>,
}

impl Default for UpgradeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl UpgradeCatalog {
    pub fn new(definitions: Vec<UpgradeDefinition>) -> Self {
        Self { definitions }
    }

    pub fn from_file(file: UpgradeDataFile) -> Self {
        Self::new(file.upgrades)
    }

    pub fn definitions(&self) -> &[UpgradeDefinition] {
        &self.definitions
    }

    pub fn get(&self, id: &str) -> Option<&UpgradeDefinition> {
        self.definitions.iter().find(|def| def.id == id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The shipped upgrade set. A data file can override it via
    /// `from_file`.
    pub fn builtin() -> Self {
        fn def(
            id: &str,
            name: &str,
            description: &str,
            base_cost: f64,
            cost_growth: f64,
            effect: UpgradeEffect,
        ) -> UpgradeDefinition {
            UpgradeDefinition {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                base_cost,
                cost_growth,
                effect,
            }
        }

        Self::new(vec![
            def(
                "miner",
                "Miner",
                "Increase base coins per minute.",
                25.0,
                1.55,
                UpgradeEffect::RateBonus { per_level: 1.0 },
            ),
            def(
                "turbo",
                "Turbo",
                "Storms arrive a bit sooner (still rare).",
                80.0,
                1.6,
                UpgradeEffect::StormFrequency {
                    min_step_ms: 20_000,
                    max_step_ms: 40_000,
                },
            ),
            def(
                "storm_boost",
                "Storm Booster",
                "Stronger and longer storms.",
                140.0,
                1.65,
                UpgradeEffect::StormPower {
                    multiplier_per_level: 0.25,
                    duration_step_ms: 3_000,
                },
            ),
            def(
                "claim_boost",
                "Claim Booster",
                "Shorter claim cooldown.",
                90.0,
                1.62,
                UpgradeEffect::ClaimCooldown { step_ms: 8_000 },
            ),
            def(
                "capacity",
                "Daily Capacity",
                "Increase the daily active mining limit.",
                120.0,
                1.58,
                UpgradeEffect::DailyCapacity {
                    minutes_per_level: 60,
                },
            ),
            def(
                "luck",
                "Lucky Spark",
                "Tiny chance to trigger a storm early.",
                110.0,
                1.6,
                UpgradeEffect::LuckChance {
                    per_level: 0.03,
                    cap: 0.15,
                },
            ),
            def(
                "vault",
                "Vault",
                "Earn while away, up to a time cap.",
                150.0,
                1.6,
                UpgradeEffect::OfflineCap {
                    minutes_per_level: 60,
                },
            ),
            def(
                "daily_booster",
                "Daily Booster",
                "Bigger daily rewards.",
                100.0,
                1.6,
                UpgradeEffect::DailyReward { per_level: 0.1 },
            ),
        ])
    }
}
