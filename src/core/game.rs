use std::collections::BTreeMap;

use log::info;
use rand::Rng;

use crate::core::coin_store::CoinStore;
use crate::core::storm::{StormEvent, StormState, StormTuning};
use crate::data::{GameConfig, UpgradeCatalog, UpgradeEffect};
use crate::model::{
    ClaimOutcome, DailyOutcome, OfflineCatchup, PurchaseOutcome, TickInputs, TickSnapshot,
};

pub const MINUTE_MS: u64 = 60_000;
const DAY_MS: u64 = 24 * 60 * MINUTE_MS;

/// UTC day index for a millisecond timestamp. Used to reset the daily
/// active-minute counter without any timezone dependency.
pub fn day_index(now_ms: u64) -> u64 {
    now_ms / DAY_MS
}

/// The whole game state plus the engine operating on it. Every operation
/// takes `now` explicitly; randomness is injected where storms need it.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub coins: CoinStore,
    pub running: bool,
    /// Accrual minutes applied over the game's lifetime.
    pub tick_index: u64,
    /// Last accrual boundary; advanced in exact one-minute steps so
    /// sub-minute residue carries forward.
    pub last_tick_ms: u64,
    pub active_minutes_today: u32,
    /// Derived from the capacity upgrade, refreshed on purchase and load.
    pub daily_limit_min: u32,
    pub as_of_day: u64,
    pub last_claim_ms: u64,
    /// Derived from the claim_boost upgrade.
    pub claim_cooldown_ms: u64,
    /// Claim stays unlocked until this time; 0 means locked.
    pub ad_ready_until_ms: u64,
    pub storm: StormState,
    pub daily_last_claim_ms: u64,
    pub daily_boost_until_ms: u64,
    pub upgrades: BTreeMap<String, u32>,
    config: GameConfig,
    catalog: UpgradeCatalog,
}

impl Game {
    pub fn new(now: u64) -> Self {
        Self::with_config(GameConfig::default(), UpgradeCatalog::builtin(), now)
    }

    pub fn with_config(config: GameConfig, catalog: UpgradeCatalog, now: u64) -> Self {
        let mut game = Self {
            coins: CoinStore::default(),
            running: false,
            tick_index: 0,
            last_tick_ms: now,
            active_minutes_today: 0,
            daily_limit_min: 0,
            as_of_day: day_index(now),
            last_claim_ms: 0,
            claim_cooldown_ms: 0,
            ad_ready_until_ms: 0,
            storm: StormState::default(),
            daily_last_claim_ms: 0,
            daily_boost_until_ms: 0,
            upgrades: BTreeMap::new(),
            config,
            catalog,
        };
        game.apply_derived();
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &UpgradeCatalog {
        &self.catalog
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn upgrade_level(&self, id: &str) -> u32 {
        self.upgrades.get(id).copied().unwrap_or(0)
    }

    /// Cost of the next level, or `None` for an unknown id.
    pub fn upgrade_cost(&self, id: &str) -> Option<f64> {
        let def = self.catalog.get(id)?;
        Some(def.cost_at(self.upgrade_level(id)))
    }

    /// Refreshes the fields cached from upgrade levels. Must run after
    /// every purchase and on load so reads never see stale values.
    pub(crate) fn apply_derived(&mut self) {
        let mut cooldown = self.config.claim_cooldown_base_ms;
        let mut limit = self.config.daily_limit_base_min;
        for def in self.catalog.definitions() {
            let level = self.upgrade_level(&def.id);
            if level == 0 {
                continue;
            }
            match def.effect {
                UpgradeEffect::ClaimCooldown { step_ms } => {
                    cooldown = cooldown.saturating_sub(step_ms * u64::from(level));
                }
                UpgradeEffect::DailyCapacity { minutes_per_level } => {
                    limit += minutes_per_level * level;
                }
                _ => {}
            }
        }
        self.claim_cooldown_ms = cooldown.max(self.config.claim_cooldown_floor_ms);
        self.daily_limit_min = limit;
    }

    /// Base production, before any timed multipliers.
    pub fn base_rate_per_min(&self) -> f64 {
        let mut rate = self.config.base_rate_per_min;
        for def in self.catalog.definitions() {
            if let UpgradeEffect::RateBonus { per_level } = def.effect {
                rate += per_level * f64::from(self.upgrade_level(&def.id));
            }
        }
        rate
    }

    pub fn storm_tuning(&self) -> StormTuning {
        let cfg = &self.config;
        let mut multiplier = cfg.storm_multiplier_base;
        let mut duration_ms = cfg.storm_duration_base_ms;
        let mut window_min_ms = cfg.storm_window_min_ms;
        let mut window_max_ms = cfg.storm_window_max_ms;
        let mut bonus_chance = 0.0;
        for def in self.catalog.definitions() {
            let level = self.upgrade_level(&def.id);
            if level == 0 {
                continue;
            }
            match def.effect {
                UpgradeEffect::StormPower {
                    multiplier_per_level,
                    duration_step_ms,
                } => {
                    multiplier += multiplier_per_level * f64::from(level);
                    duration_ms += duration_step_ms * u64::from(level);
                }
                UpgradeEffect::StormFrequency {
                    min_step_ms,
                    max_step_ms,
                } => {
                    window_min_ms = window_min_ms.saturating_sub(min_step_ms * u64::from(level));
                    window_max_ms = window_max_ms.saturating_sub(max_step_ms * u64::from(level));
                }
                UpgradeEffect::LuckChance { per_level, cap } => {
                    bonus_chance += (per_level * f64::from(level)).min(cap);
                }
                _ => {}
            }
        }
        window_min_ms = window_min_ms.max(cfg.storm_window_floor_ms);
        window_max_ms = window_max_ms.max(window_min_ms + cfg.storm_window_span_min_ms);
        StormTuning {
            multiplier,
            duration_ms,
            window_min_ms,
            window_max_ms,
            bonus_chance: bonus_chance * cfg.luck_nudge_scale,
        }
    }

    /// Instantaneous production rate: base + upgrades, times the daily
    /// boost while it lasts, times the storm multiplier while one is
    /// active, times the caller's external multiplier last.
    pub fn effective_rate_per_min(&self, now: u64, external_multiplier: f64) -> f64 {
        let mut rate = self.base_rate_per_min();
        if now < self.daily_boost_until_ms {
            rate *= self.config.daily_boost_factor;
        }
        if self.storm.active {
            rate *= self.storm_tuning().multiplier;
        }
        (rate * external_multiplier.max(0.0)).max(0.0)
    }

    /// Advances the simulation to `now`: storm transitions first, then
    /// minute-discrete accrual. Accrual is skipped while stopped,
    /// backgrounded, or over the daily cap; storms keep their schedule
    /// regardless.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        now: u64,
        inputs: &TickInputs,
        rng: &mut R,
    ) -> TickSnapshot {
        self.coins.begin_tick();
        self.roll_day(now);

        let tuning = self.storm_tuning();
        let mut events = Vec::new();
        if let Some(event) = self.storm.advance(now, &tuning, rng) {
            events.push(event);
        }

        if self.can_accrue(inputs) {
            self.accrue_minutes(now, inputs.external_multiplier);
        } else {
            // the production clock does not run while gated, so a pause
            // never pays out retroactively on resume
            self.last_tick_ms = self.last_tick_ms.max(now);
        }

        self.snapshot(now, inputs, events)
    }

    fn can_accrue(&self, inputs: &TickInputs) -> bool {
        self.running && inputs.foreground && self.active_minutes_today < self.daily_limit_min
    }

    fn accrue_minutes(&mut self, now: u64, external_multiplier: f64) {
        while now.saturating_sub(self.last_tick_ms) >= MINUTE_MS {
            if self.active_minutes_today >= self.daily_limit_min {
                // capped for the day; drop the backlog so the next reset
                // does not pay it out
                self.last_tick_ms = now;
                break;
            }
            let rate = self.effective_rate_per_min(now, external_multiplier);
            self.coins.accrue(rate.floor());
            self.active_minutes_today += 1;
            self.tick_index += 1;
            self.last_tick_ms += MINUTE_MS;
        }
    }

    fn roll_day(&mut self, now: u64) {
        let today = day_index(now);
        if today != self.as_of_day {
            self.active_minutes_today = 0;
            self.as_of_day = today;
        }
    }

    fn snapshot(&self, now: u64, inputs: &TickInputs, events: Vec<StormEvent>) -> TickSnapshot {
        TickSnapshot {
            balance: self.coins.balance,
            unclaimed: self.coins.unclaimed,
            rate_per_min: self.effective_rate_per_min(now, inputs.external_multiplier),
            storm_active: self.storm.active,
            storm_multiplier: self.storm_tuning().multiplier,
            storm_ends_in_ms: self.storm.ends_in_ms(now),
            next_storm_in_ms: self.storm.next_in_ms(now),
            daily_ready: self.is_daily_ready(now),
            active_minutes_today: self.active_minutes_today,
            daily_limit_min: self.daily_limit_min,
            events,
        }
    }

    /// Marks a finished rewarded-ad view, opening the claim window.
    pub fn watch_ad_unlock(&mut self, now: u64) {
        self.ad_ready_until_ms = now + self.config.ad_window_ms;
    }

    /// All three gates must pass: something to claim, cooldown elapsed,
    /// ad window open.
    pub fn can_claim(&self, now: u64) -> bool {
        if self.coins.unclaimed <= 0.0 {
            return false;
        }
        if now.saturating_sub(self.last_claim_ms) < self.claim_cooldown_ms {
            return false;
        }
        now <= self.ad_ready_until_ms
    }

    pub fn claim(&mut self, now: u64) -> ClaimOutcome {
        if !self.can_claim(now) {
            return ClaimOutcome::Blocked;
        }
        let bonus = if self.storm.active {
            self.config.storm_claim_bonus
        } else {
            1.0
        };
        let gained = self.coins.claim_all(bonus);
        // the ad unlock is single-use
        self.ad_ready_until_ms = 0;
        self.last_claim_ms = now;
        ClaimOutcome::Claimed { gained }
    }

    /// Rolling 24 h readiness; a never-claimed reward is always ready.
    pub fn is_daily_ready(&self, now: u64) -> bool {
        self.daily_last_claim_ms == 0
            || now.saturating_sub(self.daily_last_claim_ms) >= self.config.daily_period_ms
    }

    pub fn compute_daily_reward(&self, external_multiplier: f64) -> f64 {
        let mut total_levels = 0u32;
        let mut booster = 0.0;
        for def in self.catalog.definitions() {
            let level = self.upgrade_level(&def.id);
            total_levels += level;
            if let UpgradeEffect::DailyReward { per_level } = def.effect {
                booster += per_level * f64::from(level);
            }
        }
        let base = self.config.daily_reward_base
            + f64::from(total_levels) * self.config.daily_reward_per_level;
        (base * (1.0 + booster) * external_multiplier.max(0.0)).floor()
    }

    /// Grants the daily lump sum and opens the production-boost window,
    /// once per rolling period.
    pub fn claim_daily(&mut self, now: u64, external_multiplier: f64) -> DailyOutcome {
        if !self.is_daily_ready(now) {
            return DailyOutcome::NotReady;
        }
        let reward = self.compute_daily_reward(external_multiplier);
        self.coins.credit(reward);
        self.daily_boost_until_ms = now + self.config.daily_boost_duration_ms;
        self.daily_last_claim_ms = now;
        DailyOutcome::Granted { reward }
    }

    pub fn buy_upgrade(&mut self, id: &str) -> PurchaseOutcome {
        let Some(def) = self.catalog.get(id) else {
            return PurchaseOutcome::UnknownUpgrade;
        };
        let level = self.upgrade_level(id);
        let cost = def.cost_at(level);
        if !self.coins.try_spend(cost) {
            return PurchaseOutcome::InsufficientFunds { cost };
        }
        self.upgrades.insert(id.to_string(), level + 1);
        self.apply_derived();
        PurchaseOutcome::Purchased {
            new_level: level + 1,
            cost,
        }
    }

    fn offline_cap_ms(&self) -> u64 {
        let mut cap = 0;
        for def in self.catalog.definitions() {
            if let UpgradeEffect::OfflineCap { minutes_per_level } = def.effect {
                cap += minutes_per_level * u64::from(self.upgrade_level(&def.id)) * MINUTE_MS;
            }
        }
        cap
    }

    /// One-shot credit for time elapsed while the app was closed, capped
    /// by the vault upgrade. Only the base-plus-upgrade rate applies;
    /// storms and boost windows are not reconstructed for offline time.
    pub fn offline_catchup(&mut self, now: u64, external_multiplier: f64) -> OfflineCatchup {
        let elapsed_ms = now.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now;
        if !self.running {
            return OfflineCatchup {
                elapsed_ms,
                ..OfflineCatchup::default()
            };
        }
        let credited_ms = elapsed_ms.min(self.offline_cap_ms());
        let rate = self.base_rate_per_min() * external_multiplier.max(0.0);
        let applied = (rate * credited_ms as f64 / MINUTE_MS as f64).floor();
        if applied > 0.0 {
            self.coins.accrue(applied);
            info!("offline catch-up credited {applied} coins for {credited_ms}ms");
        }
        OfflineCatchup {
            applied,
            credited_ms,
            elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::{Game, MINUTE_MS};
    use crate::data::{GameConfig, UpgradeCatalog};
    use crate::model::{ClaimOutcome, DailyOutcome, PurchaseOutcome, TickInputs};

    const EPSILON: f64 = 1e-9;
    const T0: u64 = 1_000_000;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn started_game() -> Game {
        let mut game = Game::new(T0);
        game.start();
        game
    }

    /// Config with storms pushed out of reach, for tests that span hours.
    fn calm_config() -> GameConfig {
        GameConfig {
            storm_window_min_ms: u64::MAX / 4,
            storm_window_max_ms: u64::MAX / 4,
            storm_window_floor_ms: u64::MAX / 4,
            ..GameConfig::default()
        }
    }

    fn calm_game() -> Game {
        let mut game = Game::with_config(calm_config(), UpgradeCatalog::builtin(), T0);
        game.start();
        game
    }

    #[test]
    fn one_minute_accrues_then_ad_unlock_allows_claim() {
        let mut game = started_game();
        let mut rng = rng();
        let now = T0 + MINUTE_MS;

        let snap = game.tick(now, &TickInputs::default(), &mut rng);
        assert_close(snap.unclaimed, 1.0);

        game.watch_ad_unlock(now);
        let outcome = game.claim(now);
        assert_eq!(outcome, ClaimOutcome::Claimed { gained: 1.0 });
        assert_close(game.coins.balance, 1.0);
        assert_close(game.coins.unclaimed, 0.0);
    }

    #[test]
    fn tick_is_idempotent_at_the_same_instant() {
        let mut game = started_game();
        let mut rng = rng();
        let now = T0 + MINUTE_MS;

        let first = game.tick(now, &TickInputs::default(), &mut rng);
        let second = game.tick(now, &TickInputs::default(), &mut rng);

        assert_close(first.unclaimed, second.unclaimed);
        assert_close(first.balance, second.balance);
        assert_eq!(game.active_minutes_today, 1);
    }

    #[test]
    fn sub_minute_residue_carries_forward() {
        let mut game = started_game();
        let mut rng = rng();

        game.tick(T0 + 90_000, &TickInputs::default(), &mut rng);
        assert_close(game.coins.unclaimed, 1.0);
        assert_eq!(game.last_tick_ms, T0 + MINUTE_MS);

        // the residual 30s plus another 30s completes the second minute
        game.tick(T0 + 120_000, &TickInputs::default(), &mut rng);
        assert_close(game.coins.unclaimed, 2.0);
    }

    #[test]
    fn accrual_requires_running_foreground_and_daily_headroom() {
        let mut rng = rng();
        let now = T0 + MINUTE_MS;

        let mut stopped = Game::new(T0);
        stopped.tick(now, &TickInputs::default(), &mut rng);
        assert_close(stopped.coins.unclaimed, 0.0);

        let mut hidden = started_game();
        let background = TickInputs {
            foreground: false,
            ..TickInputs::default()
        };
        hidden.tick(now, &background, &mut rng);
        assert_close(hidden.coins.unclaimed, 0.0);
    }

    #[test]
    fn gated_ticks_do_not_pay_out_retroactively_on_resume() {
        let mut game = started_game();
        let mut rng = rng();
        let background = TickInputs {
            foreground: false,
            ..TickInputs::default()
        };

        // an hour passes while backgrounded
        game.tick(T0 + 60 * MINUTE_MS, &background, &mut rng);
        assert_close(game.coins.unclaimed, 0.0);

        // back in the foreground: nothing owed yet, one minute later one coin
        game.tick(T0 + 60 * MINUTE_MS, &TickInputs::default(), &mut rng);
        assert_close(game.coins.unclaimed, 0.0);
        game.tick(T0 + 61 * MINUTE_MS, &TickInputs::default(), &mut rng);
        assert_close(game.coins.unclaimed, 1.0);
    }

    #[test]
    fn daily_limit_caps_accrual_until_the_day_rolls_over() {
        let mut game = calm_game();
        let mut rng = rng();

        game.tick(T0 + 400 * MINUTE_MS, &TickInputs::default(), &mut rng);
        assert_eq!(game.active_minutes_today, 360);
        assert_close(game.coins.unclaimed, 360.0);

        // still capped within the same day; the clock keeps advancing
        game.tick(T0 + 401 * MINUTE_MS, &TickInputs::default(), &mut rng);
        assert_close(game.coins.unclaimed, 360.0);
        game.tick(86_399_999, &TickInputs::default(), &mut rng);
        assert_close(game.coins.unclaimed, 360.0);
        assert_eq!(game.last_tick_ms, 86_399_999);

        // past midnight the counter resets and accrual resumes
        game.tick(86_500_000, &TickInputs::default(), &mut rng);
        assert_eq!(game.active_minutes_today, 1);
        assert_close(game.coins.unclaimed, 361.0);
    }

    #[test]
    fn claim_blocked_by_cooldown_leaves_state_untouched() {
        let mut game = started_game();
        game.coins.accrue(10.0);
        game.last_claim_ms = T0;
        game.watch_ad_unlock(T0 + 10_000);

        let outcome = game.claim(T0 + 10_000);
        assert_eq!(outcome, ClaimOutcome::Blocked);
        assert_close(game.coins.unclaimed, 10.0);
        assert_close(game.coins.balance, 0.0);
        assert_eq!(game.last_claim_ms, T0);
    }

    #[test]
    fn claim_blocked_without_ad_unlock() {
        let mut game = started_game();
        game.coins.accrue(10.0);

        assert!(!game.can_claim(T0 + MINUTE_MS));
        assert_eq!(game.claim(T0 + MINUTE_MS), ClaimOutcome::Blocked);
    }

    #[test]
    fn can_claim_is_false_with_nothing_unclaimed() {
        let mut game = started_game();
        game.watch_ad_unlock(T0);
        assert!(!game.can_claim(T0));
    }

    #[test]
    fn ad_unlock_is_consumed_by_a_claim() {
        let mut game = started_game();
        game.coins.accrue(5.0);
        game.watch_ad_unlock(T0 + MINUTE_MS);

        assert_eq!(
            game.claim(T0 + MINUTE_MS),
            ClaimOutcome::Claimed { gained: 5.0 }
        );
        assert_eq!(game.ad_ready_until_ms, 0);

        // a second claim needs a fresh unlock (and new unclaimed coins)
        game.coins.accrue(5.0);
        assert!(!game.can_claim(T0 + 10 * MINUTE_MS));
    }

    #[test]
    fn storm_claim_pays_twenty_percent_extra() {
        let mut game = started_game();
        game.coins.accrue(10.0);
        game.storm.active = true;
        game.storm.ends_at_ms = T0 + 10 * MINUTE_MS;
        game.watch_ad_unlock(T0 + MINUTE_MS);

        let outcome = game.claim(T0 + MINUTE_MS);
        assert_eq!(outcome, ClaimOutcome::Claimed { gained: 12.0 });
        assert_close(game.coins.total_earned, 12.0);
    }

    #[test]
    fn storm_and_daily_boost_multiply_the_rate() {
        let mut game = started_game();
        assert_close(game.effective_rate_per_min(T0, 1.0), 1.0);

        game.daily_boost_until_ms = T0 + MINUTE_MS;
        assert_close(game.effective_rate_per_min(T0, 1.0), 1.5);

        game.storm.active = true;
        assert_close(game.effective_rate_per_min(T0, 1.0), 3.0);

        // external multiplier applies last
        assert_close(game.effective_rate_per_min(T0, 1.2), 3.6);

        // boost expired
        assert_close(game.effective_rate_per_min(T0 + 2 * MINUTE_MS, 1.0), 2.0);
    }

    #[test]
    fn buying_unknown_upgrade_fails() {
        let mut game = started_game();
        assert_eq!(game.buy_upgrade("warp"), PurchaseOutcome::UnknownUpgrade);
    }

    #[test]
    fn underfunded_purchase_reports_the_cost() {
        let mut game = started_game();
        game.coins.credit(20.0);

        let outcome = game.buy_upgrade("miner");
        assert_eq!(outcome, PurchaseOutcome::InsufficientFunds { cost: 25.0 });
        assert_close(game.coins.balance, 20.0);
        assert_eq!(game.upgrade_level("miner"), 0);
    }

    #[test]
    fn purchase_deducts_cost_and_raises_the_rate() {
        let mut game = started_game();
        game.coins.credit(30.0);

        let outcome = game.buy_upgrade("miner");
        assert_eq!(
            outcome,
            PurchaseOutcome::Purchased {
                new_level: 1,
                cost: 25.0
            }
        );
        assert_close(game.coins.balance, 5.0);
        assert_close(game.base_rate_per_min(), 2.0);
        assert_close(game.upgrade_cost("miner").unwrap(), (25.0f64 * 1.55).floor());
    }

    #[test]
    fn derived_fields_refresh_immediately_on_purchase() {
        let mut game = started_game();
        game.coins.credit(100_000.0);

        game.buy_upgrade("claim_boost");
        assert_eq!(game.claim_cooldown_ms, 52_000);
        game.buy_upgrade("capacity");
        assert_eq!(game.daily_limit_min, 420);

        // cooldown never drops below its floor
        for _ in 0..10 {
            game.buy_upgrade("claim_boost");
        }
        assert_eq!(game.claim_cooldown_ms, 15_000);
    }

    #[test]
    fn storm_upgrades_shape_the_tuning() {
        let mut game = started_game();
        game.upgrades.insert("storm_boost".to_string(), 2);
        game.upgrades.insert("turbo".to_string(), 3);
        game.upgrades.insert("luck".to_string(), 2);

        let tuning = game.storm_tuning();
        assert_close(tuning.multiplier, 2.5);
        assert_eq!(tuning.duration_ms, 36_000);
        assert_eq!(tuning.window_min_ms, 240_000);
        assert_eq!(tuning.window_max_ms, 780_000);
        assert_close(tuning.bonus_chance, 0.0006);
    }

    #[test]
    fn storm_window_floors_hold_under_heavy_turbo() {
        let mut game = started_game();
        game.upgrades.insert("turbo".to_string(), 50);

        let tuning = game.storm_tuning();
        assert_eq!(tuning.window_min_ms, 180_000);
        assert_eq!(tuning.window_max_ms, 240_000);
    }

    #[test]
    fn daily_reward_follows_the_formula() {
        let mut game = started_game();
        assert_close(game.compute_daily_reward(1.0), 50.0);

        game.upgrades.insert("miner".to_string(), 3);
        game.upgrades.insert("daily_booster".to_string(), 2);
        // (50 + 5 levels * 5) * 1.2 = 90
        assert_close(game.compute_daily_reward(1.0), 90.0);
        assert_close(game.compute_daily_reward(1.5), 135.0);
    }

    #[test]
    fn daily_claim_grants_once_per_rolling_day() {
        let mut game = started_game();

        let outcome = game.claim_daily(T0, 1.0);
        assert_eq!(outcome, DailyOutcome::Granted { reward: 50.0 });
        assert_close(game.coins.balance, 50.0);
        assert_eq!(game.daily_boost_until_ms, T0 + 10 * MINUTE_MS);

        assert_eq!(game.claim_daily(T0 + 60_000, 1.0), DailyOutcome::NotReady);
        assert!(!game.is_daily_ready(T0 + 23 * 60 * MINUTE_MS));
        assert!(game.is_daily_ready(T0 + 24 * 60 * MINUTE_MS + 1_000));
    }

    #[test]
    fn offline_credit_is_bounded_by_the_vault_cap() {
        let mut game = calm_game();
        game.upgrades.insert("vault".to_string(), 1);

        let report = game.offline_catchup(T0 + 3 * 60 * MINUTE_MS, 1.0);
        assert_eq!(report.elapsed_ms, 3 * 60 * MINUTE_MS);
        assert_eq!(report.credited_ms, 60 * MINUTE_MS);
        assert_close(report.applied, 60.0);
        assert_close(game.coins.unclaimed, 60.0);
        assert_eq!(game.last_tick_ms, T0 + 3 * 60 * MINUTE_MS);

        // immediately after, there is nothing further to credit
        let again = game.offline_catchup(T0 + 3 * 60 * MINUTE_MS, 1.0);
        assert_close(again.applied, 0.0);
    }

    #[test]
    fn offline_credit_is_zero_without_the_vault() {
        let mut game = calm_game();
        let report = game.offline_catchup(T0 + 3 * 60 * MINUTE_MS, 1.0);
        assert_close(report.applied, 0.0);
        assert_eq!(report.credited_ms, 0);
        // the clock still advances so a later tick owes nothing
        assert_eq!(game.last_tick_ms, T0 + 3 * 60 * MINUTE_MS);
    }

    #[test]
    fn offline_credit_scales_with_the_external_multiplier() {
        let mut game = calm_game();
        game.upgrades.insert("vault".to_string(), 2);

        let report = game.offline_catchup(T0 + 90 * MINUTE_MS, 1.5);
        assert_eq!(report.credited_ms, 90 * MINUTE_MS);
        assert_close(report.applied, 135.0);
    }

    #[test]
    fn snapshot_reports_storm_countdowns() {
        let mut game = started_game();
        let mut rng = rng();

        let snap = game.tick(T0, &TickInputs::default(), &mut rng);
        assert!(!snap.storm_active);
        assert_eq!(snap.storm_ends_in_ms, 0);
        assert!(snap.next_storm_in_ms >= 5 * MINUTE_MS);
        assert!(snap.next_storm_in_ms <= 15 * MINUTE_MS);
        assert!(snap.daily_ready);
    }
}
