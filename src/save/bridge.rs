use log::warn;

use crate::core::{Game, StormState, day_index};
use crate::data::{GameConfig, UpgradeCatalog};

use super::{SaveData, SaveStore, load_from_json_string};

pub fn save_data_from_game(game: &Game, now: u64) -> SaveData {
    SaveData {
        version: 1,
        as_of_day: day_index(now),
        store: SaveStore {
            balance: game.coins.balance,
            unclaimed: game.coins.unclaimed,
            total_earned: game.coins.total_earned,
            total_claimed: game.coins.total_claimed,
        },
        running: game.running,
        tick_index: game.tick_index,
        last_tick_ms: game.last_tick_ms,
        active_minutes_today: game.active_minutes_today,
        last_claim_ms: game.last_claim_ms,
        ad_ready_until_ms: game.ad_ready_until_ms,
        storm_active: game.storm.active,
        storm_ends_at_ms: game.storm.ends_at_ms,
        next_storm_at_ms: game.storm.next_at_ms,
        daily_last_claim_ms: game.daily_last_claim_ms,
        daily_boost_until_ms: game.daily_boost_until_ms,
        upgrades: game.upgrades.clone(),
    }
}

/// Restores a snapshot into `game`. Values are clamped, upgrade ids the
/// catalog does not know are dropped, the active-minute counter only
/// survives within its original day, and a storm that blew itself out
/// while the app was closed is ended (the next tick reschedules).
pub fn apply_save_data(game: &mut Game, save: &SaveData, now: u64) {
    game.coins.balance = save.store.balance.max(0.0);
    game.coins.unclaimed = save.store.unclaimed.max(0.0);
    game.coins.total_earned = save.store.total_earned.max(0.0);
    game.coins.total_claimed = save.store.total_claimed.max(0.0);

    game.running = save.running;
    game.tick_index = save.tick_index;
    game.last_tick_ms = if save.last_tick_ms == 0 {
        now
    } else {
        save.last_tick_ms
    };

    game.as_of_day = day_index(now);
    game.active_minutes_today = if save.as_of_day == game.as_of_day {
        save.active_minutes_today
    } else {
        0
    };

    game.last_claim_ms = save.last_claim_ms;
    game.ad_ready_until_ms = save.ad_ready_until_ms;
    game.daily_last_claim_ms = save.daily_last_claim_ms;
    game.daily_boost_until_ms = save.daily_boost_until_ms;

    game.upgrades.clear();
    for (id, level) in &save.upgrades {
        if game.catalog().get(id).is_some() {
            game.upgrades.insert(id.clone(), *level);
        }
    }
    game.apply_derived();
    game.active_minutes_today = game.active_minutes_today.min(game.daily_limit_min);

    game.storm = StormState {
        active: save.storm_active,
        ends_at_ms: save.storm_ends_at_ms,
        next_at_ms: save.next_storm_at_ms,
    };
    if game.storm.active && now > game.storm.ends_at_ms {
        game.storm = StormState::default();
    }
}

/// Reconstructs a game from a persisted blob, falling back to a fresh
/// state when the blob cannot be decoded. Loading never fails.
pub fn load_game(blob: &str, now: u64) -> Game {
    load_game_with(GameConfig::default(), UpgradeCatalog::builtin(), blob, now)
}

pub fn load_game_with(config: GameConfig, catalog: UpgradeCatalog, blob: &str, now: u64) -> Game {
    let mut game = Game::with_config(config, catalog, now);
    match load_from_json_string(blob) {
        Ok(save) => apply_save_data(&mut game, &save, now),
        Err(err) => warn!("discarding unreadable save, starting fresh: {err:#}"),
    }
    game
}
