use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SaveStore {
    pub balance: f64,
    pub unclaimed: f64,
    pub total_earned: f64,
    pub total_claimed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub version: u32,
    /// UTC day index the snapshot was written on; decides whether the
    /// active-minute counter survives a load.
    pub as_of_day: u64,
    pub store: SaveStore,
    pub running: bool,
    pub tick_index: u64,
    pub last_tick_ms: u64,
    pub active_minutes_today: u32,
    pub last_claim_ms: u64,
    pub ad_ready_until_ms: u64,
    pub storm_active: bool,
    pub storm_ends_at_ms: u64,
    pub next_storm_at_ms: u64,
    pub daily_last_claim_ms: u64,
    pub daily_boost_until_ms: u64,
    pub upgrades: BTreeMap<String, u32>,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: 1,
            as_of_day: 0,
            store: SaveStore::default(),
            running: false,
            tick_index: 0,
            last_tick_ms: 0,
            active_minutes_today: 0,
            last_claim_ms: 0,
            ad_ready_until_ms: 0,
            storm_active: false,
            storm_ends_at_ms: 0,
            next_storm_at_ms: 0,
            daily_last_claim_ms: 0,
            daily_boost_until_ms: 0,
            upgrades: BTreeMap::new(),
        }
    }
}

impl SaveData {
    /// Field-by-field merge with defaults: absent or wrong-typed fields
    /// fall back to their default, unknown fields are ignored. A whole
    /// snapshot is only rejected when the blob is not JSON at all.
    pub fn from_value(value: &Value) -> Self {
        let mut data = Self::default();
        let Some(map) = value.as_object() else {
            return data;
        };

        if let Some(version) = get_u32(map, "version") {
            data.version = version;
        }
        if let Some(day) = get_u64(map, "as_of_day") {
            data.as_of_day = day;
        }
        if let Some(store) = map.get("store").and_then(Value::as_object) {
            data.store.balance = get_f64(store, "balance").unwrap_or(0.0);
            data.store.unclaimed = get_f64(store, "unclaimed").unwrap_or(0.0);
            data.store.total_earned = get_f64(store, "total_earned").unwrap_or(0.0);
            data.store.total_claimed = get_f64(store, "total_claimed").unwrap_or(0.0);
        }
        if let Some(running) = get_bool(map, "running") {
            data.running = running;
        }
        if let Some(ticks) = get_u64(map, "tick_index") {
            data.tick_index = ticks;
        }
        if let Some(ms) = get_u64(map, "last_tick_ms") {
            data.last_tick_ms = ms;
        }
        if let Some(minutes) = get_u32(map, "active_minutes_today") {
            data.active_minutes_today = minutes;
        }
        if let Some(ms) = get_u64(map, "last_claim_ms") {
            data.last_claim_ms = ms;
        }
        if let Some(ms) = get_u64(map, "ad_ready_until_ms") {
            data.ad_ready_until_ms = ms;
        }
        if let Some(active) = get_bool(map, "storm_active") {
            data.storm_active = active;
        }
        if let Some(ms) = get_u64(map, "storm_ends_at_ms") {
            data.storm_ends_at_ms = ms;
        }
        if let Some(ms) = get_u64(map, "next_storm_at_ms") {
            data.next_storm_at_ms = ms;
        }
        if let Some(ms) = get_u64(map, "daily_last_claim_ms") {
            data.daily_last_claim_ms = ms;
        }
        if let Some(ms) = get_u64(map, "daily_boost_until_ms") {
            data.daily_boost_until_ms = ms;
        }
        if let Some(upgrades) = map.get("upgrades").and_then(Value::as_object) {
            for (id, level) in upgrades {
                if let Some(level) = level.as_u64().and_then(|v| u32::try_from(v).ok()) {
                    data.upgrades.insert(id.clone(), level);
                }
            }
        }

        data
    }
}

type Map = serde_json::Map<String, Value>;

fn get_f64(map: &Map, key: &str) -> Option<f64> {
    map.get(key)?.as_f64()
}

fn get_u64(map: &Map, key: &str) -> Option<u64> {
    map.get(key)?.as_u64()
}

fn get_u32(map: &Map, key: &str) -> Option<u32> {
    get_u64(map, key).and_then(|v| u32::try_from(v).ok())
}

fn get_bool(map: &Map, key: &str) -> Option<bool> {
    map.get(key)?.as_bool()
}
