pub mod core;
pub mod data;
pub mod model;
pub mod save;

pub use crate::core::{
    CoinStore, Game, MINUTE_MS, StormEvent, StormState, StormTuning, TickDeltas, day_index,
};
pub use crate::data::{
    GameConfig, UpgradeCatalog, UpgradeDataFile, UpgradeDefinition, UpgradeEffect,
    game_config_path, load_game_config, load_game_config_from_path, load_upgrade_data,
    load_upgrade_data_from_path, upgrade_data_path,
};
pub use crate::model::{
    ClaimOutcome, DailyOutcome, OfflineCatchup, PurchaseOutcome, TickInputs, TickSnapshot,
};
pub use crate::save::{
    SaveData, SaveStore, apply_save_data, export_to_base64, import_from_base64,
    load_from_json_string, load_game, load_game_with, save_data_from_game, save_to_json_string,
};
