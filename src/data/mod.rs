mod config;
mod loader;
mod upgrade_data;

pub use config::GameConfig;
pub use loader::{
    game_config_path, load_game_config, load_game_config_from_path, load_upgrade_data,
    load_upgrade_data_from_path, upgrade_data_path,
};
pub use upgrade_data::{UpgradeCatalog, UpgradeDataFile, UpgradeDefinition, UpgradeEffect};
