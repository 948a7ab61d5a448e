use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::{GameConfig, UpgradeDataFile};

const GAME_CONFIG_RELATIVE_PATH: &str = "data/game_config.json";
const UPGRADE_DATA_RELATIVE_PATH: &str = "data/upgrade_data.json";

pub fn game_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(GAME_CONFIG_RELATIVE_PATH)
}

pub fn upgrade_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(UPGRADE_DATA_RELATIVE_PATH)
}

pub fn load_game_config() -> Result<GameConfig> {
    load_game_config_from_path(game_config_path())
}

pub fn load_game_config_from_path(path: impl AsRef<Path>) -> Result<GameConfig> {
    read_json(path.as_ref(), "game config")
}

pub fn load_upgrade_data() -> Result<UpgradeDataFile> {
    load_upgrade_data_from_path(upgrade_data_path())
}

pub fn load_upgrade_data_from_path(path: impl AsRef<Path>) -> Result<UpgradeDataFile> {
    read_json(path.as_ref(), "upgrade data")
}

fn read_json<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
