mod bridge;
mod codec;
mod model;

pub use bridge::{apply_save_data, load_game, load_game_with, save_data_from_game};
pub use codec::{export_to_base64, import_from_base64, load_from_json_string, save_to_json_string};
pub use model::{SaveData, SaveStore};
