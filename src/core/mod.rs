mod coin_store;
mod game;
mod storm;

pub use coin_store::{CoinStore, TickDeltas};
pub use game::{Game, MINUTE_MS, day_index};
pub use storm::{StormEvent, StormState, StormTuning};
