mod state;

pub use state::{
    ClaimOutcome, DailyOutcome, OfflineCatchup, PurchaseOutcome, TickInputs, TickSnapshot,
};
