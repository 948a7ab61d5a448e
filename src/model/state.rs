use crate::core::StormEvent;

/// Caller-supplied signals for a single tick. The engine never reads a
/// wall clock or an identity provider itself; both arrive here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInputs {
    /// False when the hosting app is backgrounded; accrual is paused
    /// while storms keep running on schedule.
    pub foreground: bool,
    /// Multiplier supplied by an external verification layer, applied
    /// last in the production model. 1.0 means no bonus.
    pub external_multiplier: f64,
}

impl Default for TickInputs {
    fn default() -> Self {
        Self {
            foreground: true,
            external_multiplier: 1.0,
        }
    }
}

/// Read-only view returned by `Game::tick`, meant for rendering.
/// Callers display these values instead of re-deriving them.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSnapshot {
    pub balance: f64,
    pub unclaimed: f64,
    pub rate_per_min: f64,
    pub storm_active: bool,
    pub storm_multiplier: f64,
    /// Remaining storm time, 0 while calm.
    pub storm_ends_in_ms: u64,
    /// Countdown to the scheduled storm, 0 while one is active.
    pub next_storm_in_ms: u64,
    pub daily_ready: bool,
    pub active_minutes_today: u32,
    pub daily_limit_min: u32,
    /// Transitions that happened during this tick, each reported once.
    pub events: Vec<StormEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClaimOutcome {
    Claimed { gained: f64 },
    /// One of the claim gates (funds, cooldown, ad window) did not pass.
    Blocked,
}

impl ClaimOutcome {
    pub fn gained(&self) -> f64 {
        match *self {
            Self::Claimed { gained } => gained,
            Self::Blocked => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PurchaseOutcome {
    Purchased { new_level: u32, cost: f64 },
    UnknownUpgrade,
    /// Carries the cost that was not met so the UI can display it.
    InsufficientFunds { cost: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DailyOutcome {
    Granted { reward: f64 },
    NotReady,
}

/// Result of the one-shot offline credit applied on load.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OfflineCatchup {
    /// Coins credited to the unclaimed pool.
    pub applied: f64,
    /// Elapsed time actually paid out, after the vault cap.
    pub credited_ms: u64,
    pub elapsed_ms: u64,
}
