#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickDeltas {
    pub balance: f64,
    pub unclaimed: f64,
}

impl TickDeltas {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Currency ledger. `balance` is spendable, `unclaimed` is accrued
/// production waiting behind the claim gate. Both stay non-negative;
/// lifetime totals only grow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinStore {
    pub balance: f64,
    pub unclaimed: f64,
    pub total_earned: f64,
    pub total_claimed: f64,
    pub tick_deltas: TickDeltas,
}

impl CoinStore {
    pub fn begin_tick(&mut self) {
        self.tick_deltas.reset();
    }

    /// Production lands in the unclaimed pool.
    pub fn accrue(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.unclaimed += amount;
        self.total_earned += amount;
        self.tick_deltas.unclaimed += amount;
    }

    /// Direct credit to the spendable balance (daily reward lump sum).
    pub fn credit(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.balance += amount;
        self.total_earned += amount;
        self.tick_deltas.balance += amount;
    }

    /// Moves the whole unclaimed pool to the balance, scaled by `bonus`
    /// and floored to whole coins. Returns the amount gained.
    pub fn claim_all(&mut self, bonus: f64) -> f64 {
        let drained = self.unclaimed;
        let gained = (drained * bonus.max(0.0)).floor();
        self.unclaimed = 0.0;
        self.tick_deltas.unclaimed -= drained;
        if gained > 0.0 {
            self.balance += gained;
            self.total_claimed += gained;
            self.tick_deltas.balance += gained;
            // the bonus portion is newly minted, not previously accrued
            if gained > drained {
                self.total_earned += gained - drained;
            }
        }
        gained
    }

    /// Deducts `cost` from the balance if it is covered. Returns whether
    /// the spend happened.
    pub fn try_spend(&mut self, cost: f64) -> bool {
        if cost <= 0.0 {
            return true;
        }
        if self.balance + f64::EPSILON < cost {
            return false;
        }
        self.balance = (self.balance - cost).max(0.0);
        self.tick_deltas.balance -= cost;
        true
    }
}
