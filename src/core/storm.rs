use log::debug;
use rand::Rng;

/// Storm parameters resolved from config and upgrade levels for the
/// current call. Recomputed by the game each tick so a purchase takes
/// effect immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StormTuning {
    pub multiplier: f64,
    pub duration_ms: u64,
    pub window_min_ms: u64,
    pub window_max_ms: u64,
    /// Per-tick chance of an early trigger (luck upgrade), 0 to skip the
    /// draw entirely.
    pub bonus_chance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormEvent {
    Started,
    Ended,
}

/// Two-state scheduler: calm until `next_at_ms`, storming until
/// `ends_at_ms`. While a storm is active `next_at_ms` is held at 0; while
/// calm, `next_at_ms == 0` means "schedule on the next advance", which
/// covers both fresh games and post-load fixups without needing an RNG at
/// construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StormState {
    pub active: bool,
    pub ends_at_ms: u64,
    pub next_at_ms: u64,
}

impl StormState {
    /// Resolves at most one transition and reports it, so callers can
    /// fire UI/sound reactions exactly once rather than every tick.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        now: u64,
        tuning: &StormTuning,
        rng: &mut R,
    ) -> Option<StormEvent> {
        if self.active {
            if now >= self.ends_at_ms {
                self.active = false;
                self.ends_at_ms = 0;
                self.schedule_next(now, tuning, rng);
                debug!("storm ended, next scheduled at {}ms", self.next_at_ms);
                return Some(StormEvent::Ended);
            }
            return None;
        }

        if self.next_at_ms == 0 {
            self.schedule_next(now, tuning, rng);
        }

        let due = now >= self.next_at_ms;
        let lucky =
            !due && tuning.bonus_chance > 0.0 && rng.r#gen::<f64>() < tuning.bonus_chance;
        if due || lucky {
            self.active = true;
            self.ends_at_ms = now + tuning.duration_ms;
            // no countdown runs while a storm is live
            self.next_at_ms = 0;
            debug!("storm started, ends at {}ms", self.ends_at_ms);
            return Some(StormEvent::Started);
        }
        None
    }

    pub fn schedule_next<R: Rng + ?Sized>(&mut self, now: u64, tuning: &StormTuning, rng: &mut R) {
        let min = tuning.window_min_ms;
        let max = tuning.window_max_ms.max(min);
        self.next_at_ms = now + rng.gen_range(min..=max);
    }

    pub fn ends_in_ms(&self, now: u64) -> u64 {
        if !self.active {
            return 0;
        }
        self.ends_at_ms.saturating_sub(now)
    }

    pub fn next_in_ms(&self, now: u64) -> u64 {
        if self.active {
            return 0;
        }
        self.next_at_ms.saturating_sub(now)
    }
}
