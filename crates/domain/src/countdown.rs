/// Remaining seconds at which the final warning is announced.
pub const FINAL_WARNING: u32 = 5;

/// State of a countdown after a whole number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub elapsed: u32,
    pub total: u32,
}

impl Tick {
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.elapsed)
    }

    /// Remaining time as `m:ss`.
    #[must_use]
    pub fn display(&self) -> String {
        let remaining = self.remaining();
        format!("{}:{:02}", remaining / 60, remaining % 60)
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.;
        }
        f64::from(self.elapsed) / f64::from(self.total) * 100.
    }

    #[must_use]
    pub fn is_final_warning(&self) -> bool {
        self.remaining() == FINAL_WARNING
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }
}

/// Counts down one tick per elapsed second.
///
/// The remaining time is derived from the number of ticks, not from the wall clock, so
/// late ticks delay the countdown but never skip or repeat a second.
#[derive(Debug, Clone)]
pub struct Countdown {
    total: u32,
    elapsed: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self { total, elapsed: 0 }
    }

    #[must_use]
    pub fn current(&self) -> Tick {
        Tick {
            elapsed: self.elapsed,
            total: self.total,
        }
    }
}

impl Iterator for Countdown {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.elapsed >= self.total {
            return None;
        }
        self.elapsed += 1;
        Some(self.current())
    }
}
