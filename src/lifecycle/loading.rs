use std::time::Duration;

/// Hard upper bound on how long the loader may hold the page.
pub const MAX_LOADER_DELAY: Duration = Duration::from_secs(5);

const DEFAULT_LOADER_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderTiming {
    delay: Duration,
}

impl Default for LoaderTiming {
    fn default() -> Self {
        Self {
            delay: DEFAULT_LOADER_DELAY,
        }
    }
}

impl LoaderTiming {
    pub fn new(delay: Duration) -> Self {
        Self { delay }.bounded()
    }

    /// Clamp the delay so the reveal always fires within [`MAX_LOADER_DELAY`].
    pub fn bounded(self) -> Self {
        Self {
            delay: self.delay.min(MAX_LOADER_DELAY),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Delay in milliseconds, the unit browser timers expect.
    pub fn delay_ms(&self) -> f64 {
        self.delay.as_secs_f64() * 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Loading,
    Revealed,
    Cancelled,
}

/// One-shot gate in front of the page content.
///
/// Starts in [`GatePhase::Loading`] and leaves it at most once, either by
/// revealing the content or by being cancelled when the page unmounts first.
/// Neither exit can be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingGate {
    phase: GatePhase,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingGate {
    pub fn new() -> Self {
        Self {
            phase: GatePhase::Loading,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == GatePhase::Loading
    }

    /// Returns `true` only for the call that actually hid the overlay.
    pub fn reveal(&mut self) -> bool {
        match self.phase {
            GatePhase::Loading => {
                self.phase = GatePhase::Revealed;
                true
            }
            GatePhase::Revealed | GatePhase::Cancelled => false,
        }
    }

    /// Abandon a pending reveal. Has no effect once the gate left `Loading`.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            GatePhase::Loading => {
                self.phase = GatePhase::Cancelled;
                true
            }
            GatePhase::Revealed | GatePhase::Cancelled => false,
        }
    }
}
