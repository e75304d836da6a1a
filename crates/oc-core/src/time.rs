//! Simulation time model.
//!
//! # Design
//!
//! Movement durations are continuous: a rotation may take 4.9995 s and a
//! tile leg 9.0 s.  Time is therefore sampled as `f64` epoch seconds from an
//! injected [`Clock`] rather than counted in integer ticks.  A [`Tick`] is
//! only a sequence number for one evaluation pass of the tick loop; it carries
//! no duration of its own.
//!
//! The engine never reads a global clock.  Production code uses
//! [`SystemClock`]; tests and replays use [`FrozenClock`], which only moves
//! when told to.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Sequence number of a tick-loop pass.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The tick immediately after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        self.offset(1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Clocks ────────────────────────────────────────────────────────────────────

/// Source of "now", in seconds since the Unix epoch.
pub trait Clock {
    fn now(&self) -> f64;
}

/// A clock whose time can be moved forward explicitly.
///
/// Used by `Sim::run_until_idle` to drive replays at a fixed step.
pub trait AdvanceClock: Clock {
    fn advance(&mut self, secs: f64);
}

/// Wall-clock time from [`SystemTime`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        // A system clock set before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// A clock frozen at a fixed instant until [`set`](Self::set) or
/// [`advance`](AdvanceClock::advance) moves it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrozenClock {
    secs: f64,
}

impl FrozenClock {
    /// 2000-01-01T00:00:00Z, the instant used by the reference walkthrough.
    pub const Y2K: f64 = 946_684_800.0;

    pub fn at(secs: f64) -> Self {
        Self { secs }
    }

    pub fn set(&mut self, secs: f64) {
        self.secs = secs;
    }
}

impl Clock for FrozenClock {
    #[inline]
    fn now(&self) -> f64 {
        self.secs
    }
}

impl AdvanceClock for FrozenClock {
    #[inline]
    fn advance(&mut self, secs: f64) {
        self.secs += secs;
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}
