//! Movement and simulation configuration.
//!
//! Typically loaded from a JSON file by the application crate:
//!
//! ```json
//! {
//!   "move": {
//!     "walk_ref_time": 3.0,
//!     "run_ref_time": 1.0,
//!     "crawl_ref_time": 10.0,
//!     "rotate_ref_time": 0.01,
//!     "tank": { "global_move_coeff": 3.0, "rotate_ref_time": 0.1111 }
//!   },
//!   "sim": { "start_time_secs": 946684800.0, "step_secs": 1.0, "max_ticks": 120 }
//! }
//! ```
//!
//! Every field has a default, so a partial file (or `{}`) is valid.  Loaded
//! values are validated before use: reference times and coefficients must be
//! finite and strictly positive.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── MoveConfig ────────────────────────────────────────────────────────────────

/// Reference times used to derive per-subject movement durations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveConfig {
    /// Seconds to walk one tile at move coefficient 1.
    pub walk_ref_time: f64,

    /// Seconds to run one tile at move coefficient 1.
    pub run_ref_time: f64,

    /// Seconds to crawl one tile at move coefficient 1.
    pub crawl_ref_time: f64,

    /// Seconds per degree of rotation for subjects without an override.
    pub rotate_ref_time: f64,

    /// Overrides applied to tank subjects.
    pub tank: TankConfig,
}

/// Tank-specific movement overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TankConfig {
    /// Multiplier applied to every gait reference time.
    pub global_move_coeff: f64,

    /// Seconds per degree of turret-less hull rotation.
    pub rotate_ref_time: f64,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            walk_ref_time:   3.0,
            run_ref_time:    1.0,
            crawl_ref_time:  10.0,
            rotate_ref_time: 0.01,
            tank:            TankConfig::default(),
        }
    }
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            global_move_coeff: 3.0,
            rotate_ref_time:   0.1111,
        }
    }
}

impl MoveConfig {
    /// Reject non-finite, zero, or negative reference times and coefficients.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("walk_ref_time",          self.walk_ref_time),
            ("run_ref_time",           self.run_ref_time),
            ("crawl_ref_time",         self.crawl_ref_time),
            ("rotate_ref_time",        self.rotate_ref_time),
            ("tank.global_move_coeff", self.tank.global_move_coeff),
            ("tank.rotate_ref_time",   self.tank.rotate_ref_time),
        ];
        for (name, value) in fields {
            require_positive(name, value)?;
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Tick-loop settings used when replaying with a steppable clock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Epoch seconds at which the first tick is sampled.
    pub start_time_secs: f64,

    /// Seconds the clock advances between two ticks.
    pub step_secs: f64,

    /// Upper bound on ticks for `run_until_idle`.
    pub max_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_time_secs: 0.0,
            step_secs:       1.0,
            max_ticks:       10_000,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> CoreResult<()> {
        require_positive("sim.step_secs", self.step_secs)?;
        if !self.start_time_secs.is_finite() {
            return Err(CoreError::Config(format!(
                "sim.start_time_secs must be finite, got {}",
                self.start_time_secs
            )));
        }
        Ok(())
    }
}

// ── File format ───────────────────────────────────────────────────────────────

/// The on-disk configuration document: `{ "move": {...}, "sim": {...} }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(rename = "move")]
    pub movement: MoveConfig,
    pub sim:      SimConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.movement.validate()?;
        self.sim.validate()
    }
}

fn require_positive(name: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!(
            "{name} must be finite and greater than zero, got {value}"
        )))
    }
}
