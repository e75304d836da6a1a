//! Per-subject movement capabilities.
//!
//! Different subject types move at different speeds.  Instead of a class per
//! type, a [`SubjectKind`] selects a [`MoveProfile`] once, when the subject is
//! created; the orchestrator only ever sees the profile.

use oc_core::{Gait, MoveConfig};

use crate::{MobilityError, MobilityResult};

/// The type of a subject, as far as movement is concerned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubjectKind {
    /// Infantry: configured reference times, move coefficient 1.
    #[default]
    Man,
    /// Tank: own rotation time and global move coefficient.
    Tank,
}

impl SubjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SubjectKind::Man  => "man",
            SubjectKind::Tank => "tank",
        }
    }
}

/// Reference times and coefficient used to derive movement durations.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveProfile {
    pub walk_ref_time:   f64,
    pub run_ref_time:    f64,
    pub crawl_ref_time:  f64,
    /// Seconds per degree of rotation.
    pub rotate_ref_time: f64,
    /// Multiplier applied to every gait reference time.
    pub move_coeff:      f64,
}

impl MoveProfile {
    /// Build the profile of a `kind` subject from the loaded configuration.
    pub fn for_kind(kind: SubjectKind, config: &MoveConfig) -> Self {
        let base = Self {
            walk_ref_time:   config.walk_ref_time,
            run_ref_time:    config.run_ref_time,
            crawl_ref_time:  config.crawl_ref_time,
            rotate_ref_time: config.rotate_ref_time,
            move_coeff:      1.0,
        };
        match kind {
            SubjectKind::Man => base,
            SubjectKind::Tank => Self {
                rotate_ref_time: config.tank.rotate_ref_time,
                move_coeff:      config.tank.global_move_coeff,
                ..base
            },
        }
    }

    /// Seconds needed to cross one tile at `gait`.
    pub fn tile_duration(&self, gait: Gait) -> MobilityResult<f64> {
        let ref_time = match gait {
            Gait::Walk  => self.walk_ref_time,
            Gait::Run   => self.run_ref_time,
            Gait::Crawl => self.crawl_ref_time,
        };
        checked("tile move", ref_time * self.move_coeff)
    }

    /// Seconds needed to turn by `angle` degrees (either direction).
    pub fn rotate_duration(&self, angle: f64) -> MobilityResult<f64> {
        checked("rotation", angle.abs() * self.rotate_ref_time)
    }
}

fn checked(what: &'static str, value: f64) -> MobilityResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MobilityError::InvalidDuration { what, value })
    }
}
