//! Generator configuration and the acceptance probability policy.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_ROOM_CAP, DEFAULT_WIDTH, PERCENT};
use crate::coord::{Bounds, Coord};
use crate::error::{DungeonError, Result};

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Settings for one generation run.
///
/// Missing fields fall back to [`Default`] when deserialized, so a config
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of grid columns.
    pub width: usize,

    /// Number of grid rows.
    pub height: usize,

    /// Maximum number of rooms, Start included.
    pub room_cap: usize,

    /// Seed for reproducible layouts. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// How candidate rooms are accepted during growth.
    pub policy: ProbabilityPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_cap: DEFAULT_ROOM_CAP,
            seed: None,
            policy: ProbabilityPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize, room_cap: usize) -> Self {
        Self {
            width,
            height,
            room_cap,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: ProbabilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rejects configs the generator cannot run with.
    pub fn validate(&self) -> Result<()> {
        Bounds::checked(self.width, self.height)?;
        if self.room_cap == 0 {
            return Err(DungeonError::InvalidRoomCap(self.room_cap));
        }
        self.policy.validate()
    }
}

// ---------------------------------------------------------------------------
// ProbabilityPolicy
// ---------------------------------------------------------------------------

/// Point that candidate distances are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityAnchor {
    /// The Start room; the normalizing distance is the grid diagonal.
    #[default]
    Start,
    /// The grid center; the normalizing distance is the half diagonal.
    Center,
}

/// Shapes the acceptance probability of a candidate room.
///
/// ```text
/// proximity = (max_distance - distance) / max_distance
/// p = min(proximity * 100 + bonus, ceiling).max(floor)
/// ```
///
/// Both clamps are monotone, so a closer candidate is never less likely
/// to be accepted than a farther one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityPolicy {
    pub anchor: ProbabilityAnchor,

    /// Percentage points added before clamping.
    pub bonus: f64,

    /// Lower clamp in percent.
    pub floor: f64,

    /// Upper clamp in percent. `None` leaves the value unclamped.
    pub ceiling: Option<f64>,
}

impl Default for ProbabilityPolicy {
    fn default() -> Self {
        Self {
            anchor: ProbabilityAnchor::Start,
            bonus: 0.0,
            floor: 0.0,
            ceiling: Some(PERCENT),
        }
    }
}

impl ProbabilityPolicy {
    /// Center-anchored policy with a +50 bonus: dense middle, sparse edges.
    pub fn centered() -> Self {
        Self {
            anchor: ProbabilityAnchor::Center,
            bonus: 50.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.bonus.is_finite() {
            return Err(DungeonError::InvalidPolicy(format!(
                "bonus must be finite, got {}",
                self.bonus
            )));
        }
        if !self.floor.is_finite() || !(0.0..=PERCENT).contains(&self.floor) {
            return Err(DungeonError::InvalidPolicy(format!(
                "floor must lie in 0..=100, got {}",
                self.floor
            )));
        }
        if let Some(ceiling) = self.ceiling {
            if !ceiling.is_finite() || ceiling < self.floor {
                return Err(DungeonError::InvalidPolicy(format!(
                    "ceiling must be finite and at least the floor ({}), got {}",
                    self.floor, ceiling
                )));
            }
        }
        Ok(())
    }

    /// Acceptance probability, in percent, for a candidate cell.
    pub fn probability(&self, bounds: Bounds, start: Coord, candidate: Coord) -> f64 {
        let (distance, max_distance) = match self.anchor {
            ProbabilityAnchor::Start => (candidate.distance_to(start), bounds.diagonal()),
            ProbabilityAnchor::Center => {
                let center = bounds.center();
                (
                    candidate.distance_to_point(center),
                    center.0.hypot(center.1),
                )
            }
        };
        self.shape(distance, max_distance)
    }

    /// Turns a distance into a clamped percentage.
    pub fn shape(&self, distance: f64, max_distance: f64) -> f64 {
        let proximity = if max_distance > 0.0 {
            (max_distance - distance) / max_distance
        } else {
            1.0
        };
        let mut percent = proximity * PERCENT + self.bonus;
        if let Some(ceiling) = self.ceiling {
            percent = percent.min(ceiling);
        }
        percent.max(self.floor)
    }
}
