//! Data-driven game balance
//!
//! Defaults mirror `consts`. A host may load a partial JSON document to
//! override any subset; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance knobs read by the simulation every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub launch_speed: f32,
    pub base_speed: f32,
    /// Score points per +1 unit/s of speed
    pub speed_ramp: f32,
    pub hit_gap: f32,
    pub hit_height: f32,
    pub recycle_z: f32,
    pub respawn_min_z: f32,
    pub respawn_max_z: f32,
    pub spawn_z: f32,
    /// Seconds per score point
    pub score_interval: f32,
    pub collapsed_angle: f32,
    pub tilt_smoothing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            launch_speed: LAUNCH_SPEED,
            base_speed: BASE_SPEED,
            speed_ramp: SPEED_RAMP,
            hit_gap: HIT_GAP,
            hit_height: HIT_HEIGHT,
            recycle_z: RECYCLE_Z,
            respawn_min_z: RESPAWN_MIN_Z,
            respawn_max_z: RESPAWN_MAX_Z,
            spawn_z: SPAWN_Z,
            score_interval: SCORE_INTERVAL,
            collapsed_angle: COLLAPSED_ANGLE,
            tilt_smoothing: TILT_SMOOTHING,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("gravity", self.gravity),
            ("launch_speed", self.launch_speed),
            ("base_speed", self.base_speed),
            ("speed_ramp", self.speed_ramp),
            ("hit_gap", self.hit_gap),
            ("hit_height", self.hit_height),
            ("score_interval", self.score_interval),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite and greater than zero",
                });
            }
        }

        let finite = [
            ("recycle_z", self.recycle_z),
            ("respawn_min_z", self.respawn_min_z),
            ("respawn_max_z", self.respawn_max_z),
            ("spawn_z", self.spawn_z),
            ("collapsed_angle", self.collapsed_angle),
            ("tilt_smoothing", self.tilt_smoothing),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        if self.respawn_min_z >= self.respawn_max_z {
            return Err(TuningError::Invalid {
                field: "respawn_min_z",
                reason: "must be less than respawn_max_z",
            });
        }
        // A respawn past the recycle line would recycle every tick
        if self.respawn_max_z >= self.recycle_z {
            return Err(TuningError::Invalid {
                field: "respawn_max_z",
                reason: "must be less than recycle_z",
            });
        }
        if self.spawn_z >= self.recycle_z {
            return Err(TuningError::Invalid {
                field: "spawn_z",
                reason: "must be less than recycle_z",
            });
        }
        if self.tilt_smoothing <= 0.0 || self.tilt_smoothing > 1.0 {
            return Err(TuningError::Invalid {
                field: "tilt_smoothing",
                reason: "must be in (0, 1]",
            });
        }
        // Each period costs a loop iteration in the score timer
        if self.score_interval < MIN_SCORE_INTERVAL {
            return Err(TuningError::Invalid {
                field: "score_interval",
                reason: "must be at least 0.001 seconds",
            });
        }
        Ok(())
    }

    /// Obstacle closing speed for the current score (linear, unbounded)
    #[inline]
    pub fn obstacle_speed(&self, score: u64) -> f32 {
        self.base_speed + score as f32 / self.speed_ramp
    }
}
