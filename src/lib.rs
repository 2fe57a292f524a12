//! Dino Runner - a minimal endless-runner simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacle, collision, game state)
//! - `session`: Host-facing frame driver (fixed substeps, one-shot input, no-session guard)
//! - `tuning`: Data-driven game balance

pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death.
    /// Covers a full MAX_FRAME_DT so slow frames don't lose wall-clock time.
    pub const MAX_SUBSTEPS: u32 = 12;
    /// Largest frame delta the host loop will feed the simulation (backgrounded tabs)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Downward acceleration (world units/s²)
    pub const GRAVITY: f32 = 50.0;
    /// Vertical velocity applied on jump (world units/s)
    pub const LAUNCH_SPEED: f32 = 18.0;

    /// Obstacle closing speed at score 0
    pub const BASE_SPEED: f32 = 22.0;
    /// Score points per +1 unit/s of obstacle speed
    pub const SPEED_RAMP: f32 = 150.0;

    /// Collision box: approach-axis gap and player height must both be under these
    pub const HIT_GAP: f32 = 0.7;
    pub const HIT_HEIGHT: f32 = 1.2;

    /// Obstacle recycles once it is this far past the player
    pub const RECYCLE_Z: f32 = 10.0;
    /// Recycled obstacles reappear in [RESPAWN_MIN_Z, RESPAWN_MAX_Z)
    pub const RESPAWN_MIN_Z: f32 = -50.0;
    pub const RESPAWN_MAX_Z: f32 = -30.0;
    /// Obstacle position for a fresh session
    pub const SPAWN_Z: f32 = -30.0;

    /// Seconds of play per score point
    pub const SCORE_INTERVAL: f32 = 0.1;
    /// Smallest accepted score interval
    pub const MIN_SCORE_INTERVAL: f32 = 0.001;

    /// Player roll when collapsed (radians)
    pub const COLLAPSED_ANGLE: f32 = std::f32::consts::FRAC_PI_2;
    /// Fraction of remaining roll closed per frame
    pub const TILT_SMOOTHING: f32 = 0.1;

    /// Player box half-height; the mesh is drawn this far above its physics height
    pub const PLAYER_RENDER_OFFSET: f32 = 0.6;
    /// Player sits at the origin of the approach axis
    pub const PLAYER_Z: f32 = 0.0;
    /// Obstacle box center height
    pub const OBSTACLE_CENTER_Y: f32 = 0.8;

    /// Autopilot jumps when the obstacle is this many seconds away
    pub const AUTOPILOT_LEAD_TIME: f32 = 0.36;

    /// Undrained session events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 64;
}

/// Linear interpolation from `a` toward `b` by fraction `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sanitize a frame delta: negative or non-finite deltas move nothing
#[inline]
pub fn effective_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}

/// Zero-padded five digit score readout
pub fn format_score(score: u64) -> String {
    format!("{score:05}")
}
