//! The single recycled obstacle
//!
//! One instance lives for the whole session. It slides along the approach
//! axis toward the player and jumps back to a random far distance once it has
//! passed, so difficulty comes only from speed, never from density.

use glam::Vec3;
use rand::Rng;

use super::collision::{HitBox, player_obstacle_hit};
use super::player::PlayerLocator;
use crate::consts::OBSTACLE_CENTER_Y;
use crate::effective_dt;
use crate::tuning::Tuning;

/// Outcome of one obstacle update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObstacleUpdate {
    pub collided: bool,
    /// New approach position if the obstacle was recycled this update
    pub recycled_to: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct ObstacleBody {
    /// Negative = ahead of the player, grows toward 0 and beyond as it passes
    pub approach_position: f32,
    /// Closing speed last applied
    pub speed: f32,
}

impl ObstacleBody {
    pub fn new(spawn_z: f32) -> Self {
        Self {
            approach_position: spawn_z,
            speed: 0.0,
        }
    }

    pub fn reset(&mut self, spawn_z: f32) {
        self.approach_position = spawn_z;
        self.speed = 0.0;
    }

    /// Advance one frame; frozen (no motion, no collision) unless active and alive
    #[allow(clippy::too_many_arguments)]
    pub fn update<L, R>(
        &mut self,
        dt: f32,
        speed: f32,
        player: &L,
        active: bool,
        dead: bool,
        tuning: &Tuning,
        rng: &mut R,
    ) -> ObstacleUpdate
    where
        L: PlayerLocator + ?Sized,
        R: Rng,
    {
        let mut out = ObstacleUpdate::default();
        if !active || dead {
            return out;
        }

        self.speed = speed;
        self.approach_position += speed * effective_dt(dt);

        // No player placed yet => nothing to hit this frame
        if let Some(player_pos) = player.player_position() {
            let hitbox = HitBox::from_tuning(tuning);
            out.collided = player_obstacle_hit(&hitbox, player_pos, self.approach_position);
        }

        if self.approach_position > tuning.recycle_z {
            self.approach_position = rng.random_range(tuning.respawn_min_z..tuning.respawn_max_z);
            out.recycled_to = Some(self.approach_position);
        }

        out
    }

    /// World position of the obstacle's center
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(0.0, OBSTACLE_CENTER_Y, self.approach_position)
    }
}
