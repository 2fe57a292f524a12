//! Player/obstacle collision rule
//!
//! A lenient box-proximity test, not mesh intersection: the obstacle hits when
//! it is close along the approach axis and the player has not cleared it.

use glam::Vec3;

use crate::tuning::Tuning;

/// Strict upper bounds on approach-axis gap and player height for a hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub max_gap: f32,
    pub max_height: f32,
}

impl HitBox {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            max_gap: tuning.hit_gap,
            max_height: tuning.hit_height,
        }
    }

    /// Both bounds must hold; touching either bound is a miss
    #[inline]
    pub fn contains(&self, gap: f32, height: f32) -> bool {
        gap < self.max_gap && height < self.max_height
    }
}

impl Default for HitBox {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

/// Check the player (world position, y = physics height) against an obstacle
/// at `obstacle_z` on the approach axis
pub fn player_obstacle_hit(hitbox: &HitBox, player: Vec3, obstacle_z: f32) -> bool {
    let gap = (player.z - obstacle_z).abs();
    hitbox.contains(gap, player.y)
}
