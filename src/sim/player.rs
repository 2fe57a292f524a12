//! Player body: vertical jump physics and the death tip-over

use glam::Vec3;

use crate::consts::{PLAYER_RENDER_OFFSET, PLAYER_Z};
use crate::tuning::Tuning;
use crate::{effective_dt, lerp};

/// What happened to the player during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    /// Left the ground this update
    pub launched: bool,
    /// Touched down this update (consumer should clear the jump request)
    pub landed: bool,
}

/// The runner
#[derive(Debug, Clone, Default)]
pub struct PlayerBody {
    /// Height above ground (>= 0)
    pub vertical_position: f32,
    pub vertical_velocity: f32,
    /// True from launch until landing
    pub is_jumping: bool,
    pub is_dead: bool,
    /// Roll about the approach axis (radians), cosmetic only
    pub rotation: f32,
}

impl PlayerBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to a standing, resting runner
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.vertical_position == 0.0
    }

    /// Advance one frame.
    ///
    /// `jump_requested` is the session's edge-triggered flag; it only launches
    /// from the ground, so requests made mid-air are dropped.
    pub fn update(
        &mut self,
        dt: f32,
        jump_requested: bool,
        active: bool,
        dead: bool,
        tuning: &Tuning,
    ) -> PlayerUpdate {
        let mut out = PlayerUpdate::default();
        self.is_dead = dead;

        if dead {
            // Asymptotic, never lands exactly on the collapsed pose
            self.rotation = lerp(self.rotation, tuning.collapsed_angle, tuning.tilt_smoothing);
            return out;
        }
        if !active && self.is_grounded() {
            return out;
        }

        if jump_requested && self.is_grounded() && !self.is_jumping {
            self.vertical_velocity = tuning.launch_speed;
            self.is_jumping = true;
            out.launched = true;
        }

        let dt = effective_dt(dt);
        if dt > 0.0 && (self.is_jumping || self.vertical_position > 0.0) {
            let velocity = self.vertical_velocity - tuning.gravity * dt;
            let position = self.vertical_position + velocity * dt;

            if position <= 0.0 {
                self.vertical_position = 0.0;
                self.vertical_velocity = 0.0;
                self.is_jumping = false;
                out.landed = true;
            } else {
                self.vertical_position = position;
                self.vertical_velocity = velocity;
            }
        }

        self.rotation = lerp(self.rotation, 0.0, tuning.tilt_smoothing);
        out
    }

    /// World position used for collision (y is physics height)
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(0.0, self.vertical_position, PLAYER_Z)
    }

    /// Height at which the presentation layer should draw the body's center
    pub fn render_height(&self) -> f32 {
        self.vertical_position + PLAYER_RENDER_OFFSET
    }
}

/// Lets the obstacle find the player without owning it
pub trait PlayerLocator {
    /// `None` when no player has been placed yet
    fn player_position(&self) -> Option<Vec3>;
}

impl PlayerLocator for PlayerBody {
    fn player_position(&self) -> Option<Vec3> {
        Some(self.world_position())
    }
}

impl<L: PlayerLocator + ?Sized> PlayerLocator for &L {
    fn player_position(&self) -> Option<Vec3> {
        (**self).player_position()
    }
}

impl<L: PlayerLocator> PlayerLocator for Option<L> {
    fn player_position(&self) -> Option<Vec3> {
        self.as_ref().and_then(|l| l.player_position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Jump from rest and step until landing; returns airtime in seconds
    fn airtime(dt: f32) -> f32 {
        let tuning = Tuning::default();
        let mut player = PlayerBody::new();
        let mut t = 0.0;
        for _ in 0..10_000 {
            // Held jump is harmless mid-air
            let out = player.update(dt, true, true, false, &tuning);
            t += dt;
            if out.landed {
                return t;
            }
        }
        panic!("player never landed");
    }

    #[test]
    fn test_jump_sets_launch_velocity() {
        let tuning = Tuning::default();
        let mut player = PlayerBody::new();
        let out = player.update(0.0, true, true, false, &tuning);
        assert!(out.launched);
        assert_eq!(player.vertical_velocity, 18.0);
        assert_eq!(player.vertical_position, 0.0);
    }

    #[test]
    fn test_leaves_ground_on_jump_frame() {
        let tuning = Tuning::default();
        let mut player = PlayerBody::new();
        player.update(1.0 / 60.0, true, true, false, &tuning);
        assert!(player.vertical_position > 0.0);
        assert!(player.is_jumping);
    }

    #[test]
    fn test_airtime_matches_ballistics() {
        // t = 2 * v0 / g = 0.72s, within a frame or two at any sane rate
        for dt in [1.0 / 30.0, 1.0 / 60.0, 1.0 / 120.0, 1.0 / 144.0] {
            let t = airtime(dt);
            assert!((t - 0.72).abs() <= 2.0 * dt + 1e-3, "dt={dt} airtime={t}");
        }
    }

    #[test]
    fn test_lands_at_rest() {
        let tuning = Tuning::default();
        let mut player = PlayerBody::new();
        let dt = 1.0 / 120.0;
        let mut jump = true;
        let mut elapsed = 0.0;
        while elapsed < 0.8 {
            if player.update(dt, jump, true, false, &tuning).landed {
                jump = false;
            }
            elapsed += dt;
        }
        assert_eq!(player.vertical_position, 0.0);
        assert_eq!(player.vertical_velocity, 0.0);
        assert!(!player.is_jumping);
    }

    #[test]
    fn test_no_double_jump() {
        let tuning = Tuning::default();
        let mut player = PlayerBody::new();
        let dt = 1.0 / 60.0;
        player.update(dt, true, true, false, &tuning);
        for _ in 0..10 {
            player.update(dt, true, true, false, &tuning);
        }
        assert!(player.vertical_position > 0.0);
        let before = player.vertical_velocity;
        let out = player.update(dt, true, true, false, &tuning);
        assert!(!out.launched);
        assert!((player.vertical_velocity - (before - tuning.gravity * dt)).abs() < 1e-4);
    }

    #[test]
    fn test_inactive_resting_is_noop() {
        let tuning = Tuning::default();
        let mut player = PlayerBody::new();
        player.rotation = 0.5;
        let out = player.update(1.0 / 60.0, true, false, false, &tuning);
        assert_eq!(out, PlayerUpdate::default());
        assert_eq!(player.vertical_velocity, 0.0);
        assert_eq!(player.rotation, 0.5);
    }

    #[test]
    fn test_resting_without_jump_stays_put() {
        let tuning = Tuning::default();
        let mut player = PlayerBody::new();
        let out = player.update(1.0 / 60.0, false, true, false, &tuning);
        assert!(!out.landed);
        assert_eq!(player.vertical_position, 0.0);
    }

    #[test]
    fn test_dead_tips_over_without_physics() {
        let tuning = Tuning::default();
        let mut player = PlayerBody {
            vertical_position: 0.5,
            vertical_velocity: 3.0,
            ..Default::default()
        };
        player.update(1.0 / 60.0, false, false, true, &tuning);
        assert!(player.is_dead);
        assert_eq!(player.vertical_position, 0.5);
        assert_eq!(player.vertical_velocity, 3.0);
        assert!((player.rotation - tuning.collapsed_angle * 0.1).abs() < 1e-6);

        for _ in 0..30 {
            player.update(1.0 / 60.0, false, false, true, &tuning);
        }
        assert!(player.rotation < tuning.collapsed_angle);
        assert!(player.rotation > tuning.collapsed_angle * 0.9);
    }

    #[test]
    fn test_rotation_eases_back_while_alive() {
        let tuning = Tuning::default();
        let mut player = PlayerBody {
            rotation: 1.0,
            ..Default::default()
        };
        player.update(1.0 / 60.0, true, true, false, &tuning);
        assert!((player.rotation - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_negative_dt_does_not_move() {
        let tuning = Tuning::default();
        let mut player = PlayerBody {
            vertical_position: 2.0,
            vertical_velocity: 5.0,
            is_jumping: true,
            ..Default::default()
        };
        player.update(-0.5, true, true, false, &tuning);
        assert_eq!(player.vertical_position, 2.0);
        assert_eq!(player.vertical_velocity, 5.0);
    }

    #[test]
    fn test_locator() {
        let player = PlayerBody {
            vertical_position: 1.5,
            ..Default::default()
        };
        assert_eq!(player.player_position(), Some(Vec3::new(0.0, 1.5, 0.0)));
        assert_eq!(Some(&player).player_position(), Some(Vec3::new(0.0, 1.5, 0.0)));
        assert_eq!(None::<&PlayerBody>.player_position(), None);
        assert!((player.render_height() - 2.1).abs() < 1e-6);
    }
}
