//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Host supplies frame deltas; nothing reads a clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{HitBox, player_obstacle_hit};
pub use obstacle::{ObstacleBody, ObstacleUpdate};
pub use player::{PlayerBody, PlayerLocator, PlayerUpdate};
pub use state::{FrameView, GameEvent, GamePhase, GameState, InputEvent, ObstacleView, PlayerView};
pub use tick::{TickInput, tick};
pub use timer::ScoreTimer;
