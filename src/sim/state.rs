//! Game state and core simulation types
//!
//! The session owns one player and one obstacle for its whole lifetime; phase
//! transitions reset them in place rather than recreating them.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleBody;
use super::player::PlayerBody;
use super::timer::ScoreTimer;
use crate::format_score;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, awaiting first activation
    Start,
    /// Score timer running, physics live
    Playing,
    /// Crashed, awaiting reactivation
    Dead,
}

/// Logical inputs produced from the single start/jump trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    ActivateOrRestart,
    JumpRequested,
}

impl InputEvent {
    /// The trigger jumps while playing and (re)starts otherwise
    pub fn for_trigger(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Playing => InputEvent::JumpRequested,
            GamePhase::Start | GamePhase::Dead => InputEvent::ActivateOrRestart,
        }
    }
}

/// Discrete things that happened during one tick, for the host to react to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    Started,
    Restarted,
    Jumped,
    Landed,
    Crashed { score: u64 },
    ObstacleRecycled { z: f32 },
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Edge-triggered; set by input, cleared when the player lands
    pub jump_requested: bool,
    pub player: PlayerBody,
    pub obstacle: ObstacleBody,
    pub score_timer: ScoreTimer,
    /// Obstacle respawn distances
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Start,
            score: 0,
            jump_requested: false,
            player: PlayerBody::new(),
            obstacle: ObstacleBody::new(tuning.spawn_z),
            score_timer: ScoreTimer::new(tuning.score_interval),
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Enter Playing from Start or Dead. Ignored while already playing.
    pub fn activate(&mut self) {
        let event = match self.phase {
            GamePhase::Playing => {
                log::debug!("Activate ignored while playing");
                return;
            }
            GamePhase::Start => GameEvent::Started,
            GamePhase::Dead => GameEvent::Restarted,
        };

        self.score = 0;
        self.jump_requested = false;
        self.player.reset();
        self.obstacle.reset(self.tuning.spawn_z);
        self.score_timer.start();
        self.phase = GamePhase::Playing;

        log::info!("Run {:?} (seed {})", event, self.seed);
        self.events.push(event);
    }

    /// Raise the jump request. Only meaningful while playing.
    pub fn request_jump(&mut self) {
        if self.phase == GamePhase::Playing {
            self.jump_requested = true;
        } else {
            log::debug!("Jump ignored in {:?}", self.phase);
        }
    }

    /// Apply a logical input event
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::ActivateOrRestart => self.activate(),
            InputEvent::JumpRequested => self.request_jump(),
        }
    }

    /// Transition Playing -> Dead; the score timer stops unconditionally
    pub fn crash(&mut self) {
        self.score_timer.stop();
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Dead;
        self.player.is_dead = true;
        log::info!("Crashed with score {}", self.score);
        self.events.push(GameEvent::Crashed { score: self.score });
    }

    /// Current obstacle closing speed
    pub fn speed(&self) -> f32 {
        self.tuning.obstacle_speed(self.score)
    }

    /// Snapshot for the presentation layer
    pub fn view(&self) -> FrameView {
        FrameView {
            phase: self.phase,
            score: self.score,
            score_text: format_score(self.score),
            speed: self.speed(),
            player: PlayerView {
                vertical_position: self.player.vertical_position,
                render_height: self.player.render_height(),
                rotation: self.player.rotation,
                is_dead: self.player.is_dead,
            },
            obstacle: ObstacleView {
                approach_position: self.obstacle.approach_position,
            },
        }
    }
}

/// Render-facing player fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub vertical_position: f32,
    pub render_height: f32,
    pub rotation: f32,
    pub is_dead: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub approach_position: f32,
}

/// Everything the presentation layer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub score: u64,
    pub score_text: String,
    pub speed: f32,
    pub player: PlayerView,
    pub obstacle: ObstacleView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_awaits_activation() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert!(!state.score_timer.is_running());
        assert_eq!(state.obstacle.approach_position, -30.0);
    }

    #[test]
    fn test_trigger_mapping() {
        assert_eq!(InputEvent::for_trigger(GamePhase::Start), InputEvent::ActivateOrRestart);
        assert_eq!(InputEvent::for_trigger(GamePhase::Dead), InputEvent::ActivateOrRestart);
        assert_eq!(InputEvent::for_trigger(GamePhase::Playing), InputEvent::JumpRequested);
    }

    #[test]
    fn test_jump_ignored_outside_play() {
        let mut state = GameState::new(1);
        state.request_jump();
        assert!(!state.jump_requested);
    }

    #[test]
    fn test_activate_resets_bodies() {
        let mut state = GameState::new(1);
        state.activate();
        state.score = 57;
        state.player.vertical_position = 0.4;
        state.player.rotation = 1.2;
        state.obstacle.approach_position = 0.1;
        state.crash();
        assert_eq!(state.phase, GamePhase::Dead);

        state.activate();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.vertical_position, 0.0);
        assert_eq!(state.player.rotation, 0.0);
        assert!(!state.player.is_dead);
        assert_eq!(state.obstacle.approach_position, state.tuning.spawn_z);
        assert!(state.score_timer.is_running());
        assert_eq!(
            state.events,
            vec![
                GameEvent::Started,
                GameEvent::Crashed { score: 57 },
                GameEvent::Restarted
            ]
        );
    }

    #[test]
    fn test_activate_while_playing_keeps_score() {
        let mut state = GameState::new(1);
        state.activate();
        state.score = 12;
        state.activate();
        assert_eq!(state.score, 12);
    }

    #[test]
    fn test_view_serializes() {
        let mut state = GameState::new(3);
        state.activate();
        state.score = 42;
        let view = state.view();
        assert_eq!(view.score_text, "00042");
        assert!((view.player.render_height - 0.6).abs() < 1e-6);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["score"], 42);
        assert_eq!(json["obstacle"]["approach_position"], -30.0);
    }
}
