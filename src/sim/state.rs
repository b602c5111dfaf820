//! Game state and core simulation types
//!
//! `GameState` is the single mutable root: the player and the obstacle
//! director are owned exclusively by it and have no existence outside a
//! round. Everything a renderer needs is exported through `Snapshot`.

use serde::{Deserialize, Serialize};

use super::obstacle::{ObstacleDirector, ObstacleKind};
use super::player::Player;
use crate::consts::*;

/// Lifecycle state of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input
    NotStarted,
    /// Active gameplay
    Playing,
    /// Frozen; delta-time accrual stops
    Paused,
    /// Round ended by a collision
    GameOver,
}

/// Notifications emitted by `tick`, in the order they occurred.
///
/// The core has no outward dependencies; presentation, audio, and persistence
/// collaborators subscribe to these instead of being called directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(f32),
    /// Fired only when the high score is beaten at game over
    HighScoreChanged(f32),
    PhaseChanged(GamePhase),
    /// Day/night flip; true = night
    ThemeChanged(bool),
    /// Audio trigger: the player left the ground
    Jumped,
    /// Audio trigger: a score milestone was crossed (carries the new index)
    Milestone(u32),
    /// Audio trigger: the round-ending collision
    Collision,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub player: Player,
    pub director: ObstacleDirector,
    /// Non-decreasing while playing
    pub score: f32,
    /// Best committed score across rounds
    pub high_score: f32,
    /// Current scroll speed, eased toward the score-derived target
    pub game_speed: f32,
    pub phase: GamePhase,
    /// true = night theme
    pub is_dark: bool,
    /// Last milestone index a sound was played for
    pub last_milestone: u32,
}

impl GameState {
    /// Create a fresh simulation. `high_score` comes from the persistence
    /// collaborator (0 when nothing is stored).
    pub fn new(seed: u64, high_score: f32) -> Self {
        Self {
            seed,
            player: Player::new(),
            director: ObstacleDirector::new(seed),
            score: 0.0,
            high_score,
            game_speed: INITIAL_SPEED,
            phase: GamePhase::NotStarted,
            is_dark: false,
            last_milestone: 0,
        }
    }

    /// Reinitialize everything round-scoped. The committed high score and the
    /// director's RNG stream survive.
    pub fn reset_round(&mut self) {
        self.player = Player::new();
        self.director.reset();
        self.score = 0.0;
        self.game_speed = INITIAL_SPEED;
        self.is_dark = false;
        self.last_milestone = 0;
    }

    /// Read-only copy of everything a renderer needs for one frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: PlayerView {
                x: self.player.pos.x,
                y: self.player.pos.y,
                width: self.player.width,
                height: self.player.height,
                is_jumping: self.player.is_jumping,
                is_ducking: self.player.is_ducking,
                run_frame: self.player.run_frame,
                is_blinking: self.player.is_blinking,
            },
            obstacles: self
                .director
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.pos.x,
                    y: o.pos.y,
                    width: o.width,
                    height: o.height,
                    kind: o.kind,
                })
                .collect(),
            score: self.score,
            high_score: self.high_score,
            is_dark: self.is_dark,
            phase: self.phase,
        }
    }
}

/// Player pose for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_jumping: bool,
    pub is_ducking: bool,
    pub run_frame: u8,
    pub is_blinking: bool,
}

/// One obstacle for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

/// Per-frame render snapshot; serializable for non-Rust consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub score: f32,
    pub high_score: f32,
    pub is_dark: bool,
    pub phase: GamePhase,
}
