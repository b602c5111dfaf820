//! T-Rex Dash - a side-scrolling runner game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `game`: Frame clock + collaborator wiring around the simulation
//! - `persistence`: Key-value storage for high score and mute preference
//! - `audio`: Fire-and-forget sound triggers
//!
//! The simulation is headless: a presentation layer drives it once per display
//! frame with an elapsed-time delta and consumes the events it emits.

pub mod audio;
pub mod game;
pub mod persistence;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 200.0;
    /// Ground line the player and cacti stand on
    pub const GROUND_Y: f32 = 160.0;

    /// Player geometry - fixed horizontal position, height shrinks while ducking
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 44.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 26.0;
    /// Hitbox inset on all sides (collisions feel fairer than the sprite)
    pub const PLAYER_HITBOX_INSET: f32 = 4.0;

    /// Vertical physics, integrated per tick
    pub const GRAVITY: f32 = 0.3;
    pub const JUMP_VELOCITY: f32 = -12.0;
    pub const MAX_FALL_SPEED: f32 = 6.0;

    /// Game speed curve
    pub const INITIAL_SPEED: f32 = 2.0;
    pub const SPEED_INCREMENT: f32 = 0.15;
    /// Target speed steps up every this many points
    pub const SPEED_INCREASE_INTERVAL: f32 = 400.0;
    pub const MAX_SPEED: f32 = 5.0;
    /// Actual speed eases toward the target by this much per tick
    pub const SPEED_EASE_STEP: f32 = 0.01;

    /// Obstacle spacing (accumulated travel distance between spawns)
    pub const MIN_OBSTACLE_SPACING: f32 = 400.0;
    pub const MAX_OBSTACLE_SPACING: f32 = 800.0;
    /// Spacing shrinks by this much per point of score
    pub const SPACING_DECAY: f32 = 0.1;
    /// Uniform jitter added on top of the spacing draw
    pub const SPAWN_JITTER: f32 = 100.0;
    /// Obstacles spawn this far past the right edge of the field
    pub const SPAWN_LOOKAHEAD: f32 = 50.0;

    /// Cactus dimension ranges
    pub const CACTUS_MIN_WIDTH: f32 = 20.0;
    pub const CACTUS_MAX_WIDTH: f32 = 48.0;
    pub const CACTUS_MIN_HEIGHT: f32 = 40.0;
    pub const CACTUS_MAX_HEIGHT: f32 = 60.0;
    pub const CACTUS_HITBOX_INSET: f32 = 2.0;

    /// Pterodactyl geometry and the two flight altitudes
    pub const PTERODACTYL_WIDTH: f32 = 46.0;
    pub const PTERODACTYL_HEIGHT: f32 = 40.0;
    pub const PTERODACTYL_ALTITUDES: [f32; 2] = [100.0, 120.0];
    pub const PTERODACTYL_HITBOX_INSET: f32 = 4.0;
    /// Pterodactyls only appear past this score, and then with this chance
    pub const PTERODACTYL_SCORE_THRESHOLD: f32 = 500.0;
    pub const PTERODACTYL_CHANCE: f64 = 0.3;

    /// Score accrues at speed * this per tick
    pub const SCORE_RATE: f32 = 0.1;
    /// One milestone event per crossing of each multiple of this
    pub const MILESTONE_INTERVAL: f32 = 100.0;
    /// Day/night theme flips at every multiple of this
    pub const DAY_NIGHT_THRESHOLD: f32 = 500.0;

    /// Cosmetic animation timers (delta-time driven, gameplay-irrelevant)
    pub const RUN_FRAME_INTERVAL_MS: f32 = 120.0;
    pub const WING_FRAME_INTERVAL_MS: f32 = 150.0;
    pub const BLINK_INTERVAL_MS: f32 = 3000.0;
    pub const BLINK_HOLD_MS: f32 = 100.0;

    /// Largest delta a single frame may contribute (stall protection)
    pub const MAX_FRAME_DELTA_MS: f32 = 100.0;
}
