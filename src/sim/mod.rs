//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//! - Side effects leave as `GameEvent`s returned from `tick`
//!
//! Physics integrates per tick; the elapsed-time delta feeds only the
//! cosmetic animation timers.

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use obstacle::{Obstacle, ObstacleDirector, ObstacleKind};
pub use player::Player;
pub use state::{GameEvent, GamePhase, GameState, ObstacleView, PlayerView, Snapshot};
pub use tick::{TickInput, tick};
