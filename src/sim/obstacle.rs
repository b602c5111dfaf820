//! Obstacles and the spawn director
//!
//! Two obstacle variants share all bookkeeping except the per-tick update and
//! hitbox padding, so they are a tagged enum rather than separate types. The
//! director accumulates travel distance and spawns one obstacle each time the
//! distance crosses a randomized threshold that tightens as the score grows,
//! floored at `MIN_OBSTACLE_SPACING` so back-to-back spawns stay fair.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ground obstacle with randomized dimensions
    Cactus,
    /// Flying obstacle at one of two fixed altitudes
    Pterodactyl {
        /// Wing animation frame (0 or 1), cosmetic
        wing_frame: u8,
    },
}

/// A scrolling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
    #[serde(skip)]
    wing_timer_ms: f32,
}

impl Obstacle {
    /// Ground-aligned cactus at `x`
    pub fn cactus(x: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, GROUND_Y - height),
            width,
            height,
            kind: ObstacleKind::Cactus,
            wing_timer_ms: 0.0,
        }
    }

    /// Pterodactyl flying at `altitude`
    pub fn pterodactyl(x: f32, altitude: f32) -> Self {
        Self {
            pos: Vec2::new(x, altitude),
            width: PTERODACTYL_WIDTH,
            height: PTERODACTYL_HEIGHT,
            kind: ObstacleKind::Pterodactyl { wing_frame: 0 },
            wing_timer_ms: 0.0,
        }
    }

    /// Scroll left one tick; pterodactyls also flap
    pub fn advance(&mut self, speed: f32, delta_ms: f32) {
        self.pos.x -= speed;

        if let ObstacleKind::Pterodactyl { ref mut wing_frame } = self.kind {
            self.wing_timer_ms += delta_ms;
            if self.wing_timer_ms >= WING_FRAME_INTERVAL_MS {
                *wing_frame = (*wing_frame + 1) % 2;
                self.wing_timer_ms = 0.0;
            }
        }
    }

    /// Collision bounds, inset per variant
    pub fn bounds(&self) -> Rect {
        let padding = match self.kind {
            ObstacleKind::Cactus => CACTUS_HITBOX_INSET,
            ObstacleKind::Pterodactyl { .. } => PTERODACTYL_HITBOX_INSET,
        };
        Rect::new(self.pos.x, self.pos.y, self.width, self.height).inset(padding)
    }

    /// Trailing edge past the left boundary of the field
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.width < 0.0
    }
}

/// Spawn timing, selection policy, and difficulty scaling
#[derive(Debug, Clone)]
pub struct ObstacleDirector {
    pub obstacles: Vec<Obstacle>,
    /// Travel distance accumulated since the last spawn
    distance_traveled: f32,
    /// Threshold at which the next obstacle spawns
    next_spawn_distance: f32,
    rng: Pcg32,
}

impl ObstacleDirector {
    pub fn new(seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            distance_traveled: 0.0,
            next_spawn_distance: MIN_OBSTACLE_SPACING,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Advance one tick: scroll and evict obstacles, spawn when the distance
    /// threshold is reached, then redraw the threshold for the next spawn.
    pub fn advance(&mut self, speed: f32, delta_ms: f32, score: f32) {
        self.distance_traveled += speed;

        for obstacle in &mut self.obstacles {
            obstacle.advance(speed, delta_ms);
        }
        self.obstacles.retain(|o| !o.is_off_screen());

        if self.distance_traveled >= self.next_spawn_distance {
            self.spawn(score);
            self.distance_traveled = 0.0;
            // Spacing tightens with score but never drops below the floor
            let spacing = (MAX_OBSTACLE_SPACING - score * SPACING_DECAY).max(MIN_OBSTACLE_SPACING);
            self.next_spawn_distance = spacing + self.rng.random_range(0.0..SPAWN_JITTER);
        }
    }

    fn spawn(&mut self, score: f32) {
        let spawn_x = FIELD_WIDTH + SPAWN_LOOKAHEAD;

        let can_spawn_pterodactyl = score > PTERODACTYL_SCORE_THRESHOLD;
        if can_spawn_pterodactyl && self.rng.random_bool(PTERODACTYL_CHANCE) {
            let altitude =
                PTERODACTYL_ALTITUDES[self.rng.random_range(0..PTERODACTYL_ALTITUDES.len())];
            self.obstacles.push(Obstacle::pterodactyl(spawn_x, altitude));
        } else {
            let width = self.rng.random_range(CACTUS_MIN_WIDTH..CACTUS_MAX_WIDTH);
            let height = self.rng.random_range(CACTUS_MIN_HEIGHT..CACTUS_MAX_HEIGHT);
            self.obstacles.push(Obstacle::cactus(spawn_x, width, height));
        }
    }

    /// Clear the obstacle set and restore initial spacing state. The RNG
    /// stream keeps rolling so restarted rounds differ.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.distance_traveled = 0.0;
        self.next_spawn_distance = MIN_OBSTACLE_SPACING;
    }

    /// Current spawn threshold (exposed for tests)
    pub fn next_spawn_distance(&self) -> f32 {
        self.next_spawn_distance
    }
}
