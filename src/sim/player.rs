//! The runner entity
//!
//! Fixed horizontal position; only the vertical axis simulates. Jumping and
//! ducking are mutually exclusive: a duck request while airborne is ignored,
//! and a jump request while ducking is ignored. Redundant requests are no-ops,
//! never queued.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes after construction
    pub pos: Vec2,
    pub width: f32,
    /// Current height (shrinks while ducking)
    pub height: f32,
    /// Vertical velocity, negative is up
    pub velocity_y: f32,
    pub is_jumping: bool,
    pub is_ducking: bool,
    /// Run-cycle frame (0 or 1), cosmetic
    pub run_frame: u8,
    /// Blink flag, cosmetic
    pub is_blinking: bool,
    frame_timer_ms: f32,
    blink_timer_ms: f32,
    blink_hold_ms: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a player standing on the ground line
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y - PLAYER_HEIGHT),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            velocity_y: 0.0,
            is_jumping: false,
            is_ducking: false,
            run_frame: 0,
            is_blinking: false,
            frame_timer_ms: 0.0,
            blink_timer_ms: 0.0,
            blink_hold_ms: 0.0,
        }
    }

    /// Request a jump. Returns true if the jump actually started, so the
    /// caller can emit the jump event.
    pub fn jump(&mut self) -> bool {
        if !self.is_jumping && !self.is_ducking {
            self.velocity_y = JUMP_VELOCITY;
            self.is_jumping = true;
            true
        } else {
            false
        }
    }

    /// Enter the ducking pose. Ignored while airborne.
    pub fn duck(&mut self) {
        if !self.is_jumping {
            self.is_ducking = true;
            self.height = PLAYER_DUCK_HEIGHT;
            self.pos.y = GROUND_Y - PLAYER_DUCK_HEIGHT;
        }
    }

    /// Leave the ducking pose. A release that never had a matching duck
    /// (e.g. the duck was requested mid-air) is a no-op.
    pub fn stop_ducking(&mut self) {
        if self.is_ducking && !self.is_jumping {
            self.is_ducking = false;
            self.height = PLAYER_HEIGHT;
            self.pos.y = GROUND_Y - PLAYER_HEIGHT;
        }
    }

    /// Advance one tick. Gravity integrates per tick; `delta_ms` drives only
    /// the run and blink timers.
    pub fn advance(&mut self, delta_ms: f32) {
        if self.is_jumping {
            self.velocity_y = (self.velocity_y + GRAVITY).min(MAX_FALL_SPEED);
            self.pos.y += self.velocity_y;

            // Land on the ground line
            if self.pos.y >= GROUND_Y - self.height {
                self.pos.y = GROUND_Y - self.height;
                self.is_jumping = false;
                self.velocity_y = 0.0;
            }
        }

        self.frame_timer_ms += delta_ms;
        if self.frame_timer_ms >= RUN_FRAME_INTERVAL_MS {
            self.run_frame = (self.run_frame + 1) % 2;
            self.frame_timer_ms = 0.0;
        }

        if self.is_blinking {
            self.blink_hold_ms -= delta_ms;
            if self.blink_hold_ms <= 0.0 {
                self.is_blinking = false;
            }
        }
        self.blink_timer_ms += delta_ms;
        if self.blink_timer_ms >= BLINK_INTERVAL_MS {
            self.is_blinking = true;
            self.blink_hold_ms = BLINK_HOLD_MS;
            self.blink_timer_ms = 0.0;
        }
    }

    /// Collision bounds, inset from the sprite on all sides
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height).inset(PLAYER_HITBOX_INSET)
    }
}
