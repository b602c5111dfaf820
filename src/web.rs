//! Browser-facing wrapper (WASM only)
//!
//! Thin `wasm_bindgen` surface for a JS presentation layer: intents are
//! queued between frames, `frame` runs one tick against the
//! `requestAnimationFrame` timestamp, and the render snapshot and event list
//! cross the boundary as JSON.

use wasm_bindgen::prelude::*;

use crate::audio::WebAudioSink;
use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::sim::TickInput;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A running game bound to LocalStorage and Web Audio
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore, WebAudioSink>,
    input: TickInput,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WebGame {
        WebGame {
            game: Game::new(seed, LocalStorageStore, WebAudioSink::new()),
            input: TickInput::default(),
        }
    }

    // Input intents, queued until the next frame

    pub fn jump(&mut self) {
        self.input.jump = true;
    }

    pub fn duck_start(&mut self) {
        self.input.duck_start = true;
    }

    pub fn duck_end(&mut self) {
        self.input.duck_end = true;
    }

    pub fn pause_toggle(&mut self) {
        self.input.pause_toggle = true;
    }

    pub fn restart(&mut self) {
        self.input.restart = true;
    }

    /// Call from a visibilitychange/blur handler
    pub fn focus_lost(&mut self) {
        self.input.focus_lost = true;
    }

    /// Advance one frame with the rAF timestamp. Returns the events that
    /// occurred as a JSON array; queued intents are consumed.
    pub fn frame(&mut self, now_ms: f64) -> String {
        let input = self.input;
        self.input = TickInput::default();
        let events = self.game.frame(now_ms, &input);
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Read-only render snapshot as JSON
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.game.toggle_mute()
    }

    pub fn is_muted(&self) -> bool {
        self.game.is_muted()
    }

    pub fn score(&self) -> f32 {
        self.game.state.score
    }

    pub fn high_score(&self) -> f32 {
        self.game.state.high_score
    }
}
