//! Frame clock and collaborator wiring
//!
//! `Game` wraps the pure simulation and owns its two collaborators: the
//! key-value store and the audio sink. Each display frame it converts the
//! host's clock into a delta (zero while paused, re-synced on resume so no
//! artificial elapsed time leaks across a pause), runs one tick, and forwards
//! the emitted events to the collaborators.

use crate::audio::AudioSink;
use crate::consts::MAX_FRAME_DELTA_MS;
use crate::persistence::{HIGH_SCORE_KEY, KeyValueStore, MUTED_KEY, load_high_score, load_muted};
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, tick};

/// The simulation plus its frame clock and collaborators
pub struct Game<S: KeyValueStore, A: AudioSink> {
    pub state: GameState,
    store: S,
    audio: A,
    muted: bool,
    last_time_ms: Option<f64>,
}

impl<S: KeyValueStore, A: AudioSink> Game<S, A> {
    /// Create a game, loading the high score and mute preference from the
    /// store (defaults when absent or unreadable).
    pub fn new(seed: u64, store: S, audio: A) -> Self {
        let high_score = load_high_score(&store);
        let muted = load_muted(&store);
        log::info!("starting with high score {high_score:.0}, muted: {muted}");
        Self {
            state: GameState::new(seed, high_score),
            store,
            audio,
            muted,
            last_time_ms: None,
        }
    }

    /// Drive one display frame. `now_ms` is the host's monotonic clock.
    pub fn frame(&mut self, now_ms: f64, input: &TickInput) -> Vec<GameEvent> {
        // While paused the delta is forced to zero; the reference keeps
        // following the clock, so resuming sees one ordinary frame instead of
        // the whole pause as elapsed time.
        let delta_ms = match self.last_time_ms {
            Some(last) if self.state.phase != GamePhase::Paused => {
                ((now_ms - last) as f32).clamp(0.0, MAX_FRAME_DELTA_MS)
            }
            _ => 0.0,
        };
        self.last_time_ms = Some(now_ms);

        let events = tick(&mut self.state, input, delta_ms);
        self.dispatch(&events);
        events
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::HighScoreChanged(high_score) => {
                    self.store.set(HIGH_SCORE_KEY, &high_score.to_string());
                }
                GameEvent::Jumped if !self.muted => self.audio.on_jump(),
                GameEvent::Milestone(_) if !self.muted => self.audio.on_milestone(),
                GameEvent::Collision if !self.muted => self.audio.on_collision(),
                _ => {}
            }
        }
    }

    /// Flip the mute preference and persist it immediately
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.store
            .set(MUTED_KEY, if self.muted { "true" } else { "false" });
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioSink;
    use crate::consts::*;
    use crate::persistence::MemoryStore;
    use crate::sim::Obstacle;

    #[derive(Debug, Default)]
    struct RecordingAudio {
        jumps: u32,
        milestones: u32,
        collisions: u32,
    }

    impl AudioSink for RecordingAudio {
        fn on_jump(&mut self) {
            self.jumps += 1;
        }
        fn on_milestone(&mut self) {
            self.milestones += 1;
        }
        fn on_collision(&mut self) {
            self.collisions += 1;
        }
    }

    fn start_input() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_loads_high_score_from_store() {
        let mut store = MemoryStore::default();
        store.set(HIGH_SCORE_KEY, "750");
        let game = Game::new(1, store, RecordingAudio::default());
        assert_eq!(game.state.high_score, 750.0);
    }

    #[test]
    fn test_malformed_stored_score_defaults_to_zero() {
        let mut store = MemoryStore::default();
        store.set(HIGH_SCORE_KEY, "garbage");
        let game = Game::new(1, store, RecordingAudio::default());
        assert_eq!(game.state.high_score, 0.0);
    }

    #[test]
    fn test_game_over_persists_high_score() {
        let mut game = Game::new(1, MemoryStore::default(), RecordingAudio::default());
        game.frame(0.0, &start_input());
        game.state.score = 321.0;
        game.state
            .director
            .obstacles
            .push(Obstacle::cactus(PLAYER_X, 40.0, 50.0));
        game.frame(16.0, &TickInput::default());

        assert_eq!(game.state.phase, GamePhase::GameOver);
        let stored = load_high_score(game.store());
        assert!(stored > 321.0);
        assert_eq!(game.audio.collisions, 1);
    }

    #[test]
    fn test_audio_triggers_forwarded() {
        let mut game = Game::new(1, MemoryStore::default(), RecordingAudio::default());
        game.frame(0.0, &start_input());
        // The starting press is consumed; this one actually jumps
        game.frame(16.0, &start_input());
        assert_eq!(game.audio.jumps, 1);
    }

    #[test]
    fn test_muted_game_stays_silent() {
        let mut store = MemoryStore::default();
        store.set(MUTED_KEY, "true");
        let mut game = Game::new(1, store, RecordingAudio::default());
        assert!(game.is_muted());

        game.frame(0.0, &start_input());
        game.frame(16.0, &start_input());
        assert_eq!(game.audio.jumps, 0);
    }

    #[test]
    fn test_toggle_mute_persists() {
        let mut game = Game::new(1, MemoryStore::default(), RecordingAudio::default());
        assert!(game.toggle_mute());
        assert_eq!(game.store().get(MUTED_KEY).as_deref(), Some("true"));
        assert!(!game.toggle_mute());
        assert_eq!(game.store().get(MUTED_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_pause_freezes_clock_without_resume_spike() {
        let mut game = Game::new(1, MemoryStore::default(), RecordingAudio::default());
        game.frame(0.0, &start_input());
        game.frame(16.0, &TickInput::default());

        let pause = TickInput {
            pause_toggle: true,
            ..Default::default()
        };
        game.frame(32.0, &pause);
        assert_eq!(game.state.phase, GamePhase::Paused);
        let score = game.state.score;

        // A long wall-clock gap while paused
        game.frame(60_032.0, &TickInput::default());
        assert_eq!(game.state.score, score);

        // Resume; the run frame timer must not see the 60s gap as one delta
        game.frame(60_048.0, &pause);
        assert_eq!(game.state.phase, GamePhase::Playing);
        game.frame(60_064.0, &TickInput::default());
        assert!(game.state.score > score);
    }

    #[test]
    fn test_frame_delta_clamped() {
        let mut game = Game::new(1, MemoryStore::default(), RecordingAudio::default());
        game.frame(0.0, &start_input());
        // A stalled host hands us a giant delta; the tick still runs once
        let events = game.frame(10_000.0, &TickInput::default());
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::ScoreChanged(_)))
        );
    }
}
