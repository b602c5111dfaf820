//! Per-frame simulation tick
//!
//! Advances the game state by one frame and returns the events that occurred,
//! in order. The caller supplies the elapsed-time delta in milliseconds;
//! physics and scoring integrate per tick, the delta only drives cosmetic
//! animation timers.

use super::collision::rects_overlap;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input intents for a single frame, edge-triggered
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
    pub duck_start: bool,
    pub duck_end: bool,
    pub pause_toggle: bool,
    /// Restart after game over
    pub restart: bool,
    /// The host lost focus/visibility; auto-pause, never auto-resume
    pub focus_lost: bool,
}

impl TickInput {
    /// Any intent that starts a round from the title state
    fn starts_game(&self) -> bool {
        self.jump || self.duck_start || self.pause_toggle || self.restart
    }
}

fn set_phase(state: &mut GameState, phase: GamePhase, events: &mut Vec<GameEvent>) {
    state.phase = phase;
    events.push(GameEvent::PhaseChanged(phase));
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: &TickInput, delta_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::NotStarted => {
            // The starting press is consumed by the transition
            if input.starts_game() {
                set_phase(state, GamePhase::Playing, &mut events);
            }
            return events;
        }
        GamePhase::Paused => {
            if input.pause_toggle {
                set_phase(state, GamePhase::Playing, &mut events);
            }
            return events;
        }
        GamePhase::GameOver => {
            if input.restart {
                let was_dark = state.is_dark;
                state.reset_round();
                events.push(GameEvent::ScoreChanged(0.0));
                if was_dark {
                    events.push(GameEvent::ThemeChanged(false));
                }
                set_phase(state, GamePhase::Playing, &mut events);
            }
            return events;
        }
        GamePhase::Playing => {}
    }

    if input.pause_toggle || input.focus_lost {
        set_phase(state, GamePhase::Paused, &mut events);
        return events;
    }

    // Gameplay intents; redundant or conflicting requests are no-ops
    if input.jump && state.player.jump() {
        events.push(GameEvent::Jumped);
    }
    if input.duck_start {
        state.player.duck();
    }
    if input.duck_end {
        state.player.stop_ducking();
    }

    state.player.advance(delta_ms);
    state
        .director
        .advance(state.game_speed, delta_ms, state.score);

    // Score accrues with speed, so the rate scales with difficulty
    state.score += state.game_speed * SCORE_RATE;
    events.push(GameEvent::ScoreChanged(state.score));

    // Ease toward the score-derived target speed, never overshooting
    let tier = (state.score / SPEED_INCREASE_INTERVAL).floor();
    let target_speed = (INITIAL_SPEED + tier * SPEED_INCREMENT).min(MAX_SPEED);
    if state.game_speed < target_speed {
        state.game_speed = (state.game_speed + SPEED_EASE_STEP).min(target_speed);
    }

    // Milestone chime, edge-triggered on each interval crossing
    let milestone = (state.score / MILESTONE_INTERVAL).floor() as u32;
    if milestone > state.last_milestone {
        state.last_milestone = milestone;
        events.push(GameEvent::Milestone(milestone));
    }

    // Day/night alternates at every threshold crossing
    let should_be_dark = ((state.score / DAY_NIGHT_THRESHOLD).floor() as u64) % 2 == 1;
    if should_be_dark != state.is_dark {
        state.is_dark = should_be_dark;
        events.push(GameEvent::ThemeChanged(should_be_dark));
    }

    // Any single overlap ends the round
    let player_bounds = state.player.bounds();
    let hit = state
        .director
        .obstacles
        .iter()
        .any(|o| rects_overlap(&player_bounds, &o.bounds()));
    if hit {
        events.push(GameEvent::Collision);
        if state.score > state.high_score {
            state.high_score = state.score;
            events.push(GameEvent::HighScoreChanged(state.high_score));
        }
        log::info!("game over at score {:.0}", state.score);
        set_phase(state, GamePhase::GameOver, &mut events);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;
    use proptest::prelude::*;

    const DT: f32 = 16.0;

    fn started_state() -> GameState {
        let mut state = GameState::new(12345, 0.0);
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    /// A cactus parked on top of the player
    fn colliding_obstacle() -> Obstacle {
        Obstacle::cactus(PLAYER_X, 40.0, 50.0)
    }

    #[test]
    fn test_first_input_starts_game() {
        let mut state = GameState::new(1, 0.0);
        assert_eq!(state.phase, GamePhase::NotStarted);

        // No input, no transition
        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::NotStarted);

        let events = tick(
            &mut state,
            &TickInput {
                duck_start: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(events, vec![GameEvent::PhaseChanged(GamePhase::Playing)]);
        // The starting press did not also duck
        assert!(!state.player.is_ducking);
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let mut state = started_state();
        let toggle = TickInput {
            pause_toggle: true,
            ..Default::default()
        };

        let score_at_pause = state.score;
        tick(&mut state, &toggle, DT);
        assert_eq!(state.phase, GamePhase::Paused);

        // Paused frames simulate nothing
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score, score_at_pause);

        tick(&mut state, &toggle, DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_focus_loss_auto_pauses_but_never_resumes() {
        let mut state = started_state();
        let blur = TickInput {
            focus_lost: true,
            ..Default::default()
        };
        tick(&mut state, &blur, DT);
        assert_eq!(state.phase, GamePhase::Paused);

        // Further focus noise while paused changes nothing
        tick(&mut state, &blur, DT);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_milestone_fires_exactly_once_per_crossing() {
        let mut state = started_state();
        state.score = 99.9;
        let events = tick(&mut state, &TickInput::default(), DT);
        let milestones: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Milestone(_)))
            .collect();
        assert_eq!(milestones.len(), 1);
        assert_eq!(*milestones[0], GameEvent::Milestone(1));

        // Sitting between thresholds fires nothing further
        state.score = 150.0;
        for _ in 0..50 {
            let events = tick(&mut state, &TickInput::default(), DT);
            assert!(!events.iter().any(|e| matches!(e, GameEvent::Milestone(_))));
        }

        // ...until the next threshold
        state.score = 199.9;
        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(events.contains(&GameEvent::Milestone(2)));
    }

    #[test]
    fn test_day_night_alternates_at_thresholds() {
        let mut state = started_state();
        assert!(!state.is_dark);

        state.score = 499.0;
        tick(&mut state, &TickInput::default(), DT);
        assert!(!state.is_dark);

        state.score = 499.9;
        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(state.is_dark);
        assert!(events.contains(&GameEvent::ThemeChanged(true)));

        state.score = 999.9;
        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(!state.is_dark);
        assert!(events.contains(&GameEvent::ThemeChanged(false)));

        // No flip without a crossing
        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::ThemeChanged(_)))
        );
    }

    #[test]
    fn test_speed_eases_toward_target_without_overshoot() {
        let mut state = started_state();
        state.score = 400.0;
        let target = INITIAL_SPEED + SPEED_INCREMENT; // 2.15

        let mut prev = state.game_speed;
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), DT);
            assert!(state.game_speed >= prev);
            assert!(state.game_speed - prev <= SPEED_EASE_STEP + 1e-6);
            assert!(state.game_speed <= target + 1e-6);
            prev = state.game_speed;
        }
        assert!((state.game_speed - target).abs() < 1e-4);
    }

    #[test]
    fn test_speed_capped_at_max() {
        let mut state = started_state();
        state.score = 1_000_000.0;
        state.last_milestone = u32::MAX;
        for _ in 0..1000 {
            tick(&mut state, &TickInput::default(), DT);
            assert!(state.game_speed <= MAX_SPEED);
        }
        assert!((state.game_speed - MAX_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_collision_ends_round_and_commits_high_score() {
        let mut state = started_state();
        state.score = 42.0;
        state.director.obstacles.push(colliding_obstacle());

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::Collision));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::HighScoreChanged(_)))
        );
        assert!(state.high_score > 42.0);

        // Frozen: further ticks simulate nothing and ignore gameplay input
        let score = state.score;
        let events = tick(
            &mut state,
            &TickInput {
                jump: true,
                duck_start: true,
                pause_toggle: true,
                ..Default::default()
            },
            DT,
        );
        assert!(events.is_empty());
        assert_eq!(state.score, score);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_no_high_score_event_when_not_beaten() {
        let mut state = GameState::new(7, 1000.0);
        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
            DT,
        );
        state.director.obstacles.push(colliding_obstacle());
        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::HighScoreChanged(_)))
        );
        assert_eq!(state.high_score, 1000.0);
    }

    #[test]
    fn test_restart_resets_round_but_preserves_high_score() {
        let mut state = started_state();
        state.score = 700.0;
        state.is_dark = true;
        state.director.obstacles.push(colliding_obstacle());
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        let committed = state.high_score;

        let events = tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.game_speed, INITIAL_SPEED);
        assert!(state.director.obstacles.is_empty());
        assert!(!state.is_dark);
        assert_eq!(state.high_score, committed);
        assert!(events.contains(&GameEvent::ScoreChanged(0.0)));
        assert!(events.contains(&GameEvent::ThemeChanged(false)));
        assert!(events.contains(&GameEvent::PhaseChanged(GamePhase::Playing)));
    }

    #[test]
    fn test_jump_emits_event_only_when_launched() {
        let mut state = started_state();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let events = tick(&mut state, &jump, DT);
        assert!(events.contains(&GameEvent::Jumped));

        // Still airborne: the repeat request is silent
        let events = tick(&mut state, &jump, DT);
        assert!(!events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999, 0.0);
        let mut b = GameState::new(99999, 0.0);
        let start = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut a, &start, DT);
        tick(&mut b, &start, DT);
        for i in 0..5000u32 {
            let input = TickInput {
                jump: i % 97 == 0,
                duck_start: i % 131 == 0,
                duck_end: i % 131 == 5,
                ..Default::default()
            };
            tick(&mut a, &input, DT);
            tick(&mut b, &input, DT);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.game_speed, b.game_speed);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.director.obstacles.len(), b.director.obstacles.len());
    }

    fn input_from_selector(sel: u8) -> TickInput {
        match sel {
            0 => TickInput {
                jump: true,
                ..Default::default()
            },
            1 => TickInput {
                duck_start: true,
                ..Default::default()
            },
            2 => TickInput {
                duck_end: true,
                ..Default::default()
            },
            // Conflicting intents in one frame
            3 => TickInput {
                jump: true,
                duck_start: true,
                ..Default::default()
            },
            4 => TickInput {
                duck_start: true,
                duck_end: true,
                ..Default::default()
            },
            _ => TickInput::default(),
        }
    }

    proptest! {
        #[test]
        fn prop_jump_and_duck_mutually_exclusive(sels in proptest::collection::vec(0u8..6, 1..500)) {
            let mut state = started_state();
            for sel in sels {
                tick(&mut state, &input_from_selector(sel), DT);
                prop_assert!(!(state.player.is_jumping && state.player.is_ducking));
            }
        }

        #[test]
        fn prop_score_and_speed_monotone_while_playing(sels in proptest::collection::vec(0u8..6, 1..500)) {
            let mut state = started_state();
            for sel in sels {
                let (score, speed, phase) = (state.score, state.game_speed, state.phase);
                tick(&mut state, &input_from_selector(sel), DT);
                if phase == GamePhase::Playing {
                    prop_assert!(state.score >= score);
                    prop_assert!(state.game_speed >= speed);
                }
                prop_assert!(state.game_speed <= MAX_SPEED);
            }
        }
    }
}
