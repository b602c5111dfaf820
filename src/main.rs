//! T-Rex Dash entry point
//!
//! Native builds run a headless demo round: a simple autopilot jumps over
//! cacti and ducks under low pterodactyls while the events stream to the log.
//! The real presentation layer drives the same core through `web::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    native_demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // wasm builds are driven through the `web` module bindings
}

#[cfg(not(target_arch = "wasm32"))]
mod native_demo {
    use trex_dash::audio::NullAudio;
    use trex_dash::consts::*;
    use trex_dash::game::Game;
    use trex_dash::persistence::MemoryStore;
    use trex_dash::sim::{GameEvent, GamePhase, GameState, ObstacleKind, TickInput};

    /// Frame cadence of the demo clock (~60 fps)
    const FRAME_MS: f64 = 16.0;
    /// Stop a runaway autopilot eventually
    const SCORE_CAP: f32 = 10_000.0;

    pub fn run() {
        let seed = std::env::args()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(2024);
        log::info!("demo round, seed {seed}");

        let mut game = Game::new(seed, MemoryStore::default(), NullAudio);
        let mut now_ms = 0.0;

        // First press starts the round
        let mut input = TickInput {
            jump: true,
            ..Default::default()
        };

        loop {
            let events = game.frame(now_ms, &input);
            for event in &events {
                match event {
                    GameEvent::Milestone(index) => {
                        log::info!("milestone {index} (score {:.0})", game.state.score)
                    }
                    GameEvent::ThemeChanged(dark) => {
                        log::info!("theme: {}", if *dark { "night" } else { "day" })
                    }
                    GameEvent::HighScoreChanged(high) => log::info!("new high score {high:.0}"),
                    _ => {}
                }
            }

            if game.state.phase == GamePhase::GameOver || game.state.score >= SCORE_CAP {
                break;
            }

            now_ms += FRAME_MS;
            input = autopilot(&game.state);
        }

        println!(
            "final score {:.0}, high score {:.0}, speed {:.2}",
            game.state.score, game.state.high_score, game.state.game_speed
        );
    }

    /// Minimal reflex bot: duck under a low pterodactyl, jump over anything
    /// else that gets close.
    fn autopilot(state: &GameState) -> TickInput {
        let player_front = PLAYER_X + PLAYER_WIDTH;

        // Nearest obstacle still ahead of the player
        let threat = state
            .director
            .obstacles
            .iter()
            .filter(|o| o.pos.x + o.width > PLAYER_X)
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

        let Some(obstacle) = threat else {
            return TickInput::default();
        };

        let gap = obstacle.pos.x - player_front;
        let duckable = matches!(obstacle.kind, ObstacleKind::Pterodactyl { .. })
            && obstacle.pos.y == PTERODACTYL_ALTITUDES[0];

        if duckable {
            // Hold the duck while the pterodactyl passes overhead
            if gap < state.game_speed * 40.0 {
                TickInput {
                    duck_start: true,
                    ..Default::default()
                }
            } else {
                TickInput {
                    duck_end: true,
                    ..Default::default()
                }
            }
        } else if gap > 0.0 && gap < state.game_speed * 25.0 {
            TickInput {
                jump: true,
                duck_end: true,
                ..Default::default()
            }
        } else {
            TickInput::default()
        }
    }
}
