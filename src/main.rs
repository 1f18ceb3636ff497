//! Sky Hopper entry point
//!
//! Runs the simulation headless: the autopilot plays, the HUD is logged, and
//! the high score file is updated at each game over. Usage:
//!
//! ```text
//! sky-hopper [settings.json]
//! ```

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use sky_hopper::settings::DEFAULT_SETTINGS_PATH;
use sky_hopper::sim::GameEvent;
use sky_hopper::{Command, Game, HighScoreFile, Settings};

fn main() {
    env_logger::init();

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load_or_default(&settings_path);

    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!("Sky Hopper (headless) starting, seed {}", seed);

    let store = HighScoreFile::new(&settings.high_score_path);
    let mut game = Game::new(seed, settings.world(), store);
    game.set_autopilot(settings.autopilot);

    let mut restarts_left = settings.restarts;
    let mut runs = 1u32;

    for frame in 0..settings.max_frames {
        for event in game.update() {
            match event {
                GameEvent::TierUp { tier } => {
                    println!("Level {}!", tier.level());
                }
                GameEvent::GameOver { .. } => {
                    println!("{}", game.snapshot().hud_lines().join("\n"));
                }
                _ => {}
            }
        }

        if game.is_game_over() {
            if restarts_left == 0 {
                break;
            }
            restarts_left -= 1;
            runs += 1;
            game.press(Command::Restart);
            continue;
        }

        if settings.hud_interval > 0 && frame % settings.hud_interval == 0 {
            log::info!("{}", game.snapshot().hud_lines().join(" | "));
        }
    }

    let snapshot = game.snapshot();
    println!(
        "Finished after {} run(s): score {}, best {}",
        runs, snapshot.score, snapshot.high_score
    );
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
