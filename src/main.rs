//! Sky Dodge entry point
//!
//! Loads settings, checks assets and runs the configured game in attract
//! mode: the autopilot plays at 60 Hz into a headless render surface,
//! restarting after each game over, until the frame budget is spent or an
//! exit is requested.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use sky_dodge::platform::{FixedStep, FrameInput, assets};
use sky_dodge::renderer::{DrawEntities, LogSurface, RenderSurface, build_frame};
use sky_dodge::sim::{Autopilot, DodgeState, Game, JumperState, Session, attract_input};
use sky_dodge::{GameKind, HighScore, Settings};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Sky Dodge (native) starting...");

    let settings_path = Path::new(Settings::FILE_NAME);
    let settings = Settings::load(settings_path);
    if !settings_path.exists() {
        if let Err(e) = settings.save(settings_path) {
            log::warn!("Could not write default settings: {}", e);
        }
    }

    if let Some(dir) = &settings.asset_dir {
        assets::verify(dir, settings.game)?;
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Running {} with seed {}", settings.game.as_str(), seed);

    let high_score = HighScore::load(settings.high_score_path());
    match settings.game {
        GameKind::Jumper => {
            let game = JumperState::new(seed, settings.jumper.clone());
            run(Session::new(game, high_score), settings.demo_frames);
        }
        GameKind::Dodge => {
            let game = DodgeState::new(seed, settings.dodge.clone());
            run(Session::new(game, high_score), settings.demo_frames);
        }
    }
    Ok(())
}

/// Fixed-rate frame loop: poll input, tick, render, present
fn run<G>(mut session: Session<G>, frames: u32)
where
    G: Game + Autopilot + DrawEntities,
{
    let mut clock = FixedStep::default();
    let mut surface = LogSurface::new(60);
    let mut input = FrameInput::default();
    let mut last = Instant::now();
    let frame_time = Duration::from_secs_f32(clock.step());
    let mut ticks = 0u32;

    while ticks < frames && !session.quit_requested() {
        let now = Instant::now();
        let delta = now.duration_since(last).as_secs_f32();
        last = now;

        for _ in 0..clock.advance(delta) {
            input = attract_input(&session);
            session.tick(&input, clock.step());
            // Clear one-shot inputs after processing
            input.clear_edges();
            ticks += 1;
        }

        surface.present(&build_frame(&session, &input));

        let spent = now.elapsed();
        if spent < frame_time {
            std::thread::sleep(frame_time - spent);
        }
    }

    log::info!(
        "Attract mode finished after {} ticks ({} frames presented), high score {}",
        ticks,
        surface.frames(),
        session.high_score()
    );
}
