use anyhow::Context;

use starstrike_app::autopilot::Autopilot;
use starstrike_app::config::AppConfig;
use starstrike_app::game_loop;
use starstrike_app::state::{AppState, GameLoopCommand};

/// Sessions the scripted pilot plays before the host exits.
const SESSIONS: u32 = 3;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let poll = game_loop::tick_interval(config.time_scale);

    let state = AppState::new();
    let handle = state.start(config).context("starting game loop")?;

    let mut pilot = Autopilot::new(SESSIONS);
    let mut last_tick = None;
    while !pilot.is_finished() {
        std::thread::sleep(poll);
        let Some(snapshot) = state.snapshot() else {
            continue;
        };
        if last_tick == Some(snapshot.time.tick) {
            continue;
        }
        last_tick = Some(snapshot.time.tick);

        let decision = pilot.decide(&snapshot);
        if let Some(command) = decision.command {
            state.send(GameLoopCommand::PlayerCommand(command));
        }
        if !state.send(GameLoopCommand::Actions(decision.actions)) {
            anyhow::bail!("game loop exited unexpectedly");
        }
    }

    if let Some(snapshot) = state.snapshot() {
        log::info!(
            "final session: {:?}, score {:?}",
            snapshot.phase,
            snapshot.score
        );
    }

    state.shutdown();
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    Ok(())
}
