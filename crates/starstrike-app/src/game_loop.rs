//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc` channel; snapshots are stored in
//! shared state for polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use starstrike_core::commands::{ActionSet, FrameInput};
use starstrike_core::constants::{FRAME_MS, TICK_RATE};
use starstrike_core::state::GameStateSnapshot;
use starstrike_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::presentation::LogPresentation;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("starstrike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let time_scale = config.time_scale;
    let mut engine = SimulationEngine::with_presentation(config.sim, LogPresentation::new());
    let mut actions = ActionSet::default();
    let mut next_tick_time = Instant::now();

    log::info!("game loop started ({}Hz, x{time_scale})", TICK_RATE);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Actions(held)) => actions = held,
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("game loop stopped after {} ticks", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one nominal frame; pacing never changes simulated time
        let snapshot = engine.tick(FrameInput {
            actions,
            dt_ms: FRAME_MS,
        });

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = tick_interval(time_scale);
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Wall-clock spacing between ticks at the given pacing multiplier.
pub fn tick_interval(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starstrike_core::commands::PlayerCommand;
    use starstrike_core::enums::GamePhase;
    use starstrike_sim::SimConfig;
    use std::sync::Arc;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Actions(ActionSet {
            fire: true,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Actions(a) if a.fire));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);

        let firing = FrameInput::with_actions(ActionSet {
            fire: true,
            ..Default::default()
        });
        for _ in 0..100 {
            engine.tick(firing);
        }

        let snapshot = engine.tick(firing);
        assert!(!snapshot.projectiles.is_empty());
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(10),
            "Snapshot serialization took {:?}, should be <10ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_thread_runs_commands_and_stops() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let config = AppConfig {
            time_scale: 16.0,
            ..Default::default()
        };
        let (tx, handle) = spawn_game_loop(config, Arc::clone(&latest)).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut phase = GamePhase::Start;
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                phase = snap.phase;
            }
            if phase == GamePhase::Play {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(phase, GamePhase::Play);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_dropped_sender_stops_loop() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(AppConfig::default(), latest).unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
        assert!(tick_interval(2.0) < TICK_DURATION);
        assert_eq!(tick_interval(0.0), TICK_DURATION);
    }
}
