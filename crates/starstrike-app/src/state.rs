//! Application state shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use starstrike_core::commands::{ActionSet, PlayerCommand};
use starstrike_core::state::GameStateSnapshot;

use crate::config::AppConfig;
use crate::game_loop;

/// Latest snapshot slot, written by the loop thread after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A session command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Replace the held flight actions for subsequent frames.
    Actions(ActionSet),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that does not exist before `start`
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the loop thread)
pub struct AppState {
    /// Channel to the game loop thread. `None` before `start`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: SharedSnapshot,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop. Fails if it is already running or the thread
    /// cannot be created.
    pub fn start(&self, config: AppConfig) -> anyhow::Result<JoinHandle<()>> {
        let mut running = self
            .running
            .lock()
            .map_err(|_| anyhow::anyhow!("app state lock poisoned"))?;
        if *running {
            anyhow::bail!("game loop already running");
        }

        let (tx, handle) = game_loop::spawn_game_loop(config, Arc::clone(&self.latest_snapshot))?;
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = Some(tx);
        }
        *running = true;
        Ok(handle)
    }

    /// Forward a command to the loop. Returns false if the loop is not
    /// running or has already exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(slot) => slot
                .as_ref()
                .is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    /// Ask the loop to stop and forget its channel.
    pub fn shutdown(&self) {
        self.send(GameLoopCommand::Shutdown);
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = None;
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_send_before_start_is_rejected() {
        let state = AppState::new();
        assert!(!state.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)));
    }

    #[test]
    fn test_double_start_is_rejected() {
        let state = AppState::new();
        let handle = state.start(AppConfig::default()).unwrap();
        assert!(state.start(AppConfig::default()).is_err());

        state.shutdown();
        handle.join().unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(!state.send(GameLoopCommand::Shutdown));
    }
}
