//! Headless presentation that narrates the scene through `log`.
//!
//! Spawns, removals, sounds and overlays go to the log; per-tick transform
//! and HUD traffic is only counted. Enough to watch a session from a
//! terminal with `RUST_LOG=debug`.

use std::collections::HashMap;

use starstrike_core::enums::{HudField, Overlay, SoundCue, VisualKind};
use starstrike_core::types::{Transform, VisualHandle};
use starstrike_sim::{EffectFrame, Presentation};

#[derive(Debug, Default)]
pub struct LogPresentation {
    next_handle: u64,
    live: HashMap<VisualHandle, VisualKind>,
    hud: HashMap<HudField, f64>,
    overlay: Option<Overlay>,
    /// Transform and effect updates received since creation.
    pub updates: u64,
}

impl LogPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visuals spawned and not yet removed.
    pub fn live_visuals(&self) -> usize {
        self.live.len()
    }

    /// Last value pushed for a HUD field.
    pub fn hud(&self, field: HudField) -> Option<f64> {
        self.hud.get(&field).copied()
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }
}

impl Presentation for LogPresentation {
    fn spawn_visual(&mut self, kind: VisualKind, transform: &Transform) -> VisualHandle {
        self.next_handle += 1;
        let handle = VisualHandle(self.next_handle);
        log::debug!(
            "spawn {:?} #{} at ({:.1}, {:.1}, {:.1})",
            kind,
            handle.0,
            transform.position.x,
            transform.position.y,
            transform.position.z
        );
        self.live.insert(handle, kind);
        handle
    }

    fn update_visual(&mut self, _handle: VisualHandle, _transform: &Transform) {
        self.updates += 1;
    }

    fn remove_visual(&mut self, handle: VisualHandle) {
        match self.live.remove(&handle) {
            Some(kind) => log::debug!("remove {:?} #{}", kind, handle.0),
            None => log::warn!("remove of unknown visual #{}", handle.0),
        }
    }

    fn set_visible(&mut self, handle: VisualHandle, visible: bool) {
        log::debug!("visual #{} visible={}", handle.0, visible);
    }

    fn update_effect(&mut self, _handle: VisualHandle, _frame: &EffectFrame<'_>) {
        self.updates += 1;
    }

    fn play_sound(&mut self, cue: SoundCue) {
        log::debug!("play {cue:?}");
    }

    fn stop_sound(&mut self, cue: SoundCue) {
        log::debug!("stop {cue:?}");
    }

    fn update_hud(&mut self, field: HudField, value: f64) {
        self.hud.insert(field, value);
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        log::info!("overlay: {overlay:?}");
        self.overlay = Some(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use starstrike_core::commands::{FrameInput, PlayerCommand};
    use starstrike_sim::{SimConfig, SimulationEngine};

    #[test]
    fn test_tracks_live_visuals_through_a_session() {
        let mut engine =
            SimulationEngine::with_presentation(SimConfig::default(), LogPresentation::new());

        engine.tick(FrameInput::default());
        assert_eq!(engine.presentation().overlay(), Some(Overlay::StartScreen));
        // Player and target exist from the first frame.
        assert_eq!(engine.presentation().live_visuals(), 2);

        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(FrameInput::default());
        assert_eq!(engine.presentation().overlay(), Some(Overlay::None));
        assert_eq!(engine.presentation().hud(HudField::PlayerIntegrityPercent), Some(100.0));
        assert!(engine.presentation().updates > 0);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut p = LogPresentation::new();
        let t = Transform::at(DVec3::ZERO);
        let a = p.spawn_visual(VisualKind::EnemyFighter, &t);
        let b = p.spawn_visual(VisualKind::PlayerLaser, &t);
        assert_ne!(a, b);
        p.remove_visual(a);
        assert_eq!(p.live_visuals(), 1);
    }
}
