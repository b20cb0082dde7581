//! Presentation adapter interface.
//!
//! The host implements [`Presentation`] to render entities, play sounds and
//! drive the HUD. The simulation calls into it once per tick from the
//! presentation sync system and never reads anything back except the visual
//! handles it is given.

use glam::DVec3;

use starstrike_core::components::Particle;
use starstrike_core::enums::{HudField, Overlay, SoundCue, VisualKind};
use starstrike_core::types::{Transform, VisualHandle};

/// Per-tick render state of a particle effect.
#[derive(Debug, Clone, Copy)]
pub struct EffectFrame<'a> {
    pub origin: DVec3,
    /// Particle offsets relative to `origin`.
    pub particles: &'a [Particle],
    pub opacity: f64,
    pub light_intensity: f64,
}

/// Host-side rendering, audio and HUD surface.
pub trait Presentation {
    /// Create a visual for a new entity and return its handle.
    fn spawn_visual(&mut self, kind: VisualKind, transform: &Transform) -> VisualHandle;

    fn update_visual(&mut self, handle: VisualHandle, transform: &Transform);

    fn remove_visual(&mut self, handle: VisualHandle);

    fn set_visible(&mut self, handle: VisualHandle, visible: bool);

    fn update_effect(&mut self, handle: VisualHandle, frame: &EffectFrame<'_>);

    fn play_sound(&mut self, cue: SoundCue);

    fn stop_sound(&mut self, cue: SoundCue);

    fn update_hud(&mut self, field: HudField, value: f64);

    /// Switch the full-screen overlay. Only called when it changes.
    fn show_overlay(&mut self, overlay: Overlay);
}

/// Headless presentation: hands out unique handles and discards the rest.
#[derive(Debug, Default)]
pub struct NullPresentation {
    next_handle: u64,
}

impl Presentation for NullPresentation {
    fn spawn_visual(&mut self, _kind: VisualKind, _transform: &Transform) -> VisualHandle {
        self.next_handle += 1;
        VisualHandle(self.next_handle)
    }

    fn update_visual(&mut self, _handle: VisualHandle, _transform: &Transform) {}

    fn remove_visual(&mut self, _handle: VisualHandle) {}

    fn set_visible(&mut self, _handle: VisualHandle, _visible: bool) {}

    fn update_effect(&mut self, _handle: VisualHandle, _frame: &EffectFrame<'_>) {}

    fn play_sound(&mut self, _cue: SoundCue) {}

    fn stop_sound(&mut self, _cue: SoundCue) {}

    fn update_hud(&mut self, _field: HudField, _value: f64) {}

    fn show_overlay(&mut self, _overlay: Overlay) {}
}
