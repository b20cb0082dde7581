//! Shared helpers for integration tests: a presentation adapter that records
//! every call, and scripted-engine shortcuts.

#![allow(dead_code)]

use glam::DVec3;

use starstrike_core::commands::FrameInput;
use starstrike_core::constants::TARGET_POSITION;
use starstrike_core::enums::*;
use starstrike_core::types::{Transform, VisualHandle};
use starstrike_sim::{world_setup, EffectFrame, Presentation, SimConfig, SimulationEngine};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Spawn(VisualKind, VisualHandle),
    Update(VisualHandle),
    Remove(VisualHandle),
    Visible(VisualHandle, bool),
    Effect(VisualHandle, f64),
    Play(SoundCue),
    Stop(SoundCue),
    Hud(HudField, f64),
    Overlay(Overlay),
}

#[derive(Debug, Default)]
pub struct Recorder {
    next_handle: u64,
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn spawned(&self, kind: VisualKind) -> Vec<VisualHandle> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Spawn(k, h) if *k == kind => Some(*h),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn last_hud(&self, field: HudField) -> Option<f64> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Hud(f, v) if *f == field => Some(*v),
            _ => None,
        })
    }
}

impl Presentation for Recorder {
    fn spawn_visual(&mut self, kind: VisualKind, _transform: &Transform) -> VisualHandle {
        self.next_handle += 1;
        let handle = VisualHandle(self.next_handle);
        self.calls.push(Call::Spawn(kind, handle));
        handle
    }

    fn update_visual(&mut self, handle: VisualHandle, _transform: &Transform) {
        self.calls.push(Call::Update(handle));
    }

    fn remove_visual(&mut self, handle: VisualHandle) {
        self.calls.push(Call::Remove(handle));
    }

    fn set_visible(&mut self, handle: VisualHandle, visible: bool) {
        self.calls.push(Call::Visible(handle, visible));
    }

    fn update_effect(&mut self, handle: VisualHandle, frame: &EffectFrame<'_>) {
        self.calls.push(Call::Effect(handle, frame.opacity));
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.calls.push(Call::Play(cue));
    }

    fn stop_sound(&mut self, cue: SoundCue) {
        self.calls.push(Call::Stop(cue));
    }

    fn update_hud(&mut self, field: HudField, value: f64) {
        self.calls.push(Call::Hud(field, value));
    }

    fn show_overlay(&mut self, overlay: Overlay) {
        self.calls.push(Call::Overlay(overlay));
    }
}

pub fn recording_engine(seed: u64) -> SimulationEngine<Recorder> {
    SimulationEngine::with_presentation(
        SimConfig {
            seed,
            ..Default::default()
        },
        Recorder::default(),
    )
}

pub fn tick_n<P: Presentation>(engine: &mut SimulationEngine<P>, n: usize) {
    for _ in 0..n {
        engine.tick(FrameInput::default());
    }
}

/// Player bolts that strike the structure on the next tick.
pub fn inject_structure_hits<P: Presentation>(engine: &mut SimulationEngine<P>, n: usize) {
    for _ in 0..n {
        world_setup::spawn_projectile(
            engine.world_mut(),
            Owner::Player,
            TARGET_POSITION - DVec3::Z * 10.0,
            DVec3::Z,
        );
    }
}

/// Enemy bolts that strike the player on the next tick.
pub fn inject_player_hits<P: Presentation>(engine: &mut SimulationEngine<P>, n: usize) {
    let position = engine.player().transform.position;
    for _ in 0..n {
        world_setup::spawn_projectile(engine.world_mut(), Owner::Enemy, position - DVec3::Z, DVec3::Z);
    }
}

/// Put the player `distance` units short of the target on the approach axis.
pub fn place_player<P: Presentation>(engine: &mut SimulationEngine<P>, distance: f64) {
    engine.player_mut().transform.position = TARGET_POSITION - DVec3::Z * distance;
}
