//! The whole sequencer as one explicit value.
//!
//! `SequencerState` owns the actors, the trail and the gate; the frame
//! loop constructs one at startup and calls [`SequencerState::advance`]
//! once per frame with a single shared clock reading. No hidden
//! globals, so tests can build a state, drive it and assert on it
//! without any rendering context.

use glam::{Mat4, Vec2, Vec3};

use super::actor::{actor_specs, Actor};
use super::constants::{ACTOR_COUNT, STATIC_QUADS};
use super::gate::{CompletionGate, GatePhase};
use super::trail::TrailRecorder;

#[derive(Clone, Debug, PartialEq)]
pub struct SequencerState {
    pub actors: [Actor; ACTOR_COUNT],
    pub trail: TrailRecorder,
    pub gate: CompletionGate,
}

/// Flat square to draw: world position plus Z rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadInstance {
    pub position: Vec2,
    pub angle: f32,
}

impl QuadInstance {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.position.x, self.position.y, 0.0))
            * Mat4::from_rotation_z(self.angle)
    }
}

/// Everything the renderer needs for one frame, in draw order.
pub struct DrawList {
    /// Six static letter cells first, then the trail in insertion order.
    pub quads: Vec<QuadInstance>,
    /// One world transform per actor, id order, frozen actors included.
    pub blocks: Vec<Mat4>,
}

impl SequencerState {
    pub fn new() -> Self {
        let specs = actor_specs();
        Self {
            actors: std::array::from_fn(|id| Actor::from_spec(id, &specs[id])),
            trail: TrailRecorder::new(),
            gate: CompletionGate::new(),
        }
    }

    /// Advances the scene by one frame. Every actor observes the same
    /// `now_ms`; updating them against independent clock reads would
    /// desynchronize spin and trail-phase math.
    pub fn advance(&mut self, now_ms: f64, delta_ms: f64) {
        for actor in self.actors.iter_mut() {
            if let Some(entry) = actor.advance(now_ms, delta_ms) {
                self.trail.record(entry);
            }
        }
        let was_holding = self.gate.phase() == GatePhase::Holding;
        let all_complete = CompletionGate::all_complete(&self.actors);
        if all_complete && !was_holding {
            log::info!("all {ACTOR_COUNT} actors complete, holding before reset");
        }
        if self.gate.update(all_complete, now_ms) {
            log::info!("hold expired, resetting scene");
            self.reset();
        }
    }

    /// Restores every actor to its scripted start, clears the trail and
    /// the gate. Runs in the same frame the hold expires.
    pub fn reset(&mut self) {
        let specs = actor_specs();
        self.actors = std::array::from_fn(|id| Actor::from_spec(id, &specs[id]));
        self.trail.clear();
        self.gate.clear();
    }

    pub fn draw_list(&self) -> DrawList {
        let mut quads = Vec::with_capacity(STATIC_QUADS.len() + self.trail.len());
        quads.extend(STATIC_QUADS.iter().map(|&position| QuadInstance {
            position,
            angle: 0.0,
        }));
        quads.extend(self.trail.iter().map(|e| QuadInstance {
            position: e.position,
            angle: e.angle,
        }));
        let blocks = self.actors.iter().map(Actor::transform).collect();
        DrawList { quads, blocks }
    }
}

impl Default for SequencerState {
    fn default() -> Self {
        Self::new()
    }
}
