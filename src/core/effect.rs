use super::constants::{BURST_SIZE, HUE_STEP, HUE_WRAP};
use super::particle::Particle;
use super::surface::DrawSurface;
use glam::Vec2;
use rand::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// Owner of all live particles plus the rotating hue counter.
///
/// The pointer cell is shared with the input layer, which is its only
/// writer; the effect only reads it at spawn time. Everything runs on one
/// logical thread (browser main thread), so a plain `Rc<Cell<_>>` is the
/// whole synchronization story.
pub struct Effect {
    pub particles: Vec<Particle>,
    pub hue: u16,
    pointer: Rc<Cell<Vec2>>,
    rng: StdRng,
}

impl Effect {
    pub fn new(pointer: Rc<Cell<Vec2>>, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            hue: 0,
            pointer,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Snapshot the pointer and current hue, then append [`BURST_SIZE`]
    /// particles sharing them. Velocity and radius are randomized per
    /// particle. Nothing caps the total count under sustained spawning.
    pub fn spawn_burst(&mut self) {
        let pos = self.pointer.get();
        for _ in 0..BURST_SIZE {
            self.particles
                .push(Particle::new(&mut self.rng, pos, self.hue));
        }
    }

    /// One frame: rotate the hue, prune the dead, advance (and draw) the
    /// rest.
    ///
    /// The hue advances every frame whether or not anything spawned, so
    /// bursts born close together fan out across the color wheel. Pruning
    /// is a single pass that preserves the relative order of survivors.
    pub fn advance_frame<S: DrawSurface>(&mut self, surface: &mut S) {
        self.hue = (self.hue + HUE_STEP) % HUE_WRAP;
        self.particles.retain(Particle::is_alive);
        for p in &mut self.particles {
            p.advance(surface);
        }
    }
}
