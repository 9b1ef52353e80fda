// Host-side tests for the pure particle simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod surface {
        include!("../src/core/surface.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
}

use sim::constants::*;
use sim::particle::Particle;
use sim::surface::{DrawSurface, Hsla};
use glam::Vec2;
use rand::prelude::*;

/// Records every draw call so tests can assert on render side effects.
#[derive(Default)]
struct RecordingSurface {
    clears: Vec<(f32, f32, f32, f32)>,
    circles: Vec<(f32, f32, f32, Hsla)>,
}

impl DrawSurface for RecordingSurface {
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.clears.push((x, y, w, h));
    }
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Hsla) {
        self.circles.push((cx, cy, radius, color));
    }
}

fn make_particle(seed: u64) -> Particle {
    let mut rng = StdRng::seed_from_u64(seed);
    Particle::new(&mut rng, Vec2::new(100.0, 100.0), 10)
}

#[test]
fn construction_draws_speed_and_radius_from_stated_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let p = Particle::new(&mut rng, Vec2::ZERO, 0);
        assert!(p.vel.x >= SPEED_MIN && p.vel.x < SPEED_MAX);
        assert!(p.vel.y >= SPEED_MIN && p.vel.y < SPEED_MAX);
        assert!(p.radius >= RADIUS_MIN && p.radius < RADIUS_MAX);
    }
}

#[test]
fn radius_decays_linearly_and_never_goes_negative() {
    let mut p = make_particle(42);
    let mut surface = RecordingSurface::default();
    let r0 = p.radius;
    for n in 1..=120u32 {
        p.advance(&mut surface);
        let expected = (r0 - RADIUS_DECAY * n as f32).max(0.0);
        assert!(
            (p.radius - expected).abs() < 1e-4,
            "radius diverged at step {n}: {} vs {expected}",
            p.radius
        );
        assert!(p.radius >= 0.0);
    }
}

#[test]
fn position_is_initial_plus_n_times_velocity() {
    let mut p = make_particle(42);
    let mut surface = RecordingSurface::default();
    let p0 = p.pos;
    let v = p.vel;
    for n in 1..=50u32 {
        p.advance(&mut surface);
        assert_eq!(p.vel, v, "velocity changed at step {n}");
        let expected = p0 + v * n as f32;
        assert!((p.pos - expected).length() < 1e-3, "drift at step {n}");
    }
}

#[test]
fn radius_clamps_exactly_at_zero() {
    let mut p = make_particle(1);
    p.radius = 0.05;
    let mut surface = RecordingSurface::default();
    p.advance(&mut surface);
    assert_eq!(p.radius, 0.0, "0.05 - 0.1 must clamp to 0, not go negative");
    assert!(!p.is_alive());

    // Further advances are idempotent on the radius.
    p.advance(&mut surface);
    p.advance(&mut surface);
    assert_eq!(p.radius, 0.0);
}

#[test]
fn advance_draws_even_at_zero_radius() {
    let mut p = make_particle(1);
    p.radius = 0.0;
    let mut surface = RecordingSurface::default();
    p.advance(&mut surface);
    assert_eq!(surface.circles.len(), 1, "one draw per advance");
    let (_, _, r, _) = surface.circles[0];
    assert_eq!(r, 0.0, "zero-area circle, not a skipped draw");
}

#[test]
fn draw_uses_fully_opaque_hsla_of_the_particle_hue() {
    let mut rng = StdRng::seed_from_u64(3);
    let p = Particle::new(&mut rng, Vec2::new(5.0, 6.0), 123);
    let mut surface = RecordingSurface::default();
    p.draw(&mut surface);
    let (cx, cy, r, color) = surface.circles[0];
    assert_eq!((cx, cy), (5.0, 6.0));
    assert_eq!(r, p.radius);
    assert_eq!(color, Hsla::opaque(123.0));
    assert_eq!(color.css(), "hsla(123, 100%, 50%, 1)");
}
