use super::constants::{RADIUS_DECAY, RADIUS_MAX, RADIUS_MIN, SPEED_MAX, SPEED_MIN};
use super::surface::{DrawSurface, Hsla};
use glam::Vec2;
use rand::prelude::*;

/// A single drifting, shrinking spark.
///
/// Velocity and hue are fixed at construction; only position and radius
/// change afterwards. Once the radius has decayed to zero the particle is
/// dead and the owning [`Effect`](super::effect::Effect) drops it on the
/// next frame.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hue: u16,
}

impl Particle {
    pub fn new(rng: &mut impl Rng, pos: Vec2, hue: u16) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                rng.gen_range(SPEED_MIN..SPEED_MAX),
                rng.gen_range(SPEED_MIN..SPEED_MAX),
            ),
            radius: rng.gen_range(RADIUS_MIN..RADIUS_MAX),
            hue,
        }
    }

    /// Advance one frame: shrink, drift, then draw the new state.
    ///
    /// Shrinking clamps at zero rather than going negative. Death is not
    /// signalled here; the owner checks `radius` before the next frame.
    pub fn advance<S: DrawSurface>(&mut self, surface: &mut S) {
        self.radius = (self.radius - RADIUS_DECAY).max(0.0);
        self.pos += self.vel;
        self.draw(surface);
    }

    /// Draw a filled circle at the current state. A zero radius still issues
    /// the call (zero-area circle), keeping one draw per live particle per
    /// frame.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) {
        surface.fill_circle(
            self.pos.x,
            self.pos.y,
            self.radius,
            Hsla::opaque(self.hue as f32),
        );
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.radius > 0.0
    }
}
