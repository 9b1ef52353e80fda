pub mod constants;
pub mod effect;
pub mod particle;
pub mod surface;

pub use constants::*;
pub use effect::Effect;
pub use particle::Particle;
pub use surface::{DrawSurface, Hsla};
