// Simulation tuning constants shared by the core and the web frontend.

// Spawning
pub const BURST_SIZE: usize = 8; // particles created per spawn request

// Per-particle randomized ranges (half-open uniform draws)
pub const SPEED_MIN: f32 = -2.0; // px per frame, each axis
pub const SPEED_MAX: f32 = 2.0;
pub const RADIUS_MIN: f32 = 1.0; // px
pub const RADIUS_MAX: f32 = 8.0;

// Per-frame evolution
pub const RADIUS_DECAY: f32 = 0.1; // px shrunk per frame, clamped at zero
pub const HUE_STEP: u16 = 5; // degrees the shared hue advances per frame
pub const HUE_WRAP: u16 = 360;

// Fixed color components for spark fills
pub const SPARK_SATURATION: f32 = 100.0; // percent
pub const SPARK_LIGHTNESS: f32 = 50.0; // percent
