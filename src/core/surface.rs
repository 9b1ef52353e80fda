use super::constants::{SPARK_LIGHTNESS, SPARK_SATURATION};

/// HSLA color as the drawing surface consumes it (hue in degrees,
/// saturation/lightness in percent, alpha in \[0, 1]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    /// Fully opaque spark color for a hue degree.
    #[inline]
    pub fn opaque(hue: f32) -> Self {
        Self {
            hue,
            saturation: SPARK_SATURATION,
            lightness: SPARK_LIGHTNESS,
            alpha: 1.0,
        }
    }

    /// CSS color string accepted by canvas fill styles.
    pub fn css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Seam between the simulation core and the platform renderer.
///
/// The web frontend backs this with a `CanvasRenderingContext2d`; host-side
/// tests back it with a recording stub.
pub trait DrawSurface {
    fn clear_region(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Hsla);
}
