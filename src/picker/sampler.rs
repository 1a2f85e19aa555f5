use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use super::geometry::DisplayGeometry;

// ============================================================================
// SOURCE IMAGE — the immutable pixel grid of the current session
// ============================================================================

/// Decoded pixels of the loaded image. Never mutated; a new image load
/// replaces the whole buffer (and with it the session that owns it).
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Raw RGBA buffer, for uploading the display texture.
    pub fn rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }
}

// ============================================================================
// PIXEL SAMPLING — display-space pointer → image-space pixel → color
// ============================================================================

/// One resolved sample. Transient — produced per pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleResult {
    pub pixel_x: u32,
    pub pixel_y: u32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Read but never surfaced in the text readouts; fully-transparent
    /// pixels still report their RGB.
    pub a: u8,
}

impl SampleResult {
    pub fn color32(&self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }
}

/// Resolve the image pixel under a display-space pointer position and read
/// its color. Returns `None` when the geometry is degenerate (no layout yet,
/// zero-sized rect) or the image has a zero dimension — callers must leave
/// every readout untouched in that case.
///
/// Pointer positions outside the rendered rect are clamped to the nearest
/// edge pixel, never rejected. Clamping happens on the fractional coordinate
/// *before* truncation: truncating first would let a pointer exactly on the
/// far display edge resolve one past the last pixel row/column.
pub fn sample(
    pointer: Pos2,
    geometry: &DisplayGeometry,
    image: &SourceImage,
) -> Option<SampleResult> {
    if geometry.is_degenerate() || image.width() == 0 || image.height() == 0 {
        return None;
    }

    let image_x = (pointer.x - geometry.display_left) * geometry.scale_x;
    let image_y = (pointer.y - geometry.display_top) * geometry.scale_y;

    let pixel_x = image_x.clamp(0.0, image.width() as f32 - 1.0) as u32;
    let pixel_y = image_y.clamp(0.0, image.height() as f32 - 1.0) as u32;

    let p = image.pixel(pixel_x, pixel_y);
    Some(SampleResult {
        pixel_x,
        pixel_y,
        r: p[0],
        g: p[1],
        b: p[2],
        a: p[3],
    })
}
