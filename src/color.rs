//! Per-type display colors.
//!
//! Types get their default color by spreading hues evenly around the
//! color wheel at full saturation and half value.

use glam::Vec3;

/// 8-bit RGB color of a particle type.
pub type Color = image::Rgb<u8>;

/// Saturation used for generated type colors.
pub const TYPE_SATURATION: f32 = 1.0;

/// Value (brightness) used for generated type colors.
pub const TYPE_VALUE: f32 = 0.5;

/// Convert HSV to RGB.
///
/// * `h` - hue, 0.0 to 1.0 (wraps: red → yellow → green → cyan → blue → magenta → red)
/// * `s` - saturation, 0.0 (gray) to 1.0 (vivid)
/// * `v` - value, 0.0 (black) to 1.0 (bright)
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

/// Quantize a 0-1 RGB vector to 8 bits per channel.
pub fn to_rgb8(rgb: Vec3) -> Color {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    image::Rgb([q(rgb.x), q(rgb.y), q(rgb.z)])
}

/// Normalize an 8-bit color to 0-1 channels.
pub fn to_unit(color: Color) -> Vec3 {
    let [r, g, b] = color.0;
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}

/// Default color for type `index` out of `count`, with hues rotated by `hue_offset`.
pub fn type_color(index: usize, count: usize, hue_offset: f32) -> Color {
    let hue = (index as f32 / count as f32 + hue_offset).rem_euclid(1.0);
    to_rgb8(hsv_to_rgb(hue, TYPE_SATURATION, TYPE_VALUE))
}
