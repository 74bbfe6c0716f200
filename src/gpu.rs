//! GPU-facing views of a [`ParticleTypes`] table.
//!
//! Compute-shader integrators can either upload [`ParticleTypes::pair_params`]
//! as a storage buffer or bake the whole table into the shader source with
//! [`ParticleTypes::to_wgsl`].

use bytemuck::{Pod, Zeroable};

use crate::color::to_unit;
use crate::types::ParticleTypes;

/// Parameters of one ordered type pair, laid out for a WGSL `vec4<f32>`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PairParams {
    pub attract: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub _pad: f32,
}

/// Format a float so WGSL always reads it as an `f32` literal.
///
/// WGSL has no literal for infinities or NaN: infinities saturate to the
/// largest finite `f32` of the same sign and NaN becomes `0.0`.
fn wgsl_f32(v: f32) -> String {
    if v.is_nan() {
        "0.0".to_string()
    } else if v.is_infinite() {
        // Suffixed so it parses as an f32 rather than an out-of-range abstract float
        format!("{:?}f", f32::MAX.copysign(v))
    } else {
        format!("{:?}", v)
    }
}

impl ParticleTypes {
    /// Row-major pair parameters, `[i * size + j]`.
    pub fn pair_params(&self) -> Vec<PairParams> {
        self.attractions()
            .iter()
            .zip(self.min_radii())
            .zip(self.max_radii())
            .map(|((&attract, &min_radius), &max_radius)| PairParams {
                attract,
                min_radius,
                max_radius,
                _pad: 0.0,
            })
            .collect()
    }

    /// Type colors as RGBA in 0-1, alpha is always 1.
    pub fn gpu_colors(&self) -> Vec<[f32; 4]> {
        self.colors()
            .iter()
            .map(|&c| to_unit(c).extend(1.0).to_array())
            .collect()
    }

    /// Generate WGSL declarations for this table.
    ///
    /// Always emits `TYPE_COUNT` and `MAX_INTERACTION_RADIUS` (from
    /// [`max_radius`](Self::max_radius)). Non-empty tables also get:
    /// - `type_pair(a, b) -> vec3<f32>` - (attract, min radius, max radius)
    /// - `type_color(t) -> vec3<f32>` - RGB in 0-1
    pub fn to_wgsl(&self) -> String {
        let n = self.size();
        if !self.max_radius().is_finite()
            || self
                .attractions()
                .iter()
                .chain(self.min_radii())
                .chain(self.max_radii())
                .any(|v| !v.is_finite())
        {
            log::warn!("Particle type table has non-finite entries, clamping them in WGSL");
        }
        let mut out = format!(
            "const TYPE_COUNT: u32 = {}u;\nconst MAX_INTERACTION_RADIUS: f32 = {};\n",
            n,
            wgsl_f32(self.max_radius())
        );
        if n == 0 {
            return out;
        }

        let pair_entries: Vec<String> = self
            .pair_params()
            .iter()
            .map(|p| {
                format!(
                    "vec3<f32>({}, {}, {})",
                    wgsl_f32(p.attract),
                    wgsl_f32(p.min_radius),
                    wgsl_f32(p.max_radius)
                )
            })
            .collect();
        let color_entries: Vec<String> = self
            .colors()
            .iter()
            .map(|&c| {
                let rgb = to_unit(c);
                format!(
                    "vec3<f32>({}, {}, {})",
                    wgsl_f32(rgb.x),
                    wgsl_f32(rgb.y),
                    wgsl_f32(rgb.z)
                )
            })
            .collect();

        let pairs = pair_entries.join(",\n        ");
        let colors = color_entries.join(",\n        ");
        let total = n * n;

        // Local vars so the tables can be indexed dynamically
        out.push_str(&format!(
            r#"
fn type_pair(a: u32, b: u32) -> vec3<f32> {{
    var table = array<vec3<f32>, {total}>(
        {pairs}
    );
    return table[a * TYPE_COUNT + b];
}}

fn type_color(t: u32) -> vec3<f32> {{
    var colors = array<vec3<f32>, {n}>(
        {colors}
    );
    return colors[t];
}}
"#
        ));
        out
    }
}
