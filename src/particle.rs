//! Kinematic particle record.

use glam::Vec2;

/// Diameter of a particle in simulation units.
///
/// Randomized minimum radii never drop below this.
pub const DIAMETER: f32 = 1.0;

/// A single simulated particle.
///
/// Owned and advanced by the integrator. `typ` indexes the
/// [`ParticleTypes`](crate::ParticleTypes) table; keeping it in range is the
/// caller's job.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub typ: u8,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, typ: u8) -> Self {
        Self { pos, vel, typ }
    }
}
