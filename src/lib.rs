//! # plife - Particle type tables for particle-life simulations
//!
//! In a particle-life simulation every particle has a *type*, and every
//! ordered pair of types has its own attraction and interaction radii.
//! `plife` owns that table and nothing else: stepping particles, neighbor
//! search and drawing belong to the simulation that reads it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plife::prelude::*;
//!
//! let mut types = ParticleTypes::new(3);
//! types.set_attract(0, 1, 0.4)?;
//! types.set_symmetric_radii(0, 1, 2.0, 25.0)?;
//!
//! let cutoff = types.max_radius();         // neighbor search radius
//! let (min_r, max_r) = types.radii(p.typ, q.typ)?;
//! let color = types.color(p.typ)?;         // for the renderer
//! ```
//!
//! ## Typed Interactions
//!
//! ```ignore
//! #[derive(ParticleType, Clone, Copy, PartialEq)]
//! enum Species {
//!     Prey,
//!     Predator,
//! }
//!
//! let mut types = ParticleTypes::for_enum::<Species>();
//! types.set_attract(Species::Predator, Species::Prey, 1.0)?;
//! types.set_attract(Species::Prey, Species::Predator, -1.5)?;
//! ```
//!
//! ## Random Tables
//!
//! ```ignore
//! let mut rng = rand::thread_rng();
//! let types = ParticleTypes::randomized(8, &RandomizeParams::default(), &mut rng)?;
//! ```
//!
//! ## Threading
//!
//! Mutation needs `&mut ParticleTypes`; every query, including
//! [`ParticleTypes::max_radius`], works through `&self`. Configure the table
//! first, then share it read-only with worker threads.

pub mod color;
pub mod error;
mod gpu;
pub mod params;
pub mod particle;
mod types;

pub use color::Color;
pub use error::TypeTableError;
pub use glam::Vec2;
pub use gpu::PairParams;
pub use params::RandomizeParams;
pub use particle::{Particle, DIAMETER};
pub use plife_derive::ParticleType;
pub use types::{ParticleTypes, TypeCount, TypeIndex};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use plife::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::TypeTableError;
    pub use crate::gpu::PairParams;
    pub use crate::params::RandomizeParams;
    pub use crate::particle::{Particle, DIAMETER};
    pub use crate::types::{ParticleTypes, TypeCount, TypeIndex};
    pub use crate::Vec2;
    pub use plife_derive::ParticleType;
}
