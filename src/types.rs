//! Per-type and per-type-pair parameters for particle-life simulations.
//!
//! Every particle carries a type. A [`ParticleTypes`] table stores, for each
//! ordered pair of types, how strongly one attracts the other and the band of
//! distances `[min_r, max_r]` over which that attraction applies. Each type
//! also gets a display color.
//!
//! # Example
//!
//! ```ignore
//! let mut types = ParticleTypes::new(3);
//! types.set_attract(0, 1, 0.8)?;
//! types.set_min_r(0, 1, 2.0)?;
//! types.set_max_r(0, 1, 20.0)?;
//!
//! // Neighbor search cutoff for the integrator
//! let cutoff = types.max_radius();
//! ```
//!
//! # Max radius cache
//!
//! [`ParticleTypes::max_radius`] scans the max radius matrix on its first call
//! after [`ParticleTypes::resize`] and returns the stored value from then on.
//! Per-entry setters leave the stored value alone, so a table edited after the
//! first query keeps reporting the old bound until it is resized or
//! [`ParticleTypes::refresh_max_radius`] is called.

use std::sync::OnceLock;

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::color::{type_color, Color};
use crate::error::TypeTableError;
use crate::params::RandomizeParams;
use crate::particle::DIAMETER;

/// Anything that can address a row or column of a [`ParticleTypes`] table.
///
/// Implemented for the unsigned integer types and for enums deriving
/// `ParticleType`, so `Particle::typ` and loop counters both work directly.
pub trait TypeIndex {
    /// Zero-based type index.
    fn type_index(self) -> usize;
}

macro_rules! impl_type_index {
    ($($t:ty),*) => {
        $(
            impl TypeIndex for $t {
                #[inline]
                fn type_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_type_index!(u8, u16, u32, usize);

// Lets bare integer literals index the table. Negative indices are always out of range.
impl TypeIndex for i32 {
    #[inline]
    fn type_index(self) -> usize {
        usize::try_from(self).unwrap_or(usize::MAX)
    }
}

/// Number of types in a type enum. Implemented by `#[derive(ParticleType)]`.
pub trait TypeCount {
    const COUNT: usize;
}

/// Colors and pairwise interaction parameters for every particle type.
///
/// Matrices are stored flattened in row-major order:
/// `[i * size + j]` holds the parameter for the ordered pair `(i, j)`.
/// Which of `i`/`j` is the acting type is up to the integrator.
#[derive(Clone, Debug, Default)]
pub struct ParticleTypes {
    colors: Vec<Color>,
    attract: Vec<f32>,
    min_r: Vec<f32>,
    max_r: Vec<f32>,
    /// Largest entry of `max_r`, filled on first query.
    max_radius: OnceLock<f32>,
}

impl ParticleTypes {
    /// Create a table for `types` particle types.
    ///
    /// All interactions start at zero. Colors are spread around the hue wheel.
    pub fn new(types: usize) -> Self {
        let mut table = Self::default();
        table.resize(types);
        table
    }

    /// Create a table with one type per variant of a `ParticleType` enum.
    pub fn for_enum<T: TypeCount>() -> Self {
        Self::new(T::COUNT)
    }

    /// Create a table for `types` particle types and randomize it.
    pub fn randomized<R: Rng + ?Sized>(
        types: usize,
        params: &RandomizeParams,
        rng: &mut R,
    ) -> Result<Self, TypeTableError> {
        let mut table = Self::new(types);
        table.randomize(params, rng)?;
        Ok(table)
    }

    /// Reset the table to `types` particle types.
    ///
    /// Every matrix entry becomes zero, colors are regenerated with hue
    /// `i / types` at full saturation and half value, and the max radius
    /// cache is cleared.
    pub fn resize(&mut self, types: usize) {
        let pairs = types * types;
        for matrix in [&mut self.attract, &mut self.min_r, &mut self.max_r] {
            matrix.clear();
            matrix.resize(pairs, 0.0);
        }
        self.colors.clear();
        self.colors
            .extend((0..types).map(|i| type_color(i, types, 0.0)));
        self.max_radius = OnceLock::new();

        log::debug!("Resized particle type table to {} types", types);
    }

    /// Number of particle types.
    #[inline]
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    fn check(&self, i: impl TypeIndex) -> Result<usize, TypeTableError> {
        let index = i.type_index();
        let size = self.size();
        if index < size {
            Ok(index)
        } else {
            Err(TypeTableError::IndexOutOfRange { index, size })
        }
    }

    #[inline]
    fn offset(&self, i: impl TypeIndex, j: impl TypeIndex) -> Result<usize, TypeTableError> {
        let i = self.check(i)?;
        let j = self.check(j)?;
        Ok(i * self.size() + j)
    }

    /// Display color of type `i`.
    pub fn color(&self, i: impl TypeIndex) -> Result<Color, TypeTableError> {
        let i = self.check(i)?;
        Ok(self.colors[i])
    }

    /// Override the display color of type `i`.
    pub fn set_color(&mut self, i: impl TypeIndex, color: Color) -> Result<(), TypeTableError> {
        let i = self.check(i)?;
        self.colors[i] = color;
        Ok(())
    }

    /// Regenerate every color with hues rotated by `hue_offset` turns.
    pub fn recolor(&mut self, hue_offset: f32) {
        let n = self.size();
        for (i, c) in self.colors.iter_mut().enumerate() {
            *c = type_color(i, n, hue_offset);
        }
        log::debug!("Recolored {} particle types, hue offset {:.3}", n, hue_offset);
    }

    /// Attraction for the pair `(i, j)`.
    ///
    /// - `> 0`: attract
    /// - `< 0`: repel
    #[inline]
    pub fn attract(&self, i: impl TypeIndex, j: impl TypeIndex) -> Result<f32, TypeTableError> {
        Ok(self.attract[self.offset(i, j)?])
    }

    pub fn set_attract(
        &mut self,
        i: impl TypeIndex,
        j: impl TypeIndex,
        value: f32,
    ) -> Result<(), TypeTableError> {
        let k = self.offset(i, j)?;
        self.attract[k] = value;
        Ok(())
    }

    /// Distance below which the pair stops following its attraction.
    #[inline]
    pub fn min_r(&self, i: impl TypeIndex, j: impl TypeIndex) -> Result<f32, TypeTableError> {
        Ok(self.min_r[self.offset(i, j)?])
    }

    pub fn set_min_r(
        &mut self,
        i: impl TypeIndex,
        j: impl TypeIndex,
        value: f32,
    ) -> Result<(), TypeTableError> {
        let k = self.offset(i, j)?;
        self.min_r[k] = value;
        Ok(())
    }

    /// Distance beyond which the pair does not interact.
    #[inline]
    pub fn max_r(&self, i: impl TypeIndex, j: impl TypeIndex) -> Result<f32, TypeTableError> {
        Ok(self.max_r[self.offset(i, j)?])
    }

    /// Set the interaction cutoff of `(i, j)`.
    ///
    /// Does not update a max radius that has already been computed.
    pub fn set_max_r(
        &mut self,
        i: impl TypeIndex,
        j: impl TypeIndex,
        value: f32,
    ) -> Result<(), TypeTableError> {
        let k = self.offset(i, j)?;
        self.max_r[k] = value;
        Ok(())
    }

    /// `(min_r, max_r)` for the pair `(i, j)`.
    #[inline]
    pub fn radii(
        &self,
        i: impl TypeIndex,
        j: impl TypeIndex,
    ) -> Result<(f32, f32), TypeTableError> {
        let k = self.offset(i, j)?;
        Ok((self.min_r[k], self.max_r[k]))
    }

    /// Set both radii for `(i, j)` and `(j, i)`.
    pub fn set_symmetric_radii(
        &mut self,
        i: impl TypeIndex,
        j: impl TypeIndex,
        min_r: f32,
        max_r: f32,
    ) -> Result<(), TypeTableError> {
        let i = self.check(i)?;
        let j = self.check(j)?;
        let n = self.size();
        for k in [i * n + j, j * n + i] {
            self.min_r[k] = min_r;
            self.max_r[k] = max_r;
        }
        Ok(())
    }

    /// Largest max radius over all type pairs, `0.0` for an empty table.
    ///
    /// Computed on the first call after a resize and returned unchanged
    /// afterwards, even if entries were edited in between.
    pub fn max_radius(&self) -> f32 {
        *self.max_radius.get_or_init(|| self.scan_max_radius())
    }

    /// Rescan the max radius matrix and replace the cached value.
    pub fn refresh_max_radius(&mut self) -> f32 {
        let max = self.scan_max_radius();
        self.max_radius = OnceLock::from(max);
        max
    }

    fn scan_max_radius(&self) -> f32 {
        let max = self
            .max_r
            .iter()
            .copied()
            .reduce(f32::max)
            .unwrap_or(0.0);
        log::trace!("Computed max interaction radius {} over {} pairs", max, self.max_r.len());
        max
    }

    /// Fill every pair with random parameters.
    ///
    /// - Attraction is drawn from `Normal(mean, std)`; a type never repels itself.
    /// - Radii are symmetric. The diagonal min radius is [`DIAMETER`], other
    ///   min radii are drawn from the min range and clamped to at least
    ///   `DIAMETER`. Max radii are drawn from the max range and clamped to at
    ///   least the pair's min radius.
    /// - Hues are rotated randomly when `params.shuffle_hue` is set.
    ///
    /// The max radius is recomputed before returning. Invalid parameters are
    /// rejected before anything is written.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        params: &RandomizeParams,
        rng: &mut R,
    ) -> Result<(), TypeTableError> {
        params.validate()?;
        let normal = Normal::new(params.mean_attraction, params.std_attraction)?;
        let rand_min = Uniform::new_inclusive(params.min_radius_lower, params.min_radius_upper);
        let rand_max = Uniform::new_inclusive(params.max_radius_lower, params.max_radius_upper);

        let n = self.size();
        for i in 0..n {
            for j in 0..n {
                let a = normal.sample(rng);
                self.attract[i * n + j] = if i == j { a.abs() } else { a };

                // (j, i) mirrors (i, j) for radii
                if j < i {
                    continue;
                }
                let min_r = if i == j {
                    DIAMETER
                } else {
                    DIAMETER.max(rand_min.sample(rng))
                };
                let max_r = rand_max.sample(rng).max(min_r);
                for k in [i * n + j, j * n + i] {
                    self.min_r[k] = min_r;
                    self.max_r[k] = max_r;
                }
            }
        }

        if params.shuffle_hue {
            self.recolor(rng.gen::<f32>());
        }

        let max = self.refresh_max_radius();
        log::debug!("Randomized {} particle types, max radius {}", n, max);
        Ok(())
    }

    /// Per-type colors, indexed by type.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Flattened attraction matrix.
    pub fn attractions(&self) -> &[f32] {
        &self.attract
    }

    /// Flattened min radius matrix.
    pub fn min_radii(&self) -> &[f32] {
        &self.min_r
    }

    /// Flattened max radius matrix.
    pub fn max_radii(&self) -> &[f32] {
        &self.max_r
    }
}
