//! Error types for plife.
//!
//! Table accessors report bad type indices, and randomization reports
//! parameters that cannot be sampled from.

use std::fmt;

/// Errors returned by [`ParticleTypes`](crate::ParticleTypes) operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTableError {
    /// A type index was not below the table's type count.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of types in the table at the time of the call.
        size: usize,
    },
    /// Randomization parameters were rejected.
    InvalidParams(String),
}

impl fmt::Display for TypeTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTableError::IndexOutOfRange { index, size } => write!(
                f,
                "Particle type index {} out of range for a table of {} types",
                index, size
            ),
            TypeTableError::InvalidParams(msg) => {
                write!(f, "Invalid randomization parameters: {}", msg)
            }
        }
    }
}

impl std::error::Error for TypeTableError {}

impl From<rand_distr::NormalError> for TypeTableError {
    fn from(e: rand_distr::NormalError) -> Self {
        TypeTableError::InvalidParams(format!("attraction distribution: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let e = TypeTableError::IndexOutOfRange { index: 4, size: 3 };
        let msg = e.to_string();
        assert!(msg.contains("index 4"));
        assert!(msg.contains("3 types"));
    }

    #[test]
    fn test_normal_error_converts() {
        let e: TypeTableError = rand_distr::Normal::new(0.0f32, f32::NAN)
            .map_err(TypeTableError::from)
            .unwrap_err();
        assert!(matches!(e, TypeTableError::InvalidParams(_)));
    }
}
