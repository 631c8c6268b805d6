use crate::Vector3;
use sol_core::{Result, SolError};

/// Normalize a vector to unit length.
///
/// The squared length is accumulated in single precision, the square root
/// is taken in double precision, and the reciprocal is applied back in
/// single precision. STL stores f32 components, so the widening only
/// protects the square root from truncation, not the dot product.
///
/// Zero-length input is an error; non-finite components are passed through
/// and produce non-finite output per IEEE-754.
pub fn normalize(v: Vector3) -> Result<Vector3> {
    let len = f64::from(v.dot(v)).sqrt() as f32;
    if len == 0.0 {
        return Err(SolError::InvalidOperation(
            "cannot normalize a zero-length vector".to_string(),
        ));
    }
    let inv = 1.0 / len;
    Ok(v * inv)
}

/// Smallest of `first` and every value in `rest`.
///
/// Splitting off the first element makes the sequence non-empty by
/// construction, so there is no empty-input case to fail on.
pub fn minimum(first: f32, rest: &[f32]) -> f32 {
    rest.iter().copied().fold(first, f32::min)
}

/// Largest of `first` and every value in `rest`.
pub fn maximum(first: f32, rest: &[f32]) -> f32 {
    rest.iter().copied().fold(first, f32::max)
}
