//! Euclidean distance over mixed features.
//!
//! ```text
//! d(a, b) = sqrt( (a.age - b.age)² + (a.average - b.average)²
//!               + (a.absences - b.absences)² + Σᵢ (a.catᵢ - b.catᵢ)² )
//! ```
//!
//! Category vectors must agree in shape. Two empty vectors compare on the
//! numeric fields alone; an empty vector against a non-empty one is
//! [`Error::NotEncoded`] rather than a silent numeric-only fallback.

use crate::error::{Error, Result};
use crate::record::Features;

/// Squared Euclidean distance between two feature sets.
pub fn squared_distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Features + ?Sized,
    B: Features + ?Sized,
{
    let (ca, cb) = (a.encoded_category(), b.encoded_category());
    match (ca.is_empty(), cb.is_empty()) {
        (true, true) | (false, false) => {}
        _ => return Err(Error::NotEncoded),
    }
    if ca.len() != cb.len() {
        return Err(Error::DimensionMismatch {
            expected: ca.len(),
            found: cb.len(),
        });
    }

    let age = f64::from(a.age()) - f64::from(b.age());
    let numeric = age.powi(2)
        + (a.average() - b.average()).powi(2)
        + (a.absences() - b.absences()).powi(2);
    let categorical: f64 = ca.iter().zip(cb.iter()).map(|(x, y)| (x - y).powi(2)).sum();

    Ok(numeric + categorical)
}

/// Euclidean distance between two feature sets.
pub fn distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Features + ?Sized,
    B: Features + ?Sized,
{
    squared_distance(a, b).map(f64::sqrt)
}
