//! Centroid aggregation.
//!
//! A centroid is the coordinate-wise mean of a cluster's members:
//!
//! ```text
//! μ = (Σᵢ xᵢ) / n
//! ```
//!
//! computed as a pure fold: an [`Accumulator`] absorbs each member and yields a
//! new accumulator, then [`Accumulator::divide`] turns the raw sums into a
//! [`Centroid`]. Centroids are always recomputed from the raw member sums, never
//! from a previous centroid.
//!
//! # Age truncation
//!
//! Age is an integer feature. Its sum is kept as an integer and divided with
//! integer division, so a centroid of ages `{20, 21}` has age `20`. Since each
//! recompute starts from the raw sum the truncation is at most one step and
//! never compounds across updates.

use crate::error::{Error, Result};
use crate::record::{Features, Record};
use core::fmt;
use ndarray::Array1;

/// Mean feature values over a cluster's members.
#[derive(Debug, Clone, PartialEq)]
pub struct Centroid {
    age: u32,
    average: f64,
    absences: f64,
    encoded_category: Array1<f64>,
}

impl Centroid {
    /// Centroid sitting exactly on `features`.
    pub fn of<F: Features + ?Sized>(features: &F) -> Self {
        Self {
            age: features.age(),
            average: features.average(),
            absences: features.absences(),
            encoded_category: features.encoded_category().clone(),
        }
    }
}

impl From<&Record> for Centroid {
    fn from(record: &Record) -> Self {
        Self::of(record)
    }
}

impl Features for Centroid {
    fn age(&self) -> u32 {
        self.age
    }

    fn average(&self) -> f64 {
        self.average
    }

    fn absences(&self) -> f64 {
        self.absences
    }

    fn encoded_category(&self) -> &Array1<f64> {
        &self.encoded_category
    }
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "age {}, average {:.2}, absences {:.2}, category [",
            self.age, self.average, self.absences
        )?;
        for (i, x) in self.encoded_category.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.2}")?;
        }
        write!(f, "]")
    }
}

/// Running sums of member features.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    age: u64,
    average: f64,
    absences: f64,
    encoded_category: Array1<f64>,
    count: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            age: 0,
            average: 0.0,
            absences: 0.0,
            encoded_category: Array1::zeros(0),
            count: 0,
        }
    }
}

impl Accumulator {
    /// Zero accumulator with an empty category vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw age sum.
    pub fn age_sum(&self) -> u64 {
        self.age
    }

    /// Raw average sum.
    pub fn average_sum(&self) -> f64 {
        self.average
    }

    /// Raw absences sum.
    pub fn absences_sum(&self) -> f64 {
        self.absences
    }

    /// Raw category vector sum.
    pub fn category_sum(&self) -> &Array1<f64> {
        &self.encoded_category
    }

    /// Number of absorbed contributions.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Add one member's features, returning the new accumulator.
    ///
    /// The category vector grows from empty to the contribution's length on
    /// the first non-empty contribution. Afterwards every contribution must
    /// match that length.
    pub fn absorb<F: Features + ?Sized>(self, features: &F) -> Result<Self> {
        let contribution = features.encoded_category();
        let mut encoded_category = self.encoded_category;

        if encoded_category.is_empty() && !contribution.is_empty() {
            encoded_category = Array1::zeros(contribution.len());
        }
        if encoded_category.len() != contribution.len() {
            return Err(Error::DimensionMismatch {
                expected: encoded_category.len(),
                found: contribution.len(),
            });
        }
        encoded_category += contribution;

        Ok(Self {
            age: self.age + u64::from(features.age()),
            average: self.average + features.average(),
            absences: self.absences + features.absences(),
            encoded_category,
            count: self.count + 1,
        })
    }

    /// Divide every sum by `divisor`.
    ///
    /// Age uses integer division.
    pub fn divide(&self, divisor: usize) -> Result<Centroid> {
        if divisor < 1 {
            return Err(Error::InvalidArgument {
                name: "divisor",
                message: "must be at least 1",
            });
        }
        let n = divisor as f64;
        // Fits whenever divisor >= count; a smaller divisor can overflow.
        let age = u32::try_from(self.age / divisor as u64).map_err(|_| Error::InvalidArgument {
            name: "divisor",
            message: "age quotient exceeds the age range",
        })?;

        Ok(Centroid {
            age,
            average: self.average / n,
            absences: self.absences / n,
            encoded_category: &self.encoded_category / n,
        })
    }
}

/// Recompute the centroid of `members` from scratch.
pub fn recompute<F: Features>(members: &[F]) -> Result<Centroid> {
    if members.is_empty() {
        return Err(Error::InvalidArgument {
            name: "members",
            message: "cannot aggregate an empty member list",
        });
    }
    let sum = members
        .iter()
        .try_fold(Accumulator::new(), |acc, m| acc.absorb(m))?;
    sum.divide(members.len())
}
