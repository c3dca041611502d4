//! Student records and the feature view shared with centroids.

use crate::encoding::Vocabulary;
use core::fmt;
use ndarray::Array1;
use std::sync::Arc;

/// Read access to the features the distance metric compares.
///
/// Implemented by [`Record`] (a real entity) and [`Centroid`](crate::Centroid)
/// (a mean over cluster members), so either side of a comparison can be
/// either kind.
pub trait Features {
    /// Age in whole years.
    fn age(&self) -> u32;
    /// Grade average.
    fn average(&self) -> f64;
    /// Absence count.
    fn absences(&self) -> f64;
    /// One-hot category vector (empty until encoded).
    fn encoded_category(&self) -> &Array1<f64>;
}

/// One student: three numeric features plus a category label.
///
/// The category vector is empty until [`Vocabulary::encode_all`] runs over the
/// full record set. After that the record is read-only.
#[derive(Debug, Clone)]
pub struct Record {
    id: String,
    age: u32,
    average: f64,
    absences: f64,
    category: String,
    encoded_category: Array1<f64>,
    vocabulary: Option<Arc<Vocabulary>>,
}

impl Record {
    /// Create an unencoded record.
    ///
    /// `id` is only used for display; it never takes part in distances.
    pub fn new(
        id: impl Into<String>,
        age: u32,
        average: f64,
        absences: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            age,
            average,
            absences,
            category: category.into(),
            encoded_category: Array1::zeros(0),
            vocabulary: None,
        }
    }

    /// Identifier column value.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Category label. The empty string is a category of its own.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Vocabulary this record was encoded against, if any.
    pub fn vocabulary(&self) -> Option<&Arc<Vocabulary>> {
        self.vocabulary.as_ref()
    }

    /// Whether the category vector has been assigned.
    pub fn is_encoded(&self) -> bool {
        self.vocabulary.is_some()
    }

    pub(crate) fn set_encoding(&mut self, vocabulary: Arc<Vocabulary>, encoded: Array1<f64>) {
        self.encoded_category = encoded;
        self.vocabulary = Some(vocabulary);
    }
}

impl Features for Record {
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

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = if self.id.is_empty() { "-" } else { &self.id };
        write!(
            f,
            "{id} (age {}, average {:.2}, absences {:.2}, category {:?})",
            self.age, self.average, self.absences, self.category
        )
    }
}
