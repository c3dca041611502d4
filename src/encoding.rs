//! One-hot encoding of the category label.
//!
//! The vocabulary is computed once from the whole record set and fixes the
//! index of every category for the run:
//!
//! ```text
//! labels:      ["math", "", "art", "math"]
//! vocabulary:  ["", "art", "math"]          (sorted, distinct)
//! "math"    →  [0.0, 0.0, 1.0]
//! ""        →  [1.0, 0.0, 0.0]
//! ```
//!
//! Every record and every centroid must carry vectors of the same length, so
//! encoding happens before any distance or centroid computation.

use crate::record::Record;
use ndarray::Array1;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Sorted, distinct category labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    labels: Vec<String>,
}

impl Vocabulary {
    /// Build the vocabulary from every record's category.
    pub fn from_records(records: &[Record]) -> Self {
        let labels: BTreeSet<&str> = records.iter().map(Record::category).collect();
        Self {
            labels: labels.into_iter().map(str::to_owned).collect(),
        }
    }

    /// Number of distinct categories (the one-hot width).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when no categories were seen.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Categories in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of `category`, if present.
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.labels
            .binary_search_by(|label| label.as_str().cmp(category))
            .ok()
    }

    /// One-hot vector for `category`. All zeros if the category is unknown.
    pub fn encode(&self, category: &str) -> Array1<f64> {
        let mut v = Array1::zeros(self.len());
        if let Some(i) = self.index_of(category) {
            v[i] = 1.0;
        }
        v
    }

    /// Assign the one-hot vector to every record.
    ///
    /// Records already encoded against an equal vocabulary are re-encoded
    /// identically.
    ///
    /// # Panics
    ///
    /// Panics if a record was encoded against a different vocabulary; mixing
    /// vocabularies would silently corrupt every later distance.
    pub fn encode_all(self: &Arc<Self>, records: &mut [Record]) {
        for record in records.iter_mut() {
            if let Some(previous) = record.vocabulary() {
                assert!(
                    Arc::ptr_eq(previous, self) || **previous == **self,
                    "record {:?} already encoded against a different vocabulary",
                    record.id()
                );
            }
            let encoded = self.encode(record.category());
            record.set_encoding(Arc::clone(self), encoded);
        }
    }
}
