//! # cohort
//!
//! Incremental nearest-centroid clustering of student records with mixed
//! numeric and categorical features.
//!
//! Each [`Record`] has an age, a grade average, an absence count and a
//! category label. The label is one-hot encoded against a [`Vocabulary`] built
//! once from the whole dataset, and distances are Euclidean over the numeric
//! fields plus the one-hot vector.
//!
//! A run seeds two clusters, assigns every other record to its nearest
//! centroid in input order (recomputing that centroid each time), then tries
//! once to carve a third cluster out of the two clusters' farthest outliers.
//!
//! ```rust
//! use cohort::{IncrementalClustering, Record};
//!
//! let records = vec![
//!     Record::new("s1", 20, 6.0, 0.9, "math"),
//!     Record::new("s2", 45, 8.6, 0.9, "art"),
//!     Record::new("s3", 23, 6.5, 0.9, "math"),
//!     Record::new("s4", 51, 9.0, 0.9, "art"),
//! ];
//!
//! let set = IncrementalClustering::new().run(records).unwrap();
//! assert_eq!(set.sizes(), vec![2, 2]);
//! ```

pub mod centroid;
pub mod cluster;
pub mod distance;
pub mod encoding;
pub mod engine;
/// Error types used across `cohort`.
pub mod error;
pub mod metrics;
pub mod record;
pub mod source;


pub use centroid::{recompute, Accumulator, Centroid};
pub use cluster::{assign, try_split, Cluster, SplitEvaluation};
pub use distance::{distance, squared_distance};
pub use encoding::Vocabulary;
pub use engine::{ClusterSet, IncrementalClustering, SeedStrategy};
pub use error::{Error, Result};
pub use metrics::{inertia, purity, total_inertia};
pub use record::{Features, Record};
pub use source::{read_path, read_records};
