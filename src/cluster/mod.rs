//! Incremental nearest-centroid clustering.
//!
//! Records arrive one at a time. Each joins the cluster with the nearest
//! centroid, and that cluster's centroid is recomputed from all of its members
//! before the next record arrives:
//!
//! ```text
//! for x in records:
//!     k = argmin_k d(x, μ_k)
//!     C_k ← C_k ∪ {x}
//!     μ_k ← mean(C_k)
//! ```
//!
//! This is a single online pass, not Lloyd's algorithm: centroids move as
//! members arrive but earlier assignments are never revisited, so the outcome
//! depends on record order. Each insertion costs O(|C_k|), giving O(n²) for a
//! whole run.
//!
//! ## Outlier-pair splitting
//!
//! After assignment, [`try_split`] looks at the farthest member of each of two
//! clusters. If those two outliers are nearer to each other than to their own
//! centroids, they are carved out into a third cluster. See [`split`] for the
//! exact condition.
//!
//! ## Usage
//!
//! ```rust
//! use cohort::cluster::{assign, Cluster};
//! use cohort::{Record, Vocabulary};
//! use std::sync::Arc;
//!
//! let mut records = vec![
//!     Record::new("s1", 20, 6.0, 0.9, "math"),
//!     Record::new("s2", 45, 8.6, 0.9, "art"),
//!     Record::new("s3", 23, 6.5, 0.9, "math"),
//! ];
//! Arc::new(Vocabulary::from_records(&records)).encode_all(&mut records);
//!
//! let mut rest = records.split_off(2);
//! let mut clusters: Vec<Cluster> = records.into_iter().map(Cluster::seeded).collect();
//! let k = assign(rest.remove(0), &mut clusters).unwrap();
//! assert_eq!(k, 0);
//! assert_eq!(clusters[0].len(), 2);
//! ```

mod assign;
mod group;
pub mod split;

pub use assign::{assign, nearest};
pub use group::Cluster;
pub use split::{apply_split, evaluate_split, try_split, SplitEvaluation};
