//! Cluster quality summaries.
//!
//! | Metric | Range | Best | Meaning |
//! |--------|-------|------|---------|
//! | [`inertia`] | [0, ∞) | 0 | Squared spread of one cluster around its centroid |
//! | [`total_inertia`] | [0, ∞) | 0 | Sum of [`inertia`] over clusters (WCSS) |
//! | [`purity`] | [0, 1] | 1 | Share of members matching their cluster's majority category |
//!
//! Inertia is the within-cluster sum of squares:
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! Purity treats the category label as a reference class. It is biased toward
//! many small clusters, so read it alongside the cluster sizes.

use crate::cluster::Cluster;
use crate::distance::squared_distance;
use crate::error::Result;
use std::collections::HashMap;

/// Sum of squared member distances to the cluster's centroid.
pub fn inertia(cluster: &Cluster) -> Result<f64> {
    cluster
        .members()
        .iter()
        .map(|m| squared_distance(m, cluster.centroid()))
        .sum()
}

/// Within-cluster sum of squares over all `clusters`.
pub fn total_inertia<'a>(clusters: impl IntoIterator<Item = &'a Cluster>) -> Result<f64> {
    clusters.into_iter().map(inertia).sum()
}

/// Fraction of members whose category is the most common one in their cluster.
///
/// Returns 0.0 when there are no members.
pub fn purity<'a>(clusters: impl IntoIterator<Item = &'a Cluster>) -> f64 {
    let mut n = 0usize;
    let mut correct = 0usize;

    for cluster in clusters {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for m in cluster.members() {
            *counts.entry(m.category()).or_insert(0) += 1;
        }
        correct += counts.values().copied().max().unwrap_or(0);
        n += cluster.len();
    }

    if n == 0 {
        return 0.0;
    }
    correct as f64 / n as f64
}
