//! Online nearest-centroid assignment.
//!
//! Each record joins the cluster whose centroid is closest at the moment it
//! arrives. The winning centroid is recomputed immediately; earlier records are
//! never revisited. Unlike Lloyd's k-means there is no second pass, so the
//! result depends on record order.

use super::group::Cluster;
use crate::distance::distance;
use crate::error::{Error, Result};
use crate::record::Record;

/// Index and distance of the cluster whose centroid is nearest to `record`.
///
/// Clusters are scanned in slice order; the first of several equally near
/// clusters wins.
pub fn nearest(record: &Record, clusters: &[Cluster]) -> Result<(usize, f64)> {
    if clusters.is_empty() {
        return Err(Error::InvalidArgument {
            name: "clusters",
            message: "no clusters to assign to",
        });
    }

    let mut best_cluster = 0;
    let mut best_dist = f64::INFINITY;

    for (k, cluster) in clusters.iter().enumerate() {
        let dist = distance(record, cluster.centroid())?;
        if dist < best_dist {
            best_dist = dist;
            best_cluster = k;
        }
    }

    Ok((best_cluster, best_dist))
}

/// Add `record` to its nearest cluster and return that cluster's index.
pub fn assign(record: Record, clusters: &mut [Cluster]) -> Result<usize> {
    let (k, dist) = nearest(&record, clusters)?;
    tracing::debug!(record = record.id(), cluster = k, distance = dist, "assigned");
    clusters[k].add_member(record)?;
    Ok(k)
}
