//! Outlier-pair splitting.
//!
//! Takes the farthest member of each of two clusters. When those two outliers
//! are closer to each other than either is to its own centroid, both are
//! detached and form a new cluster:
//!
//! ```text
//! d_cross = d(outlier_a, outlier_b)
//! d_a     = d(outlier_a, centroid_a)
//! d_b     = d(outlier_b, centroid_b)
//!
//! split  ⇔  d_cross < d_a  ∧  d_cross < d_b
//! ```
//!
//! Only the single farthest point per cluster is considered. A single-member
//! cluster has its outlier on the centroid (`d = 0`), so it never donates.

use super::group::Cluster;
use crate::centroid::Centroid;
use crate::distance::distance;
use crate::error::{Error, Result};

/// Outliers and distances measured for one pair of clusters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitEvaluation {
    /// Position of the farthest member in the first cluster.
    pub outlier_a: usize,
    /// Position of the farthest member in the second cluster.
    pub outlier_b: usize,
    /// Distance between the two outliers.
    pub cross: f64,
    /// Distance from the first outlier to its centroid.
    pub to_centroid_a: f64,
    /// Distance from the second outlier to its centroid.
    pub to_centroid_b: f64,
}

impl SplitEvaluation {
    /// Whether the outliers are closer to each other than to their centroids.
    pub fn should_split(&self) -> bool {
        self.cross < self.to_centroid_a && self.cross < self.to_centroid_b
    }
}

/// Measure the outlier pair of `a` and `b` without changing either cluster.
pub fn evaluate_split(a: &Cluster, b: &Cluster) -> Result<SplitEvaluation> {
    let (outlier_a, to_centroid_a) = a.farthest()?;
    let (outlier_b, to_centroid_b) = b.farthest()?;
    let cross = distance(&a.members()[outlier_a], &b.members()[outlier_b])?;

    let eval = SplitEvaluation {
        outlier_a,
        outlier_b,
        cross,
        to_centroid_a,
        to_centroid_b,
    };
    tracing::debug!(
        outlier_a = a.members()[outlier_a].id(),
        outlier_b = b.members()[outlier_b].id(),
        cross,
        to_centroid_a,
        to_centroid_b,
        split = eval.should_split(),
        "split evaluated"
    );
    Ok(eval)
}

/// Detach the outlier pair of `a` and `b` into a new cluster if they belong
/// together.
///
/// On success both donors have lost exactly one member and their centroids
/// are recomputed. The new cluster's centroid is the first outlier itself.
/// Returns `None`, leaving both clusters untouched, when the condition fails.
pub fn try_split(a: &mut Cluster, b: &mut Cluster) -> Result<Option<Cluster>> {
    let eval = evaluate_split(a, b)?;
    if !eval.should_split() {
        return Ok(None);
    }
    Ok(Some(apply_split(a, b, &eval)?))
}

/// Detach the outliers named by `eval` into a new cluster, whether or not
/// `eval` says to split.
///
/// `eval` must come from [`evaluate_split`] on the same, unmodified pair.
/// Each donor must keep at least one member; otherwise, or if the outlier
/// positions are out of range, returns [`Error::InvalidState`] and neither
/// cluster is changed.
pub fn apply_split(a: &mut Cluster, b: &mut Cluster, eval: &SplitEvaluation) -> Result<Cluster> {
    const STALE: Error = Error::InvalidState("split evaluation does not match clusters");
    if a.len() < 2 || b.len() < 2 {
        return Err(Error::InvalidState("split donor would be left empty"));
    }
    if eval.outlier_a >= a.len() || eval.outlier_b >= b.len() {
        return Err(STALE);
    }
    let outlier_a = a.remove_member(eval.outlier_a).ok_or(STALE)?;
    let outlier_b = b.remove_member(eval.outlier_b).ok_or(STALE)?;
    a.recompute_centroid()?;
    b.recompute_centroid()?;

    let centroid = Centroid::from(&outlier_a);
    Ok(Cluster::with_centroid(centroid, vec![outlier_a, outlier_b]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::centroid::recompute;
    use crate::encoding::Vocabulary;
    use crate::record::Record;
    use std::sync::Arc;

    fn encoded(mut rs: Vec<Record>) -> Vec<Record> {
        let vocab = Arc::new(Vocabulary::from_records(&rs));
        vocab.encode_all(&mut rs);
        rs
    }

    fn cluster(rs: &[Record]) -> Cluster {
        let mut c = Cluster::seeded(rs[0].clone());
        for r in &rs[1..] {
            c.add_member(r.clone()).unwrap();
        }
        c
    }

    /// Two tight groups, each with one outlier reaching toward the middle.
    fn splittable() -> (Cluster, Cluster) {
        let rs = encoded(vec![
            Record::new("a1", 0, 0.0, 0.0, ""),
            Record::new("a2", 0, 0.0, 0.0, ""),
            Record::new("a3", 0, 0.0, 0.0, ""),
            Record::new("a-out", 48, 0.0, 0.0, ""),
            Record::new("b1", 100, 0.0, 0.0, ""),
            Record::new("b2", 100, 0.0, 0.0, ""),
            Record::new("b3", 100, 0.0, 0.0, ""),
            Record::new("b-out", 52, 0.0, 0.0, ""),
        ]);
        (cluster(&rs[..4]), cluster(&rs[4..]))
    }

    #[test]
    fn test_split_detaches_outlier_pair() {
        let (mut a, mut b) = splittable();
        let eval = evaluate_split(&a, &b).unwrap();
        // Centroid ages: 48/4 = 12 and 352/4 = 88.
        assert_eq!(eval.outlier_a, 3);
        assert_eq!(eval.outlier_b, 3);
        assert!((eval.cross - 4.0).abs() < 1e-12);
        assert!((eval.to_centroid_a - 36.0).abs() < 1e-12);
        assert!((eval.to_centroid_b - 36.0).abs() < 1e-12);
        assert!(eval.should_split());

        let c = try_split(&mut a, &mut b).unwrap().unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
        assert_eq!(c.len(), 2);
        assert_eq!(c.members()[0].id(), "a-out");
        assert_eq!(c.members()[1].id(), "b-out");
        assert_eq!(c.centroid(), &Centroid::from(&c.members()[0]));

        assert_eq!(a.centroid(), &recompute(a.members()).unwrap());
        assert_eq!(b.centroid(), &recompute(b.members()).unwrap());
        assert!(a.members().iter().all(|m| m.id() != "a-out"));
        assert!(b.members().iter().all(|m| m.id() != "b-out"));
    }

    #[test]
    fn test_no_split_leaves_clusters_untouched() {
        let rs = encoded(vec![
            Record::new("a1", 20, 6.0, 0.9, ""),
            Record::new("a2", 22, 6.5, 0.9, ""),
            Record::new("b1", 60, 9.0, 0.1, ""),
            Record::new("b2", 62, 9.5, 0.1, ""),
        ]);
        let mut a = cluster(&rs[..2]);
        let mut b = cluster(&rs[2..]);
        let (before_a, before_b) = (a.clone(), b.clone());

        assert!(try_split(&mut a, &mut b).unwrap().is_none());
        assert_eq!(a.centroid(), before_a.centroid());
        assert_eq!(b.centroid(), before_b.centroid());
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_apply_split_rejects_lone_donor_without_mutation() {
        let rs = encoded(vec![
            Record::new("a1", 50, 0.0, 0.0, ""),
            Record::new("b1", 0, 0.0, 0.0, ""),
            Record::new("b2", 49, 0.0, 0.0, ""),
        ]);
        let mut a = cluster(&rs[..1]);
        let mut b = cluster(&rs[1..]);
        let (before_a, before_b) = (a.centroid().clone(), b.centroid().clone());

        let eval = evaluate_split(&a, &b).unwrap();
        let err = apply_split(&mut a, &mut b, &eval).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert_eq!(a.centroid(), &before_a);
        assert_eq!(b.centroid(), &before_b);
    }

    #[test]
    fn test_apply_split_rejects_stale_positions() {
        let (mut a, mut b) = splittable();
        let mut eval = evaluate_split(&a, &b).unwrap();
        eval.outlier_b = 9;
        assert!(matches!(
            apply_split(&mut a, &mut b, &eval),
            Err(Error::InvalidState(_))
        ));
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 4);
    }

    #[test]
    fn test_cross_equal_to_centroid_distance_does_not_split() {
        // Centroid ages 12 and 126: d_a = 36, d_b = 42, cross = |48 - 84| = 36.
        // Only the strict inequality on the first side keeps them together.
        let rs = encoded(vec![
            Record::new("a1", 0, 0.0, 0.0, ""),
            Record::new("a2", 0, 0.0, 0.0, ""),
            Record::new("a3", 0, 0.0, 0.0, ""),
            Record::new("a-out", 48, 0.0, 0.0, ""),
            Record::new("b1", 140, 0.0, 0.0, ""),
            Record::new("b2", 140, 0.0, 0.0, ""),
            Record::new("b3", 140, 0.0, 0.0, ""),
            Record::new("b-out", 84, 0.0, 0.0, ""),
        ]);
        let mut a = cluster(&rs[..4]);
        let mut b = cluster(&rs[4..]);

        let eval = evaluate_split(&a, &b).unwrap();
        assert_eq!(eval.to_centroid_a, 36.0);
        assert_eq!(eval.to_centroid_b, 42.0);
        assert_eq!(eval.cross, 36.0);
        assert!(!eval.should_split());

        assert!(try_split(&mut a, &mut b).unwrap().is_none());
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 4);
    }

    #[test]
    fn test_single_member_cluster_never_donates() {
        let rs = encoded(vec![
            Record::new("a1", 50, 0.0, 0.0, ""),
            Record::new("b1", 0, 0.0, 0.0, ""),
            Record::new("b2", 49, 0.0, 0.0, ""),
        ]);
        let mut a = cluster(&rs[..1]);
        let mut b = cluster(&rs[1..]);

        let eval = evaluate_split(&a, &b).unwrap();
        assert_eq!(eval.to_centroid_a, 0.0);
        assert!(!eval.should_split());
        assert!(try_split(&mut a, &mut b).unwrap().is_none());
        assert_eq!(b.len(), 2);
    }
}
