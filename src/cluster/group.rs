//! A cluster: a centroid plus its ordered members.

use crate::centroid::{recompute, Centroid};
use crate::distance::distance;
use crate::error::{Error, Result};
use crate::record::Record;
use core::fmt;

/// Members assigned to one group, with their mean.
///
/// The centroid is replaced wholesale each time it is recomputed. After
/// [`add_member`](Self::add_member) and [`recompute_centroid`](Self::recompute_centroid)
/// it equals the mean of the members.
#[derive(Debug, Clone)]
pub struct Cluster {
    centroid: Centroid,
    members: Vec<Record>,
}

impl Cluster {
    /// Create a cluster whose only member is `seed`.
    pub fn seeded(seed: Record) -> Self {
        Self {
            centroid: Centroid::from(&seed),
            members: vec![seed],
        }
    }

    /// Create a cluster from an explicit centroid and member list.
    ///
    /// The centroid is taken as given, not recomputed.
    pub fn with_centroid(centroid: Centroid, members: Vec<Record>) -> Self {
        Self { centroid, members }
    }

    /// Current centroid.
    pub fn centroid(&self) -> &Centroid {
        &self.centroid
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Record] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append `record` and recompute the centroid over all members.
    pub fn add_member(&mut self, record: Record) -> Result<()> {
        self.members.push(record);
        if let Err(e) = self.recompute_centroid() {
            // Keep members and centroid consistent on failure.
            self.members.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove the member at `position` without touching the centroid.
    ///
    /// Call [`recompute_centroid`](Self::recompute_centroid) afterwards.
    pub fn remove_member(&mut self, position: usize) -> Option<Record> {
        (position < self.members.len()).then(|| self.members.remove(position))
    }

    /// Recompute the centroid from the current members.
    pub fn recompute_centroid(&mut self) -> Result<()> {
        self.centroid = recompute(&self.members)?;
        Ok(())
    }

    /// Position and centroid distance of the member farthest from the centroid.
    ///
    /// Ties go to the earliest member.
    pub fn farthest(&self) -> Result<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, member) in self.members.iter().enumerate() {
            let d = distance(member, &self.centroid)?;
            match best {
                Some((_, best_d)) if d <= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.ok_or(Error::InvalidState("farthest member of an empty cluster"))
    }

    /// Member farthest from the centroid.
    pub fn farthest_member(&self) -> Result<&Record> {
        let (i, _) = self.farthest()?;
        Ok(&self.members[i])
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "centroid: {}", self.centroid)?;
        writeln!(f, "members ({}):", self.members.len())?;
        for m in &self.members {
            writeln!(f, "  {m}")?;
        }
        Ok(())
    }
}
