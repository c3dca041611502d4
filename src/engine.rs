//! End-to-end run: encode, seed, assign, split.
//!
//! 1. Build the category vocabulary over every record and encode them all
//! 2. Seed two clusters with one record each
//! 3. Assign every other record, in input order, to its nearest cluster
//! 4. Optionally try one outlier-pair split between the two clusters

use crate::cluster::{apply_split, assign, evaluate_split, Cluster, SplitEvaluation};
use crate::encoding::Vocabulary;
use crate::error::{Error, Result};
use crate::record::Record;
use core::fmt;
use rand::prelude::*;
use std::sync::Arc;

/// Number of seed clusters.
pub const SEED_CLUSTERS: usize = 2;

/// How the two seed records are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedStrategy {
    /// The first two records.
    #[default]
    First,
    /// Two distinct records drawn with a seeded RNG.
    Random {
        /// RNG seed.
        seed: u64,
    },
}

impl SeedStrategy {
    /// Indices of the seed records among `n` records, in ascending order.
    fn pick(self, n: usize) -> Result<[usize; SEED_CLUSTERS]> {
        if n < SEED_CLUSTERS {
            return Err(Error::InvalidClusterCount {
                requested: SEED_CLUSTERS,
                n_items: n,
            });
        }
        match self {
            SeedStrategy::First => Ok([0, 1]),
            SeedStrategy::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut picked = rand::seq::index::sample(&mut rng, n, SEED_CLUSTERS).into_vec();
                picked.sort_unstable();
                Ok([picked[0], picked[1]])
            }
        }
    }
}

/// Incremental two-seed clustering with an optional outlier-pair split.
#[derive(Debug, Clone)]
pub struct IncrementalClustering {
    /// How seed records are chosen.
    seeds: SeedStrategy,
    /// Whether to attempt the split after assignment.
    split: bool,
}

impl Default for IncrementalClustering {
    fn default() -> Self {
        Self::new()
    }
}

impl IncrementalClustering {
    /// Seed with the first two records and attempt a split.
    pub fn new() -> Self {
        Self {
            seeds: SeedStrategy::First,
            split: true,
        }
    }

    /// Set the seed selection strategy.
    pub fn with_seed_strategy(mut self, seeds: SeedStrategy) -> Self {
        self.seeds = seeds;
        self
    }

    /// Pick the seed records at random, reproducibly for `seed`.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_seed_strategy(SeedStrategy::Random { seed })
    }

    /// Enable or disable the outlier-pair split.
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Seed selection strategy.
    pub fn seed_strategy(&self) -> SeedStrategy {
        self.seeds
    }

    /// Cluster `records`.
    ///
    /// Records are encoded here against a vocabulary built from the whole
    /// input; already-encoded records must have been encoded against an equal
    /// vocabulary.
    pub fn run(&self, mut records: Vec<Record>) -> Result<ClusterSet> {
        let [first, second] = self.seeds.pick(records.len())?;

        let vocabulary = Arc::new(Vocabulary::from_records(&records));
        vocabulary.encode_all(&mut records);
        tracing::info!(
            records = records.len(),
            categories = vocabulary.len(),
            "vocabulary built"
        );

        // Remove the later index first so the earlier one stays valid.
        let seed_b = records.remove(second);
        let seed_a = records.remove(first);
        tracing::debug!(seed_a = seed_a.id(), seed_b = seed_b.id(), "seeded");
        let mut clusters = vec![Cluster::seeded(seed_a), Cluster::seeded(seed_b)];

        for record in records {
            assign(record, &mut clusters)?;
        }

        let mut split = None;
        if self.split {
            let (a, b) = clusters.split_at_mut(1);
            let eval = evaluate_split(&a[0], &b[0])?;
            let derived = if eval.should_split() {
                Some(apply_split(&mut a[0], &mut b[0], &eval)?)
            } else {
                None
            };
            clusters.extend(derived);
            split = Some(eval);
        }

        let set = ClusterSet {
            clusters,
            vocabulary,
            split,
        };
        tracing::info!(sizes = ?set.sizes(), "clustering complete");
        Ok(set)
    }
}

/// Clusters produced by one run, in order: seed A, seed B, then the derived
/// cluster if a split happened.
#[derive(Debug, Clone)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
    vocabulary: Arc<Vocabulary>,
    split: Option<SplitEvaluation>,
}

impl ClusterSet {
    /// All clusters.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Iterate over clusters.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// Number of clusters (2 or 3).
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Always false for a completed run.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Member count per cluster.
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }

    /// The cluster carved out by the split, if any.
    pub fn derived(&self) -> Option<&Cluster> {
        self.clusters.get(SEED_CLUSTERS)
    }

    /// Vocabulary the records were encoded against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Split measurements, if the split was attempted.
    pub fn split_evaluation(&self) -> Option<&SplitEvaluation> {
        self.split.as_ref()
    }

    /// Consume the set, returning its clusters.
    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }
}

impl<'a> IntoIterator for &'a ClusterSet {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ClusterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "categories: {:?}", self.vocabulary.labels())?;
        for (i, cluster) in self.clusters.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "cluster {}", i + 1)?;
            write!(f, "{cluster}")?;
        }
        if let Some(eval) = &self.split {
            writeln!(f)?;
            writeln!(
                f,
                "split: cross {:.3}, to centroid A {:.3}, to centroid B {:.3} -> {}",
                eval.cross,
                eval.to_centroid_a,
                eval.to_centroid_b,
                if eval.should_split() { "split" } else { "kept" }
            )?;
        }
        Ok(())
    }
}
