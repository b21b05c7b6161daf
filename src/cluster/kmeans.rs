//! K-means clustering with Lloyd's algorithm.
//!
//! Partitions data into k clusters by alternating two phases for a fixed
//! number of rounds:
//!
//! 1. **Assign**: each point → nearest centroid (squared Euclidean distance,
//!    lowest index wins exact ties)
//! 2. **Update**: each centroid → mean of its assigned points
//!
//! # Initialization
//!
//! Centroids start as a K×D matrix of standard-normal draws taken from the
//! model's own generator, in row-major order. That is the only randomness in
//! a fit. The generator is seeded once, at construction, and is never reset:
//! a second `fit` on the same model draws fresh initial centroids.
//!
//! # Degenerate Clusters
//!
//! A centroid with no assigned points keeps its previous value. It is not
//! reinitialized and not removed, so `k` rows always come back.
//!
//! # Half-Step Lag
//!
//! The loop ends on an update phase. The returned labels were computed
//! against the centroids *before* that last update, so re-assigning the
//! data against the returned centroids can give different labels whenever
//! membership was still moving. What always holds is the converse: every
//! non-empty returned centroid is exactly the mean of the points labelled
//! with it.
//!
//! # Stopping
//!
//! By default the full iteration budget runs. [`Kmeans::with_early_stop`]
//! stops once an assignment phase reproduces the previous labels; the update
//! that would follow cannot move any centroid, so the result is the same.

use crate::error::{Error, Result};
use log::{debug, info, trace};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::prelude::*;
use rand_distr::StandardNormal;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// K-means model: a private generator plus the most recently fitted centroids.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Instance-private generator used for centroid initialization.
    rng: StdRng,
    /// Centroids from the last successful `fit`.
    centroids: Option<Array2<f64>>,
    /// Stop once labels stop changing.
    early_stop: bool,
}

/// Output of [`Kmeans::fit`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KmeansFit {
    /// Final K×D centroid matrix.
    pub centroids: Array2<f64>,
    /// Cluster index per input row, in `[0, k)`.
    pub labels: Vec<usize>,
    /// Assignment phases actually run.
    pub iterations_run: usize,
}

impl KmeansFit {
    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.centroids.nrows()
    }

    /// Member count per cluster (zero for degenerate clusters).
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.k()];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new()
    }
}

impl Kmeans {
    /// Create a model whose generator is seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_seed(None)
    }

    /// Create a model with a deterministic generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_seed(Some(seed))
    }

    /// Create a model from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            centroids: None,
            early_stop: false,
        }
    }

    /// Stop as soon as an assignment phase leaves every label unchanged.
    ///
    /// Off by default. Results are identical either way; only
    /// [`KmeansFit::iterations_run`] differs.
    pub fn with_early_stop(mut self, early_stop: bool) -> Self {
        self.early_stop = early_stop;
        self
    }

    /// Centroids from the most recent `fit`, or `None` if never fitted.
    pub fn centroids(&self) -> Option<ArrayView2<'_, f64>> {
        self.centroids.as_ref().map(|c| c.view())
    }

    /// Run Lloyd's algorithm on `data` (N×D) for `iterations` rounds.
    ///
    /// Fails with [`Error::InvalidArgument`] when `k == 0`, `k > N`, or
    /// `iterations == 0`. A failed call leaves the model untouched and
    /// consumes no randomness.
    pub fn fit(
        &mut self,
        data: ArrayView2<'_, f64>,
        k: usize,
        iterations: usize,
    ) -> Result<KmeansFit> {
        let n = data.nrows();
        let d = data.ncols();
        validate(n, k, iterations)?;

        info!("k-means: k={k}, iterations={iterations}, n={n}, d={d}");

        let mut centroids: Array2<f64> =
            Array2::from_shape_fn((k, d), |_| self.rng.sample(StandardNormal));
        let mut labels = vec![0usize; n];
        let mut iterations_run = 0;

        for iter in 0..iterations {
            debug!("iteration {} / {}", iter + 1, iterations);

            let changed = assign_labels(data, centroids.view(), &mut labels);
            iterations_run = iter + 1;

            if self.early_stop && iter > 0 && !changed {
                debug!("labels stable after {iterations_run} iterations, stopping");
                break;
            }

            update_centroids(data, &labels, &mut centroids);
        }

        self.centroids = Some(centroids.clone());

        Ok(KmeansFit {
            centroids,
            labels,
            iterations_run,
        })
    }

    /// Like [`fit`](Self::fit), for row-vector input.
    ///
    /// Every row must have the width of the first one.
    pub fn fit_vecs(
        &mut self,
        data: &[Vec<f64>],
        k: usize,
        iterations: usize,
    ) -> Result<KmeansFit> {
        let n = data.len();
        let d = data.first().map_or(0, Vec::len);

        if let Some(row) = data.iter().find(|row| row.len() != d) {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: row.len(),
            });
        }

        let data_arr = Array2::from_shape_fn((n, d), |(i, j)| data[i][j]);
        self.fit(data_arr.view(), k, iterations)
    }

    /// Assign each row of `data` to its nearest fitted centroid.
    pub fn predict(&self, data: ArrayView2<'_, f64>) -> Result<Vec<usize>> {
        let centroids = self.centroids.as_ref().ok_or(Error::NotFitted)?;
        if data.ncols() != centroids.ncols() {
            return Err(Error::DimensionMismatch {
                expected: centroids.ncols(),
                found: data.ncols(),
            });
        }

        let mut labels = vec![0usize; data.nrows()];
        assign_labels(data, centroids.view(), &mut labels);
        Ok(labels)
    }
}

fn validate(n: usize, k: usize, iterations: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidArgument {
            name: "k",
            message: "cluster count must be a positive integer",
        });
    }
    if k > n {
        return Err(Error::InvalidArgument {
            name: "k",
            message: "cluster count must not exceed the number of data points",
        });
    }
    if iterations == 0 {
        return Err(Error::InvalidArgument {
            name: "iterations",
            message: "iteration count must be a positive integer",
        });
    }
    Ok(())
}

/// Compute squared Euclidean distance.
fn squared_distance(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Index of the nearest centroid; the first minimum wins.
fn nearest_centroid(point: &ArrayView1<'_, f64>, centroids: &ArrayView2<'_, f64>) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = f64::INFINITY;

    for (j, centroid) in centroids.outer_iter().enumerate() {
        let dist = squared_distance(point, &centroid);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = j;
        }
    }
    best_cluster
}

/// Assignment phase. Returns whether any label changed.
#[cfg(feature = "parallel")]
fn assign_labels(
    data: ArrayView2<'_, f64>,
    centroids: ArrayView2<'_, f64>,
    labels: &mut [usize],
) -> bool {
    labels
        .par_iter_mut()
        .enumerate()
        .map(|(i, label)| {
            let best = nearest_centroid(&data.row(i), &centroids);
            let changed = *label != best;
            *label = best;
            changed
        })
        .reduce(|| false, |a, b| a || b)
}

/// Assignment phase. Returns whether any label changed.
#[cfg(not(feature = "parallel"))]
fn assign_labels(
    data: ArrayView2<'_, f64>,
    centroids: ArrayView2<'_, f64>,
    labels: &mut [usize],
) -> bool {
    let mut changed = false;
    for (point, label) in data.outer_iter().zip(labels.iter_mut()) {
        let best = nearest_centroid(&point, &centroids);
        changed |= *label != best;
        *label = best;
    }
    changed
}

/// Update phase: each non-empty cluster's centroid becomes the mean of its
/// members, summed in row order. Empty clusters keep their centroid.
fn update_centroids(data: ArrayView2<'_, f64>, labels: &[usize], centroids: &mut Array2<f64>) {
    let mut sums = Array2::<f64>::zeros(centroids.raw_dim());
    let mut counts = vec![0usize; centroids.nrows()];

    for (point, &label) in data.outer_iter().zip(labels) {
        let mut sum = sums.row_mut(label);
        sum += &point;
        counts[label] += 1;
    }

    for (j, (mut centroid, sum)) in centroids
        .outer_iter_mut()
        .zip(sums.outer_iter())
        .enumerate()
    {
        if counts[j] == 0 {
            trace!("cluster {j} has no members, centroid unchanged");
            continue;
        }
        let count = counts[j] as f64;
        centroid.zip_mut_with(&sum, |c, &s| *c = s / count);
    }
}
