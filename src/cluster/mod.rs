//! Clustering algorithms for grouping similar feature vectors.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat for a fixed number
//! of rounds.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::Kmeans;
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let fit = Kmeans::with_seed(7).fit_vecs(&data, 2, 10).unwrap();
//! assert_eq!(fit.labels[0], fit.labels[1]);  // First two together
//! assert_ne!(fit.labels[0], fit.labels[2]);  // Separate from last two
//! ```

mod kmeans;

pub use kmeans::{Kmeans, KmeansFit};
