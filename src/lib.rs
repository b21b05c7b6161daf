//! # lloyd
//!
//! K-means clustering with Lloyd's algorithm over N×D `f64` feature matrices.
//!
//! A [`Kmeans`] model owns its own seeded generator and the most recently
//! fitted centroids. [`Kmeans::fit`] runs a fixed number of
//! assignment/update rounds and returns the centroids together with one
//! cluster label per input row.
//!
//! ```rust
//! use lloyd::Kmeans;
//! use ndarray::array;
//!
//! let data = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
//!
//! let mut model = Kmeans::with_seed(42);
//! let fit = model.fit(data.view(), 2, 10).unwrap();
//!
//! assert_eq!(fit.labels[0], fit.labels[1]);
//! assert_ne!(fit.labels[0], fit.labels[2]);
//! assert_eq!(model.centroids().unwrap().dim(), (2, 2));
//! ```
//!
//! The `parallel` feature runs the assignment phase on rayon; results are
//! identical to the sequential path.

pub mod cluster;
/// Error types used across `lloyd`.
pub mod error;

pub use cluster::{Kmeans, KmeansFit};
pub use error::{Error, Result};
