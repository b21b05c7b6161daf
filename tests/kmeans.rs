use lloyd::{Error, Kmeans};
use ndarray::{array, Array2};

fn grid_blobs() -> Array2<f64> {
    // Three well-separated 3x3 grids.
    let centers = [(0.0, 0.0), (40.0, 0.0), (0.0, 40.0)];
    Array2::from_shape_fn((27, 2), |(i, j)| {
        let (cx, cy) = centers[i / 9];
        let offset = [(i % 9 / 3) as f64, (i % 3) as f64];
        if j == 0 {
            cx + offset[0]
        } else {
            cy + offset[1]
        }
    })
}

#[test]
fn fit_reports_sizes_consistent_with_labels() {
    let data = grid_blobs();
    let fit = Kmeans::with_seed(2024).fit(data.view(), 3, 15).unwrap();

    let sizes = fit.cluster_sizes();
    assert_eq!(sizes.len(), 3);
    assert_eq!(sizes.iter().sum::<usize>(), 27);
    for (j, &size) in sizes.iter().enumerate() {
        assert_eq!(size, fit.labels.iter().filter(|&&l| l == j).count());
    }
}

#[test]
fn unseeded_models_still_produce_valid_fits() {
    let data = grid_blobs();
    let fit = Kmeans::new().fit(data.view(), 4, 5).unwrap();

    assert_eq!(fit.centroids.dim(), (4, 2));
    assert!(fit.labels.iter().all(|&l| l < 4));
}

#[test]
fn k_equals_n_is_accepted() {
    let data = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let fit = Kmeans::with_seed(42).fit(data.view(), 3, 3).unwrap();

    assert_eq!(fit.labels.len(), 3);
    assert_eq!(fit.k(), 3);
}

#[test]
fn zero_width_features_are_accepted() {
    let data = Array2::<f64>::zeros((4, 0));
    let fit = Kmeans::with_seed(1).fit(data.view(), 2, 2).unwrap();

    assert_eq!(fit.centroids.dim(), (2, 0));
    assert_eq!(fit.labels, vec![0, 0, 0, 0]);
}

#[test]
fn errors_render_readable_messages() {
    let data = array![[0.0], [1.0]];
    let mut model = Kmeans::with_seed(5);

    let err = model.fit(data.view(), 3, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument 'k': cluster count must not exceed the number of data points"
    );

    let err = model.fit(data.view(), 1, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument 'iterations': iteration count must be a positive integer"
    );

    assert_eq!(Error::NotFitted.to_string(), "model has not been fitted");
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::NotFitted);
}
