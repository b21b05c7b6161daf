use lloyd::Kmeans;
use ndarray::Array2;
use rand::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows per-iteration progress.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = 9239;

    // Sample data comes from its own generator, separate from the model's.
    let mut rng = StdRng::seed_from_u64(seed);
    let data = Array2::from_shape_fn((500, 2), |_| f64::from(rng.random_range(0..100u32)));

    let mut model = Kmeans::with_seed(seed);
    let fit = model.fit(data.view(), 4, 20)?;

    println!("n_points={} k={}", fit.labels.len(), fit.k());
    for (j, (centroid, size)) in fit
        .centroids
        .outer_iter()
        .zip(fit.cluster_sizes())
        .enumerate()
    {
        println!(
            "  cluster {}: centroid=({:.2}, {:.2}) size={}",
            j, centroid[0], centroid[1], size
        );
    }

    Ok(())
}
