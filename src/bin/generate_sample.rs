//! Writes synthetic `component_*.raw` files for trying out the viewer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256StarStar;

const SIDE: usize = 28;

#[derive(Parser, Debug)]
#[command(about = "Generate sample 28x28 component files")]
struct Args {
    /// Output directory.
    #[arg(default_value = ".")]
    out_dir: PathBuf,

    /// Number of components to write.
    #[arg(long, default_value_t = 8)]
    count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Per-cell noise added on top of the blobs.
const NOISE_STD: f64 = 0.02;

fn gaussian(d2: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-d2 / (2.0 * sigma.powi(2))).exp()
}

/// Sum of a few signed Gaussian blobs plus noise, roughly what the first
/// layer of a small autoencoder learns on MNIST.
fn generate_component(rng: &mut impl Rng, noise: &Normal<f64>) -> Vec<f32> {
    let blobs: Vec<(f64, f64, f64, f64)> = (0..3)
        .map(|_| {
            let row = rng.random_range(4.0..24.0);
            let col = rng.random_range(4.0..24.0);
            let sigma = rng.random_range(1.5..5.5);
            let amplitude = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
            (row, col, sigma, amplitude)
        })
        .collect();

    (0..SIDE * SIDE)
        .map(|i| {
            let (r, c) = ((i / SIDE) as f64, (i % SIDE) as f64);
            let signal: f64 = blobs
                .iter()
                .map(|&(br, bc, sigma, amp)| {
                    gaussian((r - br).powi(2) + (c - bc).powi(2), sigma, amp)
                })
                .sum();
            (signal + noise.sample(rng)) as f32
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = Xoshiro256StarStar::seed_from_u64(args.seed);
    let noise = Normal::new(0.0, NOISE_STD).context("building noise distribution")?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for i in 0..args.count {
        let values = generate_component(&mut rng, &noise);
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        let path = args.out_dir.join(format!("component_{i}.raw"));
        std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    }

    println!(
        "Wrote {} components ({SIDE}x{SIDE} f32 each) to {}",
        args.count,
        args.out_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_component() {
        let noise = Normal::new(0.0, NOISE_STD).unwrap();
        let a = generate_component(&mut Xoshiro256StarStar::seed_from_u64(7), &noise);
        let b = generate_component(&mut Xoshiro256StarStar::seed_from_u64(7), &noise);
        let c = generate_component(&mut Xoshiro256StarStar::seed_from_u64(8), &noise);
        assert_eq!(a.len(), SIDE * SIDE);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|v| v.is_finite()));
    }
}
