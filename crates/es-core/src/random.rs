//! Synthetic byte sequences for measuring the entropy of a known
//! distribution instead of a file.

use anyhow::{Context, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// `len` bytes drawn uniformly from 0..=255.
pub fn generate_uniform(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

/// `len` bytes sampled from a normal distribution with the given mean and
/// standard deviation, scaled by 255 and narrowed to a byte. Samples
/// falling outside the byte range saturate at 0 or 255.
///
/// Fails if `std_dev` is negative or either parameter is non-finite.
pub fn generate_normal(len: usize, mean: f64, std_dev: f64) -> Result<Vec<u8>> {
    let normal = Normal::new(mean, std_dev)
        .with_context(|| format!("invalid normal distribution: mean={mean}, std-dev={std_dev}"))?;

    let mut rng = rand::thread_rng();
    Ok((0..len)
        .map(|_| (normal.sample(&mut rng) * 255.0) as u8)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropyReport;
    use crate::histogram::ByteHistogram;

    #[test]
    fn uniform_has_requested_length() {
        assert_eq!(generate_uniform(0).len(), 0);
        assert_eq!(generate_uniform(4096).len(), 4096);
    }

    #[test]
    fn uniform_entropy_is_near_ceiling() {
        let data = generate_uniform(1 << 16);
        let report = EntropyReport::from_histogram(&ByteHistogram::of(&data));
        assert!(
            report.entropy > 7.9,
            "uniform sample should be close to 8.0, got {}",
            report.entropy
        );
    }

    #[test]
    fn degenerate_normal_is_constant() {
        let data = generate_normal(1000, 0.5, 0.0).unwrap();
        assert!(data.iter().all(|&b| b == data[0]));

        let report = EntropyReport::from_histogram(&ByteHistogram::of(&data));
        assert_eq!(report.entropy, 0.0);
    }

    #[test]
    fn narrow_normal_has_low_entropy() {
        let data = generate_normal(1 << 16, 0.5, 0.02).unwrap();
        let report = EntropyReport::from_histogram(&ByteHistogram::of(&data));
        assert!(
            report.entropy < 6.0,
            "narrow normal should stay well below the ceiling, got {}",
            report.entropy
        );
    }

    #[test]
    fn out_of_range_samples_saturate() {
        let data = generate_normal(64, 2.0, 0.0).unwrap();
        assert!(data.iter().all(|&b| b == 255));

        let data = generate_normal(64, -2.0, 0.0).unwrap();
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn negative_std_dev_is_rejected() {
        assert!(generate_normal(16, 0.0, -1.0).is_err());
    }
}
