//! Shannon entropy of a byte distribution and the derived size bounds.

use crate::distribution::Distribution;
use crate::histogram::ByteHistogram;

/// Shannon entropy in bits per byte: -sum(p * log2(p)) over buckets with
/// p > 0. Zero-probability buckets contribute nothing and are skipped so
/// log2(0) never enters the accumulation.
///
/// The result lies in [0.0, 8.0]; 8.0 is reached only when all 256 byte
/// values are exactly equally frequent. An all-zero distribution (empty
/// input) yields 0.0.
pub fn shannon_entropy(dist: &Distribution) -> f64 {
    dist.probabilities()
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

/// Final measurement: entropy plus the theoretical minimum encoded size
/// it implies for the stream. Computed once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyReport {
    /// Bits of information per byte, in [0.0, 8.0].
    pub entropy: f64,
    /// Number of bytes the measurement covered.
    pub total_bytes: u64,
    /// Lower bound on encoded size in bits: entropy * total_bytes.
    pub min_size_bits: f64,
    /// Lower bound on encoded size in bytes: min_size_bits / 8.
    pub min_size_bytes: f64,
}

impl EntropyReport {
    /// Run the full calculation for a completed histogram.
    ///
    /// An empty histogram reports entropy 0.0 and zero sizes; the
    /// normalization never divides by the zero total.
    pub fn from_histogram(hist: &ByteHistogram) -> Self {
        let dist = Distribution::from_histogram(hist);
        let entropy = shannon_entropy(&dist);
        let min_size_bits = entropy * hist.total() as f64;
        Self {
            entropy,
            total_bytes: hist.total(),
            min_size_bits,
            min_size_bytes: min_size_bits / 8.0,
        }
    }
}
