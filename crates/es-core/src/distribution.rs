//! Normalization of a histogram into an empirical probability distribution.

use crate::histogram::ByteHistogram;

/// Probability of encountering each byte value, derived once from a
/// completed histogram. Values sum to 1.0 (within floating-point
/// tolerance) whenever the histogram is non-empty; a zero-size input
/// yields the all-zero distribution.
#[derive(Debug, Clone)]
pub struct Distribution {
    probabilities: [f64; 256],
}

impl Distribution {
    /// Normalize a histogram: probability = count / total per bucket.
    pub fn from_histogram(hist: &ByteHistogram) -> Self {
        let mut probabilities = [0.0; 256];
        if !hist.is_empty() {
            let total = hist.total() as f64;
            for (p, &count) in probabilities.iter_mut().zip(hist.counts().iter()) {
                *p = count as f64 / total;
            }
        }
        Self { probabilities }
    }

    /// Probability of one byte value, in [0.0, 1.0].
    pub fn probability(&self, byte: u8) -> f64 {
        self.probabilities[byte as usize]
    }

    /// All 256 probabilities, indexed by byte value.
    pub fn probabilities(&self) -> &[f64; 256] {
        &self.probabilities
    }
}
