//! Entropy-level classification of a measured stream.
//!
//! Maps a whole-stream entropy reading to a coarse content estimate.
//! Encrypted (or maximally compressed) data sits within a hair of the
//! 8.0 ceiling, and how thin that hair is depends on the sample size:
//! larger samples concentrate harder around 8.0, so the ceiling margin
//! shrinks as the stream grows.

use crate::entropy::EntropyReport;

/// Coarse content estimate derived from entropy alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntropyClass {
    /// Entropy at or below 6.0 bits/byte: text or regular structured data.
    Plain,
    /// Above 6.0 but clear of the ceiling: typical binary formats.
    Binary,
    /// Within the sample-size margin of 8.0: encrypted or fully compressed.
    Encrypted,
}

impl EntropyClass {
    /// Classify a finished measurement.
    pub fn from_report(report: &EntropyReport) -> Self {
        Self::classify(report.entropy, report.total_bytes)
    }

    /// Classify an entropy value measured over `sample_size` bytes.
    pub fn classify(entropy: f64, sample_size: u64) -> Self {
        if 8.0 - entropy < ceiling_margin(sample_size) {
            EntropyClass::Encrypted
        } else if entropy > 6.0 {
            EntropyClass::Binary
        } else {
            EntropyClass::Plain
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntropyClass::Plain => "Plain",
            EntropyClass::Binary => "Binary",
            EntropyClass::Encrypted => "Encrypted",
        }
    }
}

/// Margin below 8.0 within which a stream counts as encrypted.
///
/// Thresholds follow observed entropy concentration at increasing sample
/// sizes; below 1 MiB the estimate is noisy enough to need a wide margin.
fn ceiling_margin(sample_size: u64) -> f64 {
    const MIB: u64 = 1024 * 1024;
    if sample_size < MIB {
        0.001
    } else if sample_size < 64 * MIB {
        0.0001
    } else if sample_size < 512 * MIB {
        0.00001
    } else {
        0.000001
    }
}
