//! Human-readable rendering of a finished measurement.

use std::time::Duration;

use es_core::{EntropyClass, EntropyReport};

/// Render the result block printed after the scan: entropy, the size
/// floor it implies in bits and bytes, the content estimate, and the
/// elapsed wall time.
pub fn render(report: &EntropyReport, verdict: EntropyClass, elapsed: Duration) -> String {
    format!(
        "Shannon entropy: {:.16} bits/byte\n\
         Min size at the theoretical compression limit:\n\
         \x20 {:.2} bits\n\
         \x20 {:.2} bytes\n\
         Estimated content: {}\n\
         Time: {} ms\n",
        report.entropy,
        report.min_size_bits,
        report.min_size_bytes,
        verdict.label(),
        elapsed.as_millis()
    )
}
