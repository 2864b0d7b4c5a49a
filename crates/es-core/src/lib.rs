//! Core measurement library for EntroScan: byte-frequency histograms,
//! Shannon entropy, theoretical minimum compressed size, and the file
//! scanning that feeds them.

pub mod classify;
pub mod distribution;
pub mod entropy;
pub mod histogram;
pub mod mapped_file;
pub mod progress;
pub mod random;
pub mod scan;

pub use classify::EntropyClass;
pub use distribution::Distribution;
pub use entropy::{shannon_entropy, EntropyReport};
pub use histogram::ByteHistogram;
pub use mapped_file::MappedFile;
pub use progress::{NullProgress, ProgressObserver};
pub use random::{generate_normal, generate_uniform};
pub use scan::{scan_file, scan_file_parallel};
