//! entroscan — Shannon entropy of a file's byte distribution and the
//! theoretical minimum compressed size it implies.

mod progress;
mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use es_core::{
    generate_normal, generate_uniform, scan_file, scan_file_parallel, ByteHistogram,
    EntropyClass, EntropyReport, NullProgress,
};

use crate::progress::TerminalProgress;

#[derive(Parser)]
#[command(name = "entroscan")]
#[command(about = "Shannon entropy of a file's byte distribution")]
#[command(version)]
struct Cli {
    /// File to analyze
    #[arg(value_name = "PATH", required_unless_present = "random")]
    path: Option<PathBuf>,

    /// Measure a generated random sequence instead of a file
    #[arg(long, value_parser = ["uniform", "normal"], conflicts_with = "path")]
    random: Option<String>,

    /// Length of the generated sequence in bytes
    #[arg(long, requires = "random")]
    size: Option<usize>,

    /// Mean of the normal distribution (only with --random normal)
    #[arg(long, default_value_t = 0.0, requires = "random")]
    mean: f64,

    /// Standard deviation of the normal distribution (only with --random normal)
    #[arg(long, default_value_t = 1.0, requires = "random")]
    std_dev: f64,

    /// Memory-map the file and scan with one partial histogram per thread
    #[arg(long)]
    parallel: bool,

    /// Suppress the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();

    let hist = if let Some(kind) = cli.random.as_deref() {
        let Some(size) = cli.size else {
            bail!("--size is required with --random");
        };
        let data = if kind == "uniform" {
            generate_uniform(size)
        } else {
            generate_normal(size, cli.mean, cli.std_dev)?
        };
        println!("Sequence size: {} bytes", data.len());
        ByteHistogram::of(&data)
    } else {
        let Some(path) = cli.path.as_deref() else {
            bail!("exactly one input path is required");
        };
        scan_path(path, cli.parallel, cli.quiet)?
    };

    let elapsed = started.elapsed();
    let report = EntropyReport::from_histogram(&hist);
    let verdict = EntropyClass::from_report(&report);
    print!("{}", report::render(&report, verdict, elapsed));
    Ok(())
}

fn scan_path(path: &Path, parallel: bool, quiet: bool) -> Result<ByteHistogram> {
    let file_size = fs::metadata(path)
        .with_context(|| format!("failed to read metadata for {}", path.display()))?
        .len();
    println!("File size: {} bytes", file_size);
    log::info!("analyzing {} ({} bytes)", path.display(), file_size);

    if parallel {
        scan_file_parallel(path)
    } else if quiet {
        scan_file(path, &mut NullProgress)
    } else {
        scan_file(path, &mut TerminalProgress::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_mode_takes_exactly_one_path() {
        assert!(Cli::try_parse_from(["entroscan"]).is_err());
        assert!(Cli::try_parse_from(["entroscan", "a.bin", "b.bin"]).is_err());
        assert!(Cli::try_parse_from(["entroscan", "a.bin"]).is_ok());
    }

    #[test]
    fn random_mode_excludes_path() {
        assert!(Cli::try_parse_from(["entroscan", "--random", "uniform", "--size", "64"]).is_ok());
        assert!(
            Cli::try_parse_from(["entroscan", "a.bin", "--random", "uniform", "--size", "64"])
                .is_err()
        );
    }

    #[test]
    fn sequence_flags_require_random() {
        assert!(Cli::try_parse_from(["entroscan", "a.bin", "--size", "64"]).is_err());
        assert!(Cli::try_parse_from(["entroscan", "a.bin", "--mean", "0.5"]).is_err());
        assert!(Cli::try_parse_from(["entroscan", "--random", "gaussian", "--size", "64"]).is_err());
    }
}
