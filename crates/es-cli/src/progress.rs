//! Terminal progress bar for the streaming scan.
//!
//! Redraws with a carriage return, and only when the whole percent
//! changes; printing is expensive next to counting bytes, so per-chunk
//! updates that land on the same percent are dropped.

use std::io::{self, Write};

use es_core::ProgressObserver;

const BAR_WIDTH: usize = 50;

pub struct TerminalProgress {
    total: u64,
    last_percent: Option<u64>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self {
            total: 0,
            last_percent: None,
        }
    }

    fn render(percent: u64) -> String {
        let filled = (percent as usize * BAR_WIDTH) / 100;
        format!(
            "\rProgress: |{}{}| {}% Complete",
            "*".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            percent
        )
    }

    fn percent_of(&self, bytes_done: u64) -> u64 {
        (bytes_done * 100 / self.total).min(100)
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for TerminalProgress {
    fn started(&mut self, total_bytes: u64) {
        self.total = total_bytes;
        self.last_percent = None;
    }

    fn advanced(&mut self, bytes_done: u64) {
        // Nothing to draw for an empty stream.
        if self.total == 0 {
            return;
        }
        let percent = self.percent_of(bytes_done);
        if self.last_percent != Some(percent) {
            self.last_percent = Some(percent);
            print!("{}", Self::render(percent));
            let _ = io::stdout().flush();
        }
    }

    fn finished(&mut self) {
        if self.last_percent.is_some() {
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_empty_at_zero() {
        let line = TerminalProgress::render(0);
        assert!(line.contains(&"-".repeat(BAR_WIDTH)));
        assert!(line.ends_with("0% Complete"));
    }

    #[test]
    fn bar_is_full_at_hundred() {
        let line = TerminalProgress::render(100);
        assert!(line.contains(&"*".repeat(BAR_WIDTH)));
        assert!(line.ends_with("100% Complete"));
    }

    #[test]
    fn bar_is_half_filled_at_fifty() {
        let line = TerminalProgress::render(50);
        assert!(line.contains(&format!(
            "|{}{}|",
            "*".repeat(BAR_WIDTH / 2),
            "-".repeat(BAR_WIDTH / 2)
        )));
    }

    #[test]
    fn percent_is_clamped_and_stepped() {
        let mut bar = TerminalProgress::new();
        bar.started(200);
        assert_eq!(bar.percent_of(1), 0);
        assert_eq!(bar.percent_of(100), 50);
        assert_eq!(bar.percent_of(200), 100);
        // An observer fed past the announced total stays pinned at 100.
        assert_eq!(bar.percent_of(400), 100);
    }

    #[test]
    fn redraws_only_on_percent_change() {
        let mut bar = TerminalProgress::new();
        bar.started(10_000);
        bar.advanced(50);
        assert_eq!(bar.last_percent, Some(0));
        bar.advanced(99);
        assert_eq!(bar.last_percent, Some(0));
        bar.advanced(150);
        assert_eq!(bar.last_percent, Some(1));
        bar.advanced(10_000);
        assert_eq!(bar.last_percent, Some(100));
    }

    #[test]
    fn empty_stream_draws_nothing() {
        let mut bar = TerminalProgress::new();
        bar.started(0);
        bar.advanced(0);
        assert_eq!(bar.last_percent, None);
        bar.finished();
    }
}
