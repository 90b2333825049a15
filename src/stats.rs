//! Live search statistics and progress reporting.
//!
//! Counters for the whole run plus optional periodic status lines on
//! stderr. With `interval == 0` the tracker only counts.

#[derive(Default)]
pub struct SearchStats {
    /// Candidates scored across all strictness levels.
    pub scored: u64,
    /// Candidates discarded by the threshold test.
    pub pruned: u64,
    /// Deepest word count reached by any candidate.
    pub max_depth: u64,
    /// Strictness levels fully exhausted without a result.
    pub levels_exhausted: u64,
    /// Print a status line every this many scored candidates (0 = never).
    pub interval: u64,
}

impl SearchStats {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    /// Record one scored candidate at the given word depth.
    pub fn tick(&mut self, depth: usize, strictness: u32) {
        self.scored += 1;
        self.max_depth = self.max_depth.max(depth as u64);
        if self.interval > 0 && self.scored % self.interval == 0 {
            eprintln!(
                "[{:>10} scored] strictness {} | pruned {} | depth {}",
                self.scored, strictness, self.pruned, self.max_depth
            );
        }
    }

    pub fn tick_prune(&mut self) {
        self.pruned += 1;
    }

    pub fn tick_level_exhausted(&mut self) {
        self.levels_exhausted += 1;
    }

    /// One-line run summary on stderr.
    pub fn report(&self) {
        eprintln!(
            "Scored {} candidates, pruned {}, max depth {}, {} strictness levels exhausted",
            self.scored, self.pruned, self.max_depth, self.levels_exhausted
        );
    }
}
