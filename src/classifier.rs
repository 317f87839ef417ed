//! Incremental isomorphism classification.
//!
//! Candidates are bucketed by signature (the same hash-then-verify scheme a
//! WL-hash dedup uses), and only representatives sharing the candidate's
//! bucket are checked for orbit membership. Representatives keep their
//! discovery order.

use std::collections::HashMap;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, trace};

use crate::graph::{LabeledGraph, Signature, SignatureFilter};
use crate::orbit::Representative;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifierOptions {
    pub filter: SignatureFilter,
    /// Log every promoted representative with its matrix.
    pub verbose: bool,
}

/// Counters gathered during one classification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationStats {
    pub candidates: u64,
    pub promoted: u64,
    /// Representatives skipped because their signature differed.
    pub signature_rejections: u64,
    /// Orbit membership tests performed.
    pub orbit_checks: u64,
}

#[derive(Debug, Clone)]
pub struct Classification {
    pub representatives: Vec<Representative>,
    pub stats: ClassificationStats,
}

impl Classification {
    /// Sum of orbit sizes; equals the number of labeled graphs classified.
    pub fn labeled_total(&self) -> u64 {
        self.representatives
            .iter()
            .map(|rep| rep.orbit().len() as u64)
            .sum()
    }
}

pub struct Classifier {
    options: ClassifierOptions,
    progress: ProgressBar,
}

impl Classifier {
    pub fn new(options: ClassifierOptions) -> Self {
        Self {
            options,
            progress: ProgressBar::hidden(),
        }
    }

    /// Reports one tick per candidate on `progress`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Splits `candidates` into isomorphism classes, consuming them one at a
    /// time. The first candidate of each class becomes its representative.
    pub fn classify<I>(&self, candidates: I) -> Classification
    where
        I: IntoIterator<Item = LabeledGraph>,
    {
        let mut representatives: Vec<Representative> = Vec::new();
        let mut buckets: HashMap<Signature, Vec<usize>> = HashMap::new();
        let mut stats = ClassificationStats::default();

        for candidate in candidates {
            stats.candidates += 1;
            self.progress.inc(1);

            let signature = candidate.signature(self.options.filter);
            let bucket = buckets.entry(signature).or_default();
            stats.signature_rejections += (representatives.len() - bucket.len()) as u64;

            let mut matched = false;
            for &index in bucket.iter() {
                stats.orbit_checks += 1;
                if representatives[index].is_isomorphic(&candidate) {
                    trace!(
                        candidate = ?candidate.reduced(),
                        class = index,
                        "isomorphic to existing class"
                    );
                    matched = true;
                    break;
                }
            }
            if matched {
                continue;
            }

            let index = representatives.len();
            if self.options.verbose {
                info!(class = index, reduced = ?candidate.reduced(), "new class\n{candidate}");
            } else {
                debug!(class = index, reduced = ?candidate.reduced(), "new class");
            }
            bucket.push(index);
            representatives.push(candidate.promote());
            stats.promoted += 1;
        }
        self.progress.finish_with_message("classification complete");

        info!(
            candidates = stats.candidates,
            classes = stats.promoted,
            signature_rejections = stats.signature_rejections,
            orbit_checks = stats.orbit_checks,
            "classification finished"
        );
        Classification {
            representatives,
            stats,
        }
    }
}

/// Progress bar sized for `total` candidates.
pub fn progress_bar(total: Option<u64>) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "[classify] [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▉▊▋▌▍▎▏  ");
    match total {
        Some(total) => ProgressBar::new(total).with_style(style),
        None => ProgressBar::no_length(),
    }
}
