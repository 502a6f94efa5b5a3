//! Parallel multi-document processing.
//!
//! Documents are independent, so the batch fans out across a rayon worker
//! pool with no shared state. Per-document failure degrades that one
//! result and never aborts the batch; an empty batch is a valid, empty
//! outcome.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::extract::ContentExtractor;
use crate::model::AnalysisResult;
use crate::pipeline::{Pipeline, RunConfig};

/// Outcome of a batch run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Results in input order, one per document
    pub results: Vec<AnalysisResult>,

    /// Documents that produced a full analysis
    pub succeeded: usize,

    /// Documents that fell back to a degraded result
    pub degraded: usize,

    /// When the batch started
    pub started_at: DateTime<Utc>,

    /// When the batch finished
    pub finished_at: DateTime<Utc>,
}

impl BatchSummary {
    /// Total number of documents processed.
    pub fn total(&self) -> usize {
        self.results.len()
    }
}

/// Process a batch of documents in parallel.
///
/// Results come back in the same order as `paths`. Each document runs the
/// full pipeline independently; extraction failures yield degraded
/// results rather than errors.
pub fn process_batch(
    paths: &[PathBuf],
    extractor: &dyn ContentExtractor,
    config: &RunConfig,
    pipeline: &Pipeline,
) -> BatchSummary {
    let started_at = Utc::now();
    log::info!("processing batch of {} documents", paths.len());

    let results: Vec<AnalysisResult> = paths
        .par_iter()
        .map(|path| pipeline.process_file(extractor, path, config))
        .collect();

    let degraded = results.iter().filter(|r| r.is_degraded()).count();
    let succeeded = results.len() - degraded;
    log::info!("batch done: {succeeded} succeeded, {degraded} degraded");

    BatchSummary {
        results,
        succeeded,
        degraded,
        started_at,
        finished_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::PlainTextExtractor;
    use std::io::Write;

    #[test]
    fn test_empty_batch_is_valid() {
        let summary = process_batch(
            &[],
            &PlainTextExtractor::new(),
            &RunConfig::default(),
            &Pipeline::new(),
        );
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.degraded, 0);
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let mut file = std::fs::File::create(&good).unwrap();
        writeln!(file, "MENU\nrecipe ingredients").unwrap();
        let missing = dir.path().join("missing.txt");

        let paths = vec![good, missing];
        let summary = process_batch(
            &paths,
            &PlainTextExtractor::new(),
            &RunConfig::default(),
            &Pipeline::new(),
        );

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.degraded, 1);
        // input order preserved
        assert_eq!(summary.results[0].filename, "good.txt");
        assert!(summary.results[1].is_degraded());
    }
}
