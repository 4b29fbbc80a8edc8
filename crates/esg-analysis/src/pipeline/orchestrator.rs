//! Pipeline orchestrator.

use std::fmt;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use esg_core::config::{EsgConfig, ScoringConfig};
use esg_core::errors::PipelineError;
use esg_core::types::{CompanyAggregate, NewsRecord, ScoredRecord};

use crate::aggregation::{group_by_company, Aggregator, CompanyGroup};
use crate::greenwash::GreenwashDetector;
use crate::keywords::KeywordCatalog;
use crate::loader::{LoadedRecords, RecordLoader};
use crate::output::write_table;
use crate::scoring::EsgScoreEngine;
use crate::sentiment::{LexiconSentiment, SentimentScorer, VaderSentiment};

/// Counters of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineDiagnostics {
    /// Data rows read from the input.
    pub rows_read: usize,
    /// Rows dropped for an empty company or empty cleaned text.
    pub rows_dropped: usize,
    pub records_scored: usize,
    /// Output rows.
    pub companies: usize,
    pub flagged: usize,
}

impl fmt::Display for PipelineDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PipelineDiagnostics {{ rows_read={}, rows_dropped={}, records_scored={}, companies={}, flagged={} }}",
            self.rows_read, self.rows_dropped, self.records_scored, self.companies, self.flagged,
        )
    }
}

/// Final table plus run diagnostics.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// One row per company, sorted by `esg_last` descending.
    pub table: Vec<CompanyAggregate>,
    pub diagnostics: PipelineDiagnostics,
}

/// Sequences scoring, aggregation and greenwash detection.
pub struct Pipeline<'a> {
    catalog: &'a KeywordCatalog,
    sentiment: &'a dyn SentimentScorer,
    scoring: ScoringConfig,
    aggregator: Aggregator,
    detector: GreenwashDetector,
    parallel: bool,
    pool: Option<rayon::ThreadPool>,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &EsgConfig,
        catalog: &'a KeywordCatalog,
        sentiment: &'a dyn SentimentScorer,
    ) -> Result<Self, PipelineError> {
        let parallel = config.pipeline.effective_parallel();
        let threads = config.pipeline.effective_threads();

        // A dedicated pool only when a thread count is pinned; otherwise
        // rayon's global pool is used.
        let pool = if parallel && threads > 0 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| PipelineError::WorkerPool(e.to_string()))?,
            )
        } else {
            None
        };

        Ok(Self {
            catalog,
            sentiment,
            scoring: config.scoring.clone(),
            aggregator: Aggregator::new(),
            detector: GreenwashDetector::new(&config.greenwash)?,
            parallel,
            pool,
        })
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn engine(&self) -> EsgScoreEngine<'a> {
        EsgScoreEngine::from_config(self.catalog, self.sentiment, &self.scoring)
    }

    /// Score every record, preserving input order.
    pub fn score_records(&self, records: Vec<NewsRecord>) -> Vec<ScoredRecord> {
        let engine = self.engine();
        if self.parallel {
            self.install(|| records.into_par_iter().map(|r| engine.score_record(r)).collect())
        } else {
            records.into_iter().map(|r| engine.score_record(r)).collect()
        }
    }

    /// Aggregate, detect, left-merge and sort already scored records.
    pub fn summarize(&self, scored: &[ScoredRecord]) -> Vec<CompanyAggregate> {
        let groups = group_by_company(scored);

        let (mut table, verdicts) = if self.parallel {
            self.install(|| {
                let table: Vec<CompanyAggregate> =
                    groups.par_iter().filter_map(|g| self.aggregator.summarize(g)).collect();
                let verdicts: FxHashMap<String, bool> =
                    groups.par_iter().filter_map(|g| self.verdict(g)).collect();
                (table, verdicts)
            })
        } else {
            let table: Vec<CompanyAggregate> =
                groups.iter().filter_map(|g| self.aggregator.summarize(g)).collect();
            let verdicts: FxHashMap<String, bool> =
                groups.iter().filter_map(|g| self.verdict(g)).collect();
            (table, verdicts)
        };

        merge_verdicts(&mut table, &verdicts);
        sort_table(&mut table);
        table
    }

    /// Verdict for companies with enough history; others are absent and
    /// default to unflagged in the merge.
    fn verdict(&self, group: &CompanyGroup<'_>) -> Option<(String, bool)> {
        self.detector
            .assess(&group.records)
            .map(|a| {
                if a.is_flagged() {
                    tracing::debug!(
                        company = group.company,
                        last = a.last,
                        prior_mean = a.prior_mean,
                        prior_std = a.prior_std,
                        promo_hits = a.promo_hits,
                        "greenwash flag raised"
                    );
                }
                (group.company.to_string(), a.is_flagged())
            })
    }

    /// Run on already loaded records.
    pub fn run_records(&self, loaded: LoadedRecords) -> PipelineOutput {
        let rows_read = loaded.rows_read;
        let rows_dropped = loaded.rows_dropped;

        let scored = self.score_records(loaded.records);
        let table = self.summarize(&scored);

        let diagnostics = PipelineDiagnostics {
            rows_read,
            rows_dropped,
            records_scored: scored.len(),
            companies: table.len(),
            flagged: table.iter().filter(|r| r.greenwash_flag).count(),
        };
        tracing::info!(%diagnostics, parallel = self.parallel, "pipeline finished");

        PipelineOutput { table, diagnostics }
    }

    /// Load `input` and run.
    pub fn run(&self, input: &Path) -> Result<PipelineOutput, PipelineError> {
        let loaded = RecordLoader::default().load_path(input)?;
        Ok(self.run_records(loaded))
    }

    fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

/// Left join: every company keeps its row, missing verdicts read as false.
fn merge_verdicts(table: &mut [CompanyAggregate], verdicts: &FxHashMap<String, bool>) {
    for row in table {
        row.greenwash_flag = verdicts.get(&row.company).copied().unwrap_or(false);
    }
}

/// Descending `esg_last`, ties by company name.
fn sort_table(table: &mut [CompanyAggregate]) {
    table.sort_by(|a, b| {
        b.esg_last
            .total_cmp(&a.esg_last)
            .then_with(|| a.company.cmp(&b.company))
    });
}

/// Input, catalog and output locations of a run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub input: PathBuf,
    pub keywords: PathBuf,
    pub output: PathBuf,
}

/// Load the catalog and lexicon, run the pipeline and write the table.
pub fn execute(config: &EsgConfig, paths: &RunPaths) -> Result<PipelineOutput, PipelineError> {
    let catalog = KeywordCatalog::load(&paths.keywords)?;

    let mut sentiment = VaderSentiment::new();
    if let Some(lexicon) = &config.scoring.lexicon_path {
        sentiment = sentiment.with_supplement(LexiconSentiment::new().with_lexicon_file(lexicon)?);
    }

    let pipeline = Pipeline::new(config, &catalog, &sentiment)?;
    let output = pipeline.run(&paths.input)?;

    write_table(
        &paths.output,
        &output.table,
        config.output.effective_format(),
        config.output.effective_extended(),
    )?;
    Ok(output)
}
