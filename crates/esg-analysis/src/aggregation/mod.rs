//! Per-company aggregation.
//!
//! Records are grouped by company in order of first appearance. Within a
//! group, records are ordered chronologically with undated records first;
//! the sort is stable, so equal dates (and an all-undated group) keep input
//! order. "Last" always means the final record of that ordering.

use rustc_hash::FxHashMap;

use esg_core::constants::{SENTIMENT_NEGATIVE_THRESHOLD, SENTIMENT_POSITIVE_THRESHOLD};
use esg_core::types::{CompanyAggregate, ExtendedMetrics, ScoredRecord};

/// All records of one company, chronologically ordered.
#[derive(Debug, Clone)]
pub struct CompanyGroup<'a> {
    pub company: &'a str,
    pub records: Vec<&'a ScoredRecord>,
}

impl<'a> CompanyGroup<'a> {
    /// Most recent record.
    pub fn last(&self) -> Option<&'a ScoredRecord> {
        self.records.last().copied()
    }

    /// Scores in chronological order.
    pub fn scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.esg_score()).collect()
    }
}

/// Stable chronological order, undated records first.
pub fn sort_chronologically(records: &mut [&ScoredRecord]) {
    records.sort_by_key(|r| r.date());
}

/// Group records by company, preserving first-appearance order of companies.
pub fn group_by_company(records: &[ScoredRecord]) -> Vec<CompanyGroup<'_>> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<CompanyGroup<'_>> = Vec::new();

    for record in records {
        let slot = *index.entry(record.company()).or_insert_with(|| {
            groups.push(CompanyGroup {
                company: record.company(),
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    for group in &mut groups {
        sort_chronologically(&mut group.records);
    }
    groups
}

/// Reduces scored records to one summary row per company.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// Summarize one group. The greenwash flag starts false; the pipeline
    /// merges the detector's verdict in afterwards.
    ///
    /// Returns `None` only for an empty group.
    pub fn summarize(&self, group: &CompanyGroup<'_>) -> Option<CompanyAggregate> {
        let last = group.last()?;
        let scores = group.scores();
        let n = scores.len();

        Some(CompanyAggregate {
            company: group.company.to_string(),
            esg_avg: scores.iter().sum::<f64>() / n as f64,
            esg_last: last.esg_score(),
            n_docs: n,
            greenwash_flag: false,
            extended: extended_metrics(&group.records),
        })
    }

    /// Summarize every company in `records`, in first-appearance order.
    pub fn aggregate(&self, records: &[ScoredRecord]) -> Vec<CompanyAggregate> {
        group_by_company(records)
            .iter()
            .filter_map(|g| self.summarize(g))
            .collect()
    }
}

fn extended_metrics(records: &[&ScoredRecord]) -> ExtendedMetrics {
    let n = records.len() as f64;
    let mean_hits = |f: fn(&ScoredRecord) -> u32| records.iter().map(|r| f64::from(f(r))).sum::<f64>() / n;
    let share = |pred: fn(f64) -> bool| {
        records.iter().filter(|r| pred(r.score.sentiment)).count() as f64 / n * 100.0
    };

    ExtendedMetrics {
        esg_env: mean_hits(|r| r.score.hits.env),
        esg_soc: mean_hits(|r| r.score.hits.soc),
        esg_gov: mean_hits(|r| r.score.hits.gov),
        sentiment_pos: share(|s| s >= SENTIMENT_POSITIVE_THRESHOLD),
        sentiment_neg: share(|s| s <= SENTIMENT_NEGATIVE_THRESHOLD),
        market_cap: records.iter().rev().find_map(|r| r.record.market_cap),
        debt: records.iter().rev().find_map(|r| r.record.debt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use esg_core::types::{DimensionHits, NewsRecord, RecordScore};

    fn record(company: &str, day: Option<u32>, score: f64) -> ScoredRecord {
        ScoredRecord {
            record: NewsRecord {
                company: company.to_string(),
                date: day.map(|d| {
                    NaiveDate::from_ymd_opt(2024, 1, d)
                        .unwrap()
                        .and_hms_opt(0, 0, 0)
                        .unwrap()
                }),
                title: String::new(),
                content: String::new(),
                source: String::new(),
                cleaned_text: "text".to_string(),
                market_cap: None,
                debt: None,
            },
            score: RecordScore {
                hits: DimensionHits::default(),
                sentiment: 0.0,
                weight: 1.0,
                score,
            },
        }
    }

    #[test]
    fn test_one_row_per_company() {
        let records = vec![
            record("A", Some(1), 1.0),
            record("B", Some(1), 2.0),
            record("A", Some(2), 3.0),
            record("C", None, 4.0),
        ];
        let rows = Aggregator::new().aggregate(&records);
        assert_eq!(rows.len(), 3);
        let names: Vec<_> = rows.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_last_is_chronological_not_input_order() {
        let records = vec![
            record("A", Some(5), 5.0),
            record("A", Some(1), 1.0),
            record("A", Some(3), 3.0),
        ];
        let rows = Aggregator::new().aggregate(&records);
        assert_eq!(rows[0].esg_last, 5.0);
        assert_eq!(rows[0].esg_avg, 3.0);
        assert_eq!(rows[0].n_docs, 3);
    }

    #[test]
    fn test_undated_records_sort_first() {
        let records = vec![record("A", Some(2), 2.0), record("A", None, 9.0)];
        let rows = Aggregator::new().aggregate(&records);
        assert_eq!(rows[0].esg_last, 2.0);
    }

    #[test]
    fn test_all_undated_falls_back_to_input_order() {
        let records = vec![record("A", None, 1.0), record("A", None, 7.0), record("A", None, 4.0)];
        let rows = Aggregator::new().aggregate(&records);
        assert_eq!(rows[0].esg_last, 4.0);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let records = vec![record("A", Some(1), 1.0), record("A", Some(1), 2.0)];
        let rows = Aggregator::new().aggregate(&records);
        assert_eq!(rows[0].esg_last, 2.0);
    }

    #[test]
    fn test_extended_metrics() {
        let mut a = record("A", Some(1), 1.0);
        a.score.sentiment = 0.5;
        a.score.hits = DimensionHits { env: 2, soc: 0, gov: 1 };
        a.record.market_cap = Some(10.0);
        let mut b = record("A", Some(2), 1.0);
        b.score.sentiment = -0.5;
        let rows = Aggregator::new().aggregate(&[a, b]);
        let ext = &rows[0].extended;
        assert_eq!(ext.esg_env, 1.0);
        assert_eq!(ext.esg_gov, 0.5);
        assert_eq!(ext.sentiment_pos, 50.0);
        assert_eq!(ext.sentiment_neg, 50.0);
        assert_eq!(ext.market_cap, Some(10.0));
        assert_eq!(ext.debt, None);
    }

    #[test]
    fn test_average_is_plain_sum_over_count() {
        let records = vec![record("A", Some(1), 0.1), record("A", Some(2), 0.2), record("A", Some(3), 0.3)];
        let rows = Aggregator::new().aggregate(&records);
        assert_eq!(rows[0].esg_avg, (0.1 + 0.2 + 0.3) / 3.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(Aggregator::new().aggregate(&[]).is_empty());
    }
}
