//! Summary statistics over a log collection.

use std::collections::BTreeMap;

use shared_types::{LogRecord, LogStats, ReviewStatus, StatusCount};

/// Share of `count` in `total` as a percentage; `0.0` when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Count per review status, zero counts included.
pub fn count_by_status<'a, I>(records: I) -> Vec<(ReviewStatus, usize)>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut counts: BTreeMap<ReviewStatus, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.status).or_insert(0) += 1;
    }
    ReviewStatus::ALL
        .into_iter()
        .map(|status| (status, counts.get(&status).copied().unwrap_or(0)))
        .collect()
}

pub fn count_by_department<'a, I>(records: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.department.clone()).or_insert(0) += 1;
    }
    counts
}

/// Derive the dashboard statistics. Works on the full store or a filtered view.
pub fn summarize<'a, I>(records: I) -> LogStats
where
    I: IntoIterator<Item = &'a LogRecord>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();
    let total = records.clone().count();
    let by_status = count_by_status(records.clone())
        .into_iter()
        .map(|(status, count)| StatusCount {
            status,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    LogStats {
        total,
        by_status,
        by_department: count_by_department(records),
    }
}
