//! Compliance dashboard: search, paging, statistics and export.

use shared_types::{
    ExportFormat, ExportJob, LogCriteria, LogFilterParams, LogRecord, LogStats, SearchSummary,
};

use crate::aggregate;
use crate::config;
use crate::filter::FilterContext;
use crate::store::LogStore;

/// One page of the results table plus its "Showing first-last of total" range.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage<'a> {
    pub rows: Vec<&'a LogRecord>,
    /// 1-based index of the first row, 0 when the page is empty.
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl ResultPage<'_> {
    pub fn range_label(&self) -> String {
        format!("Showing {}-{} of {} entries", self.first, self.last, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct ComplianceDesk {
    store: LogStore,
    criteria: LogCriteria,
    page_size: usize,
    window_days: i64,
}

impl ComplianceDesk {
    pub fn new(store: LogStore) -> Self {
        let config = config::portal_config();
        Self {
            store,
            criteria: LogCriteria::default(),
            page_size: config.page_size,
            window_days: config.recent_window_days,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn criteria(&self) -> &LogCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: LogCriteria) {
        self.criteria = criteria;
    }

    pub fn apply_params(&mut self, params: LogFilterParams) {
        self.criteria = params.into();
    }

    /// Clear search text, date and every select back to "all".
    pub fn reset_filters(&mut self) {
        self.criteria = LogCriteria::default();
        tracing::debug!("compliance filters reset");
    }

    pub fn context(&self) -> FilterContext {
        FilterContext::current().with_window_days(self.window_days)
    }

    pub fn matches_at(&self, ctx: &FilterContext) -> Vec<&LogRecord> {
        self.store.view_at(&self.criteria, ctx)
    }

    pub fn matches(&self) -> Vec<&LogRecord> {
        self.matches_at(&self.context())
    }

    pub fn search_at(&self, ctx: &FilterContext) -> SearchSummary {
        let summary = SearchSummary {
            matched: self.matches_at(ctx).len(),
            total: self.store.len(),
        };
        tracing::info!(matched = summary.matched, total = summary.total, "{}", summary.message());
        summary
    }

    pub fn search(&self) -> SearchSummary {
        self.search_at(&self.context())
    }

    /// First page of matches; the table never pages further.
    pub fn page_at(&self, ctx: &FilterContext) -> ResultPage<'_> {
        let matches = self.matches_at(ctx);
        let total = matches.len();
        let rows: Vec<&LogRecord> = matches.into_iter().take(self.page_size).collect();
        ResultPage {
            first: usize::from(!rows.is_empty()),
            last: rows.len(),
            total,
            rows,
        }
    }

    pub fn page(&self) -> ResultPage<'_> {
        self.page_at(&self.context())
    }

    pub fn stats(&self) -> LogStats {
        self.store.stats()
    }

    pub fn filtered_stats_at(&self, ctx: &FilterContext) -> LogStats {
        aggregate::summarize(self.matches_at(ctx))
    }

    pub fn filtered_stats(&self) -> LogStats {
        self.filtered_stats_at(&self.context())
    }

    /// Queue an export of every current match (not just the visible page).
    pub fn export_at(&self, format: ExportFormat, ctx: &FilterContext) -> ExportJob {
        let job = ExportJob {
            format,
            record_ids: self.matches_at(ctx).iter().map(|r| r.id.clone()).collect(),
        };
        tracing::info!(format = format.as_str(), count = job.record_ids.len(), "{}", job.summary());
        job
    }

    pub fn export(&self, format: ExportFormat) -> ExportJob {
        self.export_at(format, &self.context())
    }
}
