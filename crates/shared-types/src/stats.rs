use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::log::ReviewStatus;

/// Count and share of one review status within a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: ReviewStatus,
    pub count: usize,
    /// `count / total * 100`, or `0.0` for an empty collection.
    pub percentage: f64,
}

/// Summary widget data derived from a log collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogStats {
    pub total: usize,
    /// One entry per review status, zero counts included, in `ReviewStatus::ALL` order.
    pub by_status: Vec<StatusCount>,
    pub by_department: BTreeMap<String, usize>,
}

impl LogStats {
    pub fn count_for(&self, status: ReviewStatus) -> usize {
        self.by_status
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    pub fn percentage_for(&self, status: ReviewStatus) -> f64 {
        self.by_status
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.percentage)
            .unwrap_or(0.0)
    }

    pub fn department_count(&self, department: &str) -> usize {
        self.by_department.get(department).copied().unwrap_or(0)
    }
}
