/*! Aggregate cleanup report, written once as `_cleanup_report.json` at the
end of a batch.
!*/
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::patterns::Category;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanupReport {
    pub files_processed: u64,
    pub files_modified: u64,
    pub files_failed: u64,
    pub total_substitutions: u64,
    pub total_bytes: u64,
    pub boilerplate_files: u64,
    pub boilerplate_chars: u64,
    pub per_category_totals: HashMap<Category, u64>,
}

/// Shared, lock-free accumulator written into by every worker; converted
/// into a [CleanupReport] once the batch finishes.
#[derive(Default)]
pub struct ReportAccumulator {
    files_processed: AtomicU64,
    files_modified: AtomicU64,
    files_failed: AtomicU64,
    total_substitutions: AtomicU64,
    total_bytes: AtomicU64,
    boilerplate_files: AtomicU64,
    boilerplate_chars: AtomicU64,
    per_category: std::sync::Mutex<HashMap<Category, u64>>,
}

impl ReportAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_processed(&self, bytes: u64) {
        self.files_processed.fetch_add(1, Ordering::Relaxed);
        self.total_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.files_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_substitutions(&self, total: u64, by_category: &HashMap<Category, u64>) {
        if total > 0 {
            self.files_modified.fetch_add(1, Ordering::Relaxed);
            self.total_substitutions.fetch_add(total, Ordering::Relaxed);
        }
        let mut guard = self.per_category.lock().expect("report mutex poisoned");
        for (category, count) in by_category {
            *guard.entry(*category).or_insert(0) += count;
        }
    }

    pub fn record_boilerplate(&self, chars_stripped: u64) {
        if chars_stripped > 0 {
            self.boilerplate_files.fetch_add(1, Ordering::Relaxed);
            self.boilerplate_chars
                .fetch_add(chars_stripped, Ordering::Relaxed);
        }
    }

    pub fn finish(self) -> CleanupReport {
        CleanupReport {
            files_processed: self.files_processed.load(Ordering::Relaxed),
            files_modified: self.files_modified.load(Ordering::Relaxed),
            files_failed: self.files_failed.load(Ordering::Relaxed),
            total_substitutions: self.total_substitutions.load(Ordering::Relaxed),
            total_bytes: self.total_bytes.load(Ordering::Relaxed),
            boilerplate_files: self.boilerplate_files.load(Ordering::Relaxed),
            boilerplate_chars: self.boilerplate_chars.load(Ordering::Relaxed),
            per_category_totals: self.per_category.into_inner().expect("report mutex poisoned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_across_calls() {
        let acc = ReportAccumulator::new();
        acc.record_processed(1000);
        acc.record_processed(2000);
        acc.record_failed();

        let mut by_category = HashMap::new();
        by_category.insert(Category::LongS, 3);
        acc.record_substitutions(3, &by_category);

        let report = acc.finish();
        assert_eq!(report.files_processed, 2);
        assert_eq!(report.files_failed, 1);
        assert_eq!(report.total_substitutions, 3);
        assert_eq!(report.total_bytes, 3000);
        assert_eq!(*report.per_category_totals.get(&Category::LongS).unwrap(), 3);
    }
}
