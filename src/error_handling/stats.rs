//! Validation statistics tracking.
//!
//! Counts how many catalog entries were admitted into the working set and why
//! the others were excluded. Rejections are never shown to the user; they are
//! only reported through the logger.

use std::collections::HashMap;

use log::{info, warn};
use strum::IntoEnumIterator;

use super::types::RejectReason;

/// Per-load validation counters.
///
/// All rejection reasons are initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct ValidationStats {
    accepted: usize,
    rejected: HashMap<RejectReason, usize>,
}

impl Default for ValidationStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationStats {
    pub fn new() -> Self {
        let mut rejected = HashMap::new();
        for reason in RejectReason::iter() {
            rejected.insert(reason, 0);
        }

        ValidationStats {
            accepted: 0,
            rejected,
        }
    }

    /// Count one admitted entry.
    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }

    /// Count one excluded entry.
    pub fn record_rejected(&mut self, reason: RejectReason) {
        *self.rejected.entry(reason).or_insert(0) += 1;
    }

    /// Number of entries admitted into the working set.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Number of entries excluded for `reason`.
    pub fn rejected_count(&self, reason: RejectReason) -> usize {
        self.rejected.get(&reason).copied().unwrap_or(0)
    }

    /// Number of entries excluded for any reason.
    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }

    /// Logs a summary of the load.
    ///
    /// Rejections are logged at warn level, one line per non-zero reason.
    pub fn log_summary(&self, source: &str) {
        info!(
            "Loaded {} video{} from {}",
            self.accepted,
            if self.accepted == 1 { "" } else { "s" },
            source
        );

        let total_rejected = self.total_rejected();
        if total_rejected > 0 {
            warn!(
                "Skipped {} malformed catalog entr{}:",
                total_rejected,
                if total_rejected == 1 { "y" } else { "ies" }
            );
            for reason in RejectReason::iter() {
                let count = self.rejected_count(reason);
                if count > 0 {
                    warn!("   {}: {}", reason.as_str(), count);
                }
            }
        }
    }
}
