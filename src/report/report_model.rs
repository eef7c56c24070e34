use serde::{Deserialize, Serialize};

use crate::script::script_model::ScriptResult;

// ============================================================================
// Suite report — aggregates multiple ScriptResult instances
// ============================================================================

/// Aggregated report for a batch of replayed session scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite_name: String,

    pub total: usize,
    pub passed: usize,
    pub failed: usize,

    /// Total replay duration in milliseconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,

    pub script_results: Vec<ScriptResult>,
}

impl SuiteReport {
    /// Build a suite report, computing the pass/fail counts.
    pub fn from_results(suite_name: &str, results: Vec<ScriptResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            suite_name: suite_name.to_string(),
            total,
            passed,
            failed: total - passed,
            duration_ms: None,
            script_results: results,
        }
    }

    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
