//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::runner::CaseResult;

/// Aggregated outcome of a conformance run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceSummary {
    /// Number of cases run.
    pub total: usize,
    /// Number of cases that passed.
    pub passed: usize,
    /// Number of cases that failed.
    pub failed: usize,
    /// Individual case results.
    pub results: Vec<CaseResult>,
}

impl ConformanceSummary {
    /// Build a summary from individual case results.
    #[must_use]
    pub fn from_results(results: Vec<CaseResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    /// `true` when no case failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// A conformance report combining run metadata and results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: ConformanceSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Function | Expected | Actual | Status |\n");
        out.push_str("|------|----------|----------|--------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | `{}` | `{}` | {} |\n",
                r.name, r.function, r.expected, r.actual, status
            ));
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> CaseResult {
        CaseResult {
            name: name.to_string(),
            function: String::from("strpos"),
            passed,
            expected: String::from("0"),
            actual: String::from(if passed { "0" } else { "1" }),
        }
    }

    #[test]
    fn summary_counts_passed_and_failed() {
        let summary = ConformanceSummary::from_results(vec![
            result("a", true),
            result("b", false),
            result("c", true),
        ]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn markdown_lists_every_case() {
        let report = ConformanceReport {
            title: String::from("report"),
            timestamp: String::from("now"),
            summary: ConformanceSummary::from_results(vec![result("a", true), result("b", false)]),
        };
        let md = report.to_markdown();
        assert!(md.contains("| a | strpos | `0` | `0` | PASS |"));
        assert!(md.contains("| b | strpos | `0` | `1` | FAIL |"));
    }

    #[test]
    fn json_rendering_round_trips() {
        let report = ConformanceReport {
            title: String::from("report"),
            timestamp: String::from("now"),
            summary: ConformanceSummary::from_results(vec![result("a", true)]),
        };
        let parsed: ConformanceReport =
            serde_json::from_str(&report.to_json()).expect("report JSON should parse");
        assert_eq!(parsed.summary.total, 1);
        assert!(parsed.summary.all_passed());
    }
}
