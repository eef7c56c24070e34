use crate::report::report_model::SuiteReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a suite report for terminal output.
///
/// Produces output like:
/// ```text
/// === Sessions: scripts ===
///
/// ✓ PASS  generate then accept (9 steps, 4 expectations)
/// ✗ FAIL  decline flow (5 steps, 2 expectations)
///     [FAIL] Step 4: OutcomeTitle did not hold (actual: Yay!)
///
/// === Results: 1 passed, 1 failed (2 total) ===
/// ```
pub fn format_console_report(report: &SuiteReport, verbose: u8) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Sessions: {} ===\n\n", report.suite_name));

    for result in &report.script_results {
        let marker = if result.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };

        out.push_str(&format!(
            "{}  {} ({} steps, {} expectations)\n",
            marker,
            result.script_name,
            result.steps_run,
            result.expectation_results.len()
        ));

        if let Some(ref error) = result.error {
            out.push_str(&format!("    [ERROR] {}\n", error));
        }

        for er in result.expectation_results.iter().filter(|er| !er.passed) {
            let detail = er.message.as_deref().unwrap_or("expectation failed");
            out.push_str(&format!("    [FAIL] Step {}: {}\n", er.step_index, detail));
        }

        if verbose > 1 {
            for line in result.transcript.lines() {
                out.push_str(&format!("    | {}\n", line));
            }
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total)",
        report.passed, report.failed, report.total
    ));

    if let Some(ms) = report.duration_ms {
        out.push_str(&format!(" in {:.1}s", ms as f64 / 1000.0));
    }

    out.push_str(" ===\n");
    out
}
