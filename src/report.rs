//! Console and JSON renderers for a validation report.
//!
//! Presentation only: the engine returns structured data and this module
//! decides how it looks. Contrast failures are printed as warnings, and the
//! exit-status decision stays with the caller.

use colored::Colorize;

use crate::types::{Report, ValidationResult};

fn render_result(result: &ValidationResult) {
    let marker = if result.pass {
        "PASS".green()
    } else {
        "WARN".yellow()
    };
    let fg = result.fg_hex.as_deref().unwrap_or("<missing>");
    let bg = result.bg_hex.as_deref().unwrap_or("<missing>");
    println!(
        "  {} {:<32} {:>6.2}:1  (needs {:.1}:1, {} on {})",
        marker, result.name, result.ratio, result.required_ratio, fg, bg
    );
}

/// Print the human-readable summary to stdout.
pub fn render(report: &Report) {
    println!("Contrast check: {} rules", report.results.len());
    for result in &report.results {
        render_result(result);
    }
    if report.overall_pass {
        println!("{}", "All contrast rules satisfied".green());
    } else {
        let failing = report.results.iter().filter(|r| !r.pass).count();
        println!(
            "{}",
            format!("{failing} rule(s) below threshold (non-blocking)").yellow()
        );
    }
}

/// Serialize the report as pretty JSON for machine consumers.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationResult;

    fn result(name: &str, ratio: f64, pass: bool) -> ValidationResult {
        ValidationResult {
            name: name.to_string(),
            ratio,
            pass,
            required_ratio: 4.5,
            fg_hex: Some("#FFFFFF".to_string()),
            bg_hex: Some("#0B0B0F".to_string()),
        }
    }

    #[test]
    fn json_report_carries_results_and_flag() {
        let report = Report {
            results: vec![result("text-on-bg", 19.64, true)],
            overall_pass: true,
        };
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["overall_pass"], true);
        assert_eq!(value["results"][0]["name"], "text-on-bg");
        assert_eq!(value["results"][0]["ratio"], 19.64);
    }

    #[test]
    fn json_missing_role_serializes_as_null() {
        let mut r = result("text-on-bg", 21.0, true);
        r.bg_hex = None;
        let report = Report {
            results: vec![r],
            overall_pass: true,
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert!(value["results"][0]["bg_hex"].is_null());
    }
}
