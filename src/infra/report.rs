// ============================================================
// Layer 6 — Report Rendering
// ============================================================
// Turns a BaselineReport into what the user sees.
//
// Text example:
//
//   	In which store will the next sale happen, based on past orders?
//   >>Running ZeroR over 1574 training orders (fraction 1/3)...
//   	The predicted store is Baldwin Bikes
//   >>Measuring prediction accuracy over 3148 test orders...
//   	Prediction accuracy was 68.20 percent (2147 of 3148).
//
// A missing rule prints as "insufficient data" and an undefined
// accuracy as "not applicable", never as a blank or 0%.
//
// JSON mirrors the same fields; both sentinels become `null`.

use anyhow::Result;
use serde::Serialize;

use crate::application::evaluate_use_case::BaselineReport;
use crate::ml::rule_builder::LabelCount;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    observations:   usize,
    train_fraction: String,
    train_size:     usize,
    test_size:      usize,
    rule:           Option<&'a str>,
    matches:        usize,
    accuracy:       Option<f64>,
    distribution:   &'a [LabelCount],
}

/// Human-readable console report
pub fn render_text(report: &BaselineReport, show_distribution: bool) -> String {
    let mut lines = vec![
        "\tIn which store will the next sale happen, based on past orders?".to_string(),
        format!(
            ">>Running ZeroR over {} training orders (fraction {})...",
            report.train_size, report.train_fraction,
        ),
        format!("\tThe predicted store is {}", report.rule),
    ];

    if show_distribution && !report.distribution.is_empty() {
        lines.push(">>Training distribution:".to_string());
        lines.extend(
            report
                .distribution
                .iter()
                .map(|LabelCount { label, count }| format!("\t{label}: {count}")),
        );
    }

    lines.push(format!(
        ">>Measuring prediction accuracy over {} test orders...",
        report.test_size
    ));
    lines.push(match report.accuracy.percent() {
        Some(pct) => format!(
            "\tPrediction accuracy was {:.2} percent ({} of {}).",
            pct, report.accuracy.matches, report.accuracy.total,
        ),
        None => "\tPrediction accuracy: not applicable (no test orders).".to_string(),
    });

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pretty-printed JSON report
pub fn render_json(report: &BaselineReport) -> Result<String> {
    let json = JsonReport {
        observations:   report.observations,
        train_fraction: report.train_fraction.to_string(),
        train_size:     report.train_size,
        test_size:      report.test_size,
        rule:           report.rule.label(),
        matches:        report.accuracy.matches,
        accuracy:       report.accuracy.fraction(),
        distribution:   &report.distribution,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::evaluate_use_case::run_baseline;
    use crate::data::splitter::TrainFraction;
    use crate::domain::observation::ObservationSequence;

    fn report_for(labels: &[&str]) -> BaselineReport {
        let seq = ObservationSequence::from_labels(labels.iter().copied());
        run_baseline(&seq, TrainFraction::ONE_THIRD)
    }

    #[test]
    fn test_text_with_rule_and_accuracy() {
        let report = report_for(&["S1", "S1", "S1", "S2", "S2", "S3", "S3", "S3", "S3"]);
        let text   = render_text(&report, false);

        assert!(text.contains("The predicted store is S1"));
        assert!(text.contains("Prediction accuracy was 0.00 percent (0 of 6)."));
        assert!(!text.contains("Training distribution"));
    }

    #[test]
    fn test_text_sentinels_are_distinct() {
        let report = report_for(&[]);
        let text   = render_text(&report, true);

        assert!(text.contains("The predicted store is insufficient data"));
        assert!(text.contains("not applicable"));
        assert!(!text.contains("0.00 percent"));
    }

    #[test]
    fn test_text_distribution() {
        let report = report_for(&["B", "A", "B", "A", "B", "B"]);
        let text   = render_text(&report, true);

        assert!(text.contains(">>Training distribution:\n\tB: 1\n\tA: 1\n"));
        assert!(text.contains("The predicted store is B"));
    }

    #[test]
    fn test_text_full_layout() {
        let report = report_for(&["X"; 12]);

        assert_eq!(
            render_text(&report, false),
            "\tIn which store will the next sale happen, based on past orders?\n\
             >>Running ZeroR over 4 training orders (fraction 1/3)...\n\
             \tThe predicted store is X\n\
             >>Measuring prediction accuracy over 8 test orders...\n\
             \tPrediction accuracy was 100.00 percent (8 of 8).\n"
        );
    }

    #[test]
    fn test_json_fields() {
        let report = report_for(&["X"; 12]);
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(value["rule"], "X");
        assert_eq!(value["accuracy"], 1.0);
        assert_eq!(value["train_size"], 4);
        assert_eq!(value["test_size"], 8);
        assert_eq!(value["train_fraction"], "1/3");
        assert_eq!(value["distribution"][0]["label"], "X");
        assert_eq!(value["distribution"][0]["count"], 4);
    }

    #[test]
    fn test_json_sentinels_are_null() {
        let report = report_for(&[]);
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert!(value["rule"].is_null());
        assert!(value["accuracy"].is_null());
    }

    #[test]
    fn test_json_no_rule_with_real_zero_accuracy() {
        let report = report_for(&["S1", "S2"]);
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert!(value["rule"].is_null());
        assert_eq!(value["accuracy"], 0.0);
    }
}
