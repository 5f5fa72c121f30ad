//! Text and JSON rendering of calculator output.

use levguard::{CalculationResult, LEVERAGE_STEPS};
use log::warn;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{Error, Result};

/// Most rows a single table may request.
pub const MAX_TABLE_ROWS: usize = 10_000;

/// One row of a leverage table, flattened for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow<'a> {
    pub stop_pct: f64,
    #[serde(flatten)]
    pub result: &'a CalculationResult,
}

/// Log every warning on a result.
pub fn log_warnings(result: &CalculationResult) {
    for warning in &result.warnings {
        warn!("{warning}");
    }
}

/// Render a single calculation.
pub fn result(result: &CalculationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Render a leverage table.
pub fn table(rows: &[(f64, CalculationResult)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<TableRow<'_>> = rows
                .iter()
                .map(|(stop_pct, result)| TableRow {
                    stop_pct: *stop_pct,
                    result,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Text => {
            let mut out = format!(
                "{:>8}  {:>10}  {:>6}  {:>14}  {:>9}  {:<6}\n",
                "STOP %", "L*", "MAX", "LIQUIDATION", "MARGIN %", "RISK"
            );
            for (stop_pct, r) in rows {
                out.push_str(&format!(
                    "{:>8.2}  {:>10.2}  {:>5}x  {:>14.4}  {:>9.4}  {:<6}{}\n",
                    stop_pct,
                    r.l_star,
                    r.l_max,
                    r.liquidation_price,
                    r.margin_pct,
                    r.risk_level.to_string(),
                    if r.is_valid { "" } else { "  (invalid)" },
                ));
            }
            Ok(out)
        }
    }
}

/// Render the leverage tier list.
pub fn tiers(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&LEVERAGE_STEPS)?),
        OutputFormat::Text => Ok(LEVERAGE_STEPS
            .iter()
            .map(|step| format!("{step}x"))
            .collect::<Vec<_>>()
            .join(" ")),
    }
}

/// Stop distances from `from` to `to` inclusive, `step` apart.
pub fn percent_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !(from.is_finite() && to.is_finite() && step.is_finite()) {
        return Err(Error::Argument("range bounds must be finite".into()));
    }
    if step <= 0.0 {
        return Err(Error::Argument(format!("step must be > 0, got {step}")));
    }
    if from < 0.0 || from > to {
        return Err(Error::Argument(format!(
            "range must satisfy 0 <= from <= to, got {from}..{to}"
        )));
    }
    // Row count stays in f64 until bounded; the usize cast saturates.
    let intervals = ((to - from) / step + 1e-9).floor();
    if intervals >= MAX_TABLE_ROWS as f64 {
        return Err(Error::Argument(format!(
            "range produces {} rows, at most {MAX_TABLE_ROWS} allowed",
            intervals + 1.0
        )));
    }
    let count = intervals as usize + 1;
    Ok((0..count).map(|i| from + i as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use levguard::{MetricsRequest, RiskParams, Side, calculate_leverage_metrics, leverage_table};

    fn sample() -> CalculationResult {
        calculate_leverage_metrics(&MetricsRequest::new(50_000.0, 49_000.0, Side::Long))
    }

    #[test]
    fn text_result() {
        let out = result(&sample(), OutputFormat::Text).unwrap();
        assert!(out.starts_with("LEVERAGE CHECK: VALID"));
        assert!(out.contains("Safe max (tier):   40x"));
    }

    #[test]
    fn json_result() {
        let out = result(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["l_max"], 40.0);
        assert_eq!(value["risk_level"], "medium");
        assert_eq!(value["is_valid"], true);
        assert!(value["risk_value"].is_null());
    }

    #[test]
    fn json_table_flattens_rows() {
        let rows = leverage_table(100.0, Side::Short, RiskParams::default(), &[1.0, 2.0]);
        let out = table(&rows, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["stop_pct"], 2.0);
        assert_eq!(value[1]["l_max"], 40.0);
    }

    #[test]
    fn text_table_has_header_and_rows() {
        let rows = leverage_table(100.0, Side::Long, RiskParams::default(), &[0.0, 1.0]);
        let out = table(&rows, OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().nth(1).unwrap().ends_with("(invalid)"));
    }

    #[test]
    fn tier_list() {
        let text = tiers(OutputFormat::Text).unwrap();
        assert!(text.starts_with("1x 2x 3x"));
        assert!(text.ends_with("100x"));
        assert_eq!(
            tiers(OutputFormat::Json).unwrap(),
            "[1.0,2.0,3.0,4.0,5.0,6.0,8.0,10.0,12.0,15.0,20.0,25.0,30.0,40.0,50.0,60.0,75.0,80.0,90.0,100.0]"
        );
    }

    #[test]
    fn range_inclusive() {
        let pcts = percent_range(0.5, 2.0, 0.5).unwrap();
        assert_eq!(pcts, vec![0.5, 1.0, 1.5, 2.0]);
        assert_eq!(percent_range(1.0, 1.0, 0.1).unwrap(), vec![1.0]);
    }

    #[test]
    fn range_rejects_nonsense() {
        assert!(percent_range(1.0, 2.0, 0.0).is_err());
        assert!(percent_range(3.0, 2.0, 0.5).is_err());
        assert!(percent_range(-1.0, 2.0, 0.5).is_err());
        assert!(percent_range(0.0, f64::INFINITY, 1.0).is_err());
        assert!(percent_range(0.0, 100.0, 0.001).is_err());
    }

    #[test]
    fn range_rejects_huge_row_counts() {
        assert!(percent_range(0.0, 1e20, 1.0).is_err());
        assert!(percent_range(0.0, f64::MAX, 1e-300).is_err());
        // Exactly at the limit is still allowed
        let limit = MAX_TABLE_ROWS as f64 - 1.0;
        assert_eq!(percent_range(0.0, limit, 1.0).unwrap().len(), MAX_TABLE_ROWS);
    }
}
