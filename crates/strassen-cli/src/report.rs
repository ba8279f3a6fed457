//! Machine-readable run report.

use serde::Serialize;

use strassen_core::observers::RecursionStats;
use strassen_core::options::StrassenConfig;
use strassen_core::{Scalar, StrassenError};
use strassen_orchestration::interfaces::MultiplicationResult;
use strassen_orchestration::orchestrator::analyze_comparison_results;

/// Outcome of one multiplier within a run.
#[derive(Debug, Serialize)]
pub struct AlgorithmReport<T> {
    pub algorithm: String,
    pub duration_ms: f64,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub stats: RecursionStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_sum: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Vec<Vec<T>>>,
}

/// Everything `--json` prints.
#[derive(Debug, Serialize)]
pub struct RunReport<T> {
    pub size: usize,
    pub config: StrassenConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub results: Vec<AlgorithmReport<T>>,
    /// Whether every successful multiplier agreed; absent for a single one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent: Option<bool>,
}

impl<T: Scalar + Serialize> RunReport<T> {
    /// Build a report; `include_product` embeds every product row by row.
    #[must_use]
    pub fn new(
        size: usize,
        config: &StrassenConfig,
        seed: Option<u64>,
        results: &[MultiplicationResult<T>],
        include_product: bool,
    ) -> Self {
        let consistent = if results.len() > 1 {
            match analyze_comparison_results(results) {
                Ok(()) => Some(true),
                Err(StrassenError::Mismatch) => Some(false),
                Err(_) => None,
            }
        } else {
            None
        };
        Self {
            size,
            config: config.clone(),
            seed,
            results: results
                .iter()
                .map(|r| algorithm_report(r, include_product))
                .collect(),
            consistent,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn algorithm_report<T: Scalar>(
    result: &MultiplicationResult<T>,
    include_product: bool,
) -> AlgorithmReport<T> {
    let product = result.outcome.as_ref().ok();
    AlgorithmReport {
        algorithm: result.algorithm.clone(),
        duration_ms: result.duration.as_secs_f64() * 1000.0,
        ok: product.is_some(),
        error: result.outcome.as_ref().err().map(ToString::to_string),
        stats: result.stats,
        trace: product.map(strassen_core::Matrix::trace),
        element_sum: product.map(strassen_core::Matrix::element_sum),
        product: product.filter(|_| include_product).map(strassen_core::Matrix::to_rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use strassen_core::generator::demo_pair;
    use strassen_core::{naive_multiply, Matrix};

    fn demo_result(name: &str) -> MultiplicationResult<i64> {
        let (a, b) = demo_pair();
        MultiplicationResult {
            algorithm: name.into(),
            outcome: naive_multiply(&a, &b),
            duration: Duration::from_millis(2),
            stats: RecursionStats::default(),
        }
    }

    #[test]
    fn single_result_report() {
        let report = RunReport::new(4, &StrassenConfig::default(), None, &[demo_result("Strassen")], false);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["size"], 4);
        assert_eq!(json["config"]["threshold"], 64);
        assert_eq!(json["results"][0]["algorithm"], "Strassen");
        assert_eq!(json["results"][0]["ok"], true);
        assert_eq!(json["results"][0]["trace"], 80 + 214 + 316 + 386);
        assert!(json["results"][0].get("product").is_none());
        assert!(json.get("consistent").is_none());
        assert!(json.get("seed").is_none());
    }

    #[test]
    fn report_with_product() {
        let report = RunReport::new(4, &StrassenConfig::default(), Some(42), &[demo_result("Naive")], true);
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["results"][0]["product"][0], serde_json::json!([80, 70, 60, 50]));
    }

    #[test]
    fn comparison_report() {
        let failed = MultiplicationResult::<i64> {
            algorithm: "Broken".into(),
            outcome: Err(StrassenError::InvalidSize { size: 3 }),
            duration: Duration::ZERO,
            stats: RecursionStats::default(),
        };
        let results = vec![demo_result("Strassen"), demo_result("Naive"), failed];
        let report = RunReport::new(4, &StrassenConfig::default(), None, &results, false);
        assert_eq!(report.consistent, Some(true));
        let broken = &report.results[2];
        assert!(!broken.ok);
        assert!(broken.error.as_deref().unwrap().contains("invalid size 3"));
        assert!(broken.trace.is_none());
    }

    #[test]
    fn all_failed_report_has_no_verdict() {
        let failed = |name: &str| MultiplicationResult::<i64> {
            algorithm: name.into(),
            outcome: Err(StrassenError::Timeout("deadline reached".into())),
            duration: Duration::ZERO,
            stats: RecursionStats::default(),
        };
        let report = RunReport::new(
            256,
            &StrassenConfig::default(),
            None,
            &[failed("Strassen"), failed("Naive")],
            false,
        );
        assert_eq!(report.consistent, None);
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert!(json.get("consistent").is_none());
    }

    #[test]
    fn inconsistent_report() {
        let mut wrong = demo_result("Wrong");
        wrong.outcome = Ok(Matrix::square_zeros(4));
        let report = RunReport::new(4, &StrassenConfig::default(), None, &[demo_result("A"), wrong], false);
        assert_eq!(report.consistent, Some(false));
    }
}
