//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use strassen_core::multiplier::{MatrixMultiplier, StrassenError};
use strassen_core::observer::{ObserverSet, RecursionObserver};
use strassen_core::observers::{CountingObserver, NoOpObserver};
use strassen_core::progress::CancellationToken;
use strassen_core::{Matrix, Scalar};
use tracing::{debug, info};

use crate::interfaces::MultiplicationResult;

/// Execute the multiplication with all given multipliers.
pub fn execute_multiplications<T: Scalar>(
    multipliers: &[Arc<dyn MatrixMultiplier<T>>],
    a: &Matrix<T>,
    b: &Matrix<T>,
    cancel: &CancellationToken,
) -> Vec<MultiplicationResult<T>> {
    execute_multiplications_with_observer(multipliers, a, b, cancel, Arc::new(NoOpObserver::new()))
}

/// Execute the multiplication with all given multipliers and an observer.
///
/// Multipliers run one after another so that each one has the whole worker
/// pool and its duration is not skewed by the others. Once the token is
/// cancelled, the remaining multipliers report the cancellation without
/// running. Every run also feeds a fresh counter whose totals end up in the
/// result's `stats`.
pub fn execute_multiplications_with_observer<T: Scalar>(
    multipliers: &[Arc<dyn MatrixMultiplier<T>>],
    a: &Matrix<T>,
    b: &Matrix<T>,
    cancel: &CancellationToken,
    observer: Arc<dyn RecursionObserver>,
) -> Vec<MultiplicationResult<T>> {
    multipliers
        .iter()
        .map(|multiplier| {
            let counter = Arc::new(CountingObserver::new());
            let observers = ObserverSet::new();
            observers.register(counter.clone());
            observers.register(Arc::clone(&observer));

            debug!(
                algorithm = multiplier.name(),
                remaining = ?cancel.remaining(),
                "starting multiplication"
            );
            let start = Instant::now();
            let outcome = cancel
                .check_cancelled()
                .and_then(|()| multiplier.multiply(a, b, cancel, &observers));
            let duration = start.elapsed();

            match &outcome {
                Ok(_) => info!(
                    algorithm = multiplier.name(),
                    ?duration,
                    "multiplication finished"
                ),
                Err(e) => debug!(algorithm = multiplier.name(), error = %e, "multiplication failed"),
            }

            MultiplicationResult {
                algorithm: multiplier.name().to_string(),
                outcome,
                duration,
                stats: counter.stats(),
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Failed results are ignored; every successful product must equal the first.
pub fn analyze_comparison_results<T: Scalar>(
    results: &[MultiplicationResult<T>],
) -> Result<(), StrassenError> {
    let mut products = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = products.next() else {
        return Err(StrassenError::NoValidResults);
    };

    if products.any(|product| product != first) {
        return Err(StrassenError::Mismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use strassen_core::generator::{demo_pair, random_pair};
    use strassen_core::naive::NaiveMultiplier;
    use strassen_core::observers::RecursionStats;
    use strassen_core::options::StrassenConfig;
    use strassen_core::StrassenMultiplier;

    fn result(name: &str, outcome: Result<Matrix<i64>, StrassenError>) -> MultiplicationResult<i64> {
        MultiplicationResult {
            algorithm: name.into(),
            outcome,
            duration: Duration::from_millis(1),
            stats: RecursionStats::default(),
        }
    }

    fn both() -> Vec<Arc<dyn MatrixMultiplier<i64>>> {
        vec![
            Arc::new(StrassenMultiplier::new(StrassenConfig::new(8, 1))),
            Arc::new(NaiveMultiplier::new()),
        ]
    }

    #[test]
    fn execute_single_multiplier() {
        let multiplier: Arc<dyn MatrixMultiplier<i64>> =
            Arc::new(StrassenMultiplier::new(StrassenConfig::new(1, 1)));
        let (a, b) = demo_pair();
        let cancel = CancellationToken::new();
        let results = execute_multiplications(&[multiplier], &a, &b, &cancel);
        assert_eq!(results.len(), 1);
        let product = results[0].outcome.as_ref().unwrap();
        assert_eq!(product.row(0), &[80, 70, 60, 50]);
        assert_eq!(results[0].stats.base_cases, 49);
    }

    #[test]
    fn execute_multiple_multipliers_agree() {
        let (a, b) = random_pair(32, 10, 7);
        let cancel = CancellationToken::new();
        let results = execute_multiplications(&both(), &a, &b, &cancel);
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(r.is_ok(), "multiplier {} failed: {:?}", r.algorithm, r.outcome);
        }
        assert!(analyze_comparison_results(&results).is_ok());
        assert_eq!(results[0].algorithm, "Strassen");
        assert!(results[0].stats.splits > 0);
        assert_eq!(results[1].stats.base_cases, 1);
    }

    #[test]
    fn execute_with_cancellation() {
        let (a, b) = demo_pair();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let results = execute_multiplications(&both(), &a, &b, &cancel);
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(matches!(r.outcome, Err(StrassenError::Cancelled)));
            assert_eq!(r.stats.calls(), 0);
        }
    }

    #[test]
    fn execute_forwards_events_to_observer() {
        let observer = Arc::new(CountingObserver::new());
        let (a, b) = demo_pair();
        let cancel = CancellationToken::new();
        let multiplier: Arc<dyn MatrixMultiplier<i64>> =
            Arc::new(StrassenMultiplier::new(StrassenConfig::new(2, 0)));
        let results = execute_multiplications_with_observer(
            &[multiplier],
            &a,
            &b,
            &cancel,
            observer.clone(),
        );
        assert_eq!(observer.stats(), results[0].stats);
        assert_eq!(observer.stats().base_cases, 7);
    }

    #[test]
    fn per_run_stats_are_separate_from_shared_observer() {
        let observer = Arc::new(CountingObserver::new());
        let (a, b) = demo_pair();
        let cancel = CancellationToken::new();
        let results = execute_multiplications_with_observer(
            &both(),
            &a,
            &b,
            &cancel,
            observer.clone(),
        );
        let strassen = results[0].stats;
        let naive = results[1].stats;
        assert_eq!(naive.base_cases, 1);
        assert_eq!(
            observer.stats().base_cases,
            strassen.base_cases + naive.base_cases
        );
    }

    #[test]
    fn execute_with_generous_timeout() {
        let (a, b) = demo_pair();
        let cancel = CancellationToken::with_timeout(Duration::from_secs(30));
        let results = execute_multiplications(&both(), &a, &b, &cancel);
        assert!(results.iter().all(MultiplicationResult::is_ok));
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![
            result("A", Ok(Matrix::identity(2))),
            result("B", Ok(Matrix::identity(2))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![
            result("A", Ok(Matrix::identity(2))),
            result("B", Ok(Matrix::square_zeros(2))),
        ];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(StrassenError::Mismatch)
        ));
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let results = vec![
            result("A", Ok(Matrix::identity(3))),
            result("B", Ok(Matrix::identity(3))),
            result("C", Ok(Matrix::square_zeros(3))),
        ];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(StrassenError::Mismatch)
        ));
    }

    #[test]
    fn analyze_ignores_failed_results() {
        let results = vec![
            result("A", Ok(Matrix::identity(2))),
            result("B", Err(StrassenError::InvalidSize { size: 3 })),
            result("C", Ok(Matrix::identity(2))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![result("A", Err(StrassenError::Cancelled))];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(StrassenError::NoValidResults)
        ));
    }

    #[test]
    fn analyze_empty_results() {
        let results: Vec<MultiplicationResult<i64>> = vec![];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(StrassenError::NoValidResults)
        ));
    }
}
