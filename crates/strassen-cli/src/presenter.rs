//! CLI result presenter.

use std::fmt::{Display, Write as _};

use strassen_core::Scalar;
use strassen_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{format_duration, format_matrix, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    print: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, print: bool) -> Self {
        Self {
            verbose,
            quiet,
            print,
        }
    }

    /// Text printed by `present_result`.
    ///
    /// Quiet mode prints only the product. `verbose` disables the preview
    /// truncation of large products.
    #[must_use]
    pub fn render_result<T: Scalar + Display>(
        &self,
        result: &MultiplicationResult<T>,
        details: bool,
    ) -> String {
        let product = match &result.outcome {
            Ok(product) => product,
            Err(e) => return format!("{}: {e}", result.algorithm),
        };

        if self.quiet {
            return format_matrix(product, self.verbose);
        }

        let mut out = String::new();
        let (rows, cols) = product.dims();
        let _ = writeln!(out, "Algorithm: {}", result.algorithm);
        let _ = writeln!(out, "Size: {rows}x{cols}");
        let _ = writeln!(out, "Duration: {}", format_duration(result.duration));
        let _ = writeln!(out, "Trace: {}", product.trace());
        let _ = writeln!(out, "Element sum: {}", product.element_sum());

        if details {
            let stats = &result.stats;
            let _ = writeln!(out, "Base cases: {}", format_number(stats.base_cases));
            let _ = writeln!(out, "Splits: {}", format_number(stats.splits));
            let _ = writeln!(
                out,
                "Dispatches: {} parallel, {} sequential",
                format_number(stats.parallel_dispatches),
                format_number(stats.sequential_dispatches)
            );
            let _ = writeln!(out, "Max depth: {}", stats.max_depth);
        }

        if self.print {
            let _ = writeln!(out, "{}", format_matrix(product, self.verbose));
        }

        out.trim_end().to_string()
    }

    /// Text printed by `present_comparison`; empty in quiet mode.
    #[must_use]
    pub fn render_comparison<T>(&self, results: &[MultiplicationResult<T>]) -> String {
        if self.quiet {
            return String::new();
        }

        let mut out = String::from("\nComparison Results:\n");
        let _ = writeln!(out, "{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            let _ = writeln!(
                out,
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
        out
    }
}

impl<T: Scalar + Display> ResultPresenter<T> for CLIResultPresenter {
    fn present_result(&self, result: &MultiplicationResult<T>, details: bool) {
        if result.outcome.is_err() {
            eprintln!("{}", self.render_result(result, details));
        } else {
            println!("{}", self.render_result(result, details));
        }
    }

    fn present_comparison(&self, results: &[MultiplicationResult<T>]) {
        let text = self.render_comparison(results);
        if !text.is_empty() {
            print!("{text}");
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
