//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use strassen_cli::output::write_to_file;
use strassen_cli::presenter::CLIResultPresenter;
use strassen_cli::report::RunReport;
use strassen_core::generator::{demo_pair, random_pair};
use strassen_core::observers::LoggingObserver;
use strassen_core::progress::CancellationToken;
use strassen_core::registry::DefaultFactory;
use strassen_core::StrassenError;
use strassen_orchestration::interfaces::ResultPresenter;
use strassen_orchestration::multiplier_selection::get_multipliers_to_run;
use strassen_orchestration::orchestrator::{
    analyze_comparison_results, execute_multiplications_with_observer,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    config.validate()?;
    let strassen_config = config.strassen_config();

    let (a, b) = if config.demo {
        demo_pair()
    } else {
        random_pair(config.size, config.max_value, config.seed)
    };
    let seed = (!config.demo).then_some(config.seed);
    info!(
        size = config.effective_size(),
        threshold = strassen_config.threshold,
        max_parallel_depth = strassen_config.max_parallel_depth,
        algo = %config.algo,
        "starting run"
    );

    let factory = DefaultFactory::new(strassen_config.clone());
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;

    let cancel = CancellationToken::with_timeout(config.timeout);
    ctrlc_handler(cancel.clone());

    let observer = Arc::new(LoggingObserver::new(config.log_depth()));
    let results = execute_multiplications_with_observer(&multipliers, &a, &b, &cancel, observer);

    if config.json {
        let report = RunReport::new(
            config.effective_size(),
            &strassen_config,
            seed,
            &results,
            config.print,
        );
        println!("{}", report.to_json()?);
    } else {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.print);
        for result in &results {
            presenter.present_result(result, config.details);
        }
        if results.len() > 1 {
            presenter.present_comparison(results.as_slice());
        }
    }

    // Write to file if requested
    if let Some(path) = &config.output {
        if let Some(product) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, product)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    }

    if results.len() > 1 {
        if let Err(err @ StrassenError::Mismatch) = analyze_comparison_results(&results) {
            return Err(err.into());
        }
    }

    match results.into_iter().find_map(|r| r.outcome.err()) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        warn!(error = %e, "Ctrl+C handler not installed");
    }
}
