//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use strassen_core::constants::{
    DEFAULT_LOG_DEPTH, DEFAULT_MAX_PARALLEL_DEPTH, DEFAULT_MAX_VALUE, DEFAULT_SEED, DEFAULT_SIZE,
    DEFAULT_THRESHOLD,
};
use strassen_core::options::{PaddingPolicy, StrassenConfig};
use strassen_core::StrassenError;

/// Strassen-rs: parallel Strassen matrix multiplication.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Side length of the generated square operands.
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE, env = "STRASSEN_SIZE")]
    pub size: usize,

    /// Operands of this side length or smaller are multiplied naively.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, env = "STRASSEN_THRESHOLD")]
    pub threshold: usize,

    /// Recursion levels whose seven subproblems run concurrently.
    #[arg(
        short = 'd',
        long,
        default_value_t = DEFAULT_MAX_PARALLEL_DEPTH,
        env = "STRASSEN_MAX_PARALLEL_DEPTH"
    )]
    pub max_parallel_depth: usize,

    /// Run on a dedicated pool with this many worker threads.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Seed for the generated operands.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Generated elements are drawn from [-max-value, max-value].
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: i64,

    /// Algorithm to use: strassen, naive, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Zero-pad operands to the next power of two instead of rejecting odd splits.
    #[arg(long)]
    pub pad: bool,

    /// Multiply the fixed 4x4 example instead of random operands.
    #[arg(long)]
    pub demo: bool,

    /// Print the product.
    #[arg(short, long)]
    pub print: bool,

    /// Show recursion statistics.
    #[arg(long)]
    pub details: bool,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write the product to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Timeout duration (e.g., "30s", "5m", "500ms").
    #[arg(long, default_value = "5m", value_parser = parse_timeout)]
    pub timeout: Duration,

    /// Verbose output: debug logging and untruncated products.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Side length of the operands this run multiplies.
    #[must_use]
    pub fn effective_size(&self) -> usize {
        if self.demo {
            4
        } else {
            self.size
        }
    }

    /// Deepest recursion level whose events are traced; unbounded when verbose.
    #[must_use]
    pub fn log_depth(&self) -> usize {
        if self.verbose {
            usize::MAX
        } else {
            DEFAULT_LOG_DEPTH
        }
    }

    /// Core configuration derived from the flags.
    #[must_use]
    pub fn strassen_config(&self) -> StrassenConfig {
        let padding = if self.pad {
            PaddingPolicy::ZeroPad
        } else {
            PaddingPolicy::Reject
        };
        let config = StrassenConfig::new(self.threshold, self.max_parallel_depth).with_padding(padding);
        match self.workers {
            Some(workers) => config.with_workers(workers),
            None => config,
        }
    }

    /// Check the flags that the core configuration does not cover.
    ///
    /// Generated operands must not be able to overflow `i64` anywhere in the
    /// recursion: every intermediate stays below `16 * n^3 * max_value^2`.
    pub fn validate(&self) -> Result<(), StrassenError> {
        self.strassen_config().validate()?;
        if self.demo {
            return Ok(());
        }
        if self.max_value < 0 {
            return Err(StrassenError::InvalidConfiguration(
                "max-value must not be negative".into(),
            ));
        }

        let n = u128::try_from(self.size).unwrap_or(u128::MAX);
        let m = u128::from(self.max_value.unsigned_abs());
        let bound = n
            .checked_pow(3)
            .and_then(|v| v.checked_mul(m * m))
            .and_then(|v| v.checked_mul(16));
        match bound {
            Some(bound) if bound <= u128::from(i64::MAX.unsigned_abs()) => Ok(()),
            _ => Err(StrassenError::InvalidConfiguration(format!(
                "size {} with max-value {} may overflow 64-bit integers",
                self.size, self.max_value
            ))),
        }
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    parse_duration(s).ok_or_else(|| format!("invalid duration: {s:?}"))
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Some(Duration::from_millis(ms.parse().ok()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Some(Duration::from_secs(secs.parse().ok()?))
    } else {
        Some(Duration::from_secs(s.parse().ok()?))
    }
}
