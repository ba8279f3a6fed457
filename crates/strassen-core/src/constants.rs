//! Default configuration values and exit codes.

/// Default base-case threshold: operands of this side length or smaller are
/// multiplied naively.
pub const DEFAULT_THRESHOLD: usize = 64;

/// Default number of recursion levels whose subproblems run concurrently.
///
/// Two levels expose 7² = 49 independent subtrees, enough to saturate
/// typical core counts without flooding the scheduler.
pub const DEFAULT_MAX_PARALLEL_DEPTH: usize = 2;

/// Recursion levels traced by the logging observer unless verbose.
pub const DEFAULT_LOG_DEPTH: usize = 1;

/// Default matrix side length for generated inputs.
pub const DEFAULT_SIZE: usize = 256;

/// Default bound on the magnitude of generated elements.
pub const DEFAULT_MAX_VALUE: i64 = 10;

/// Default seed for generated inputs.
pub const DEFAULT_SEED: u64 = 42;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Multiplier results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input shape.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
