//! # strassen-cli
//!
//! CLI output, JSON run reports, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod report;

pub use presenter::CLIResultPresenter;
pub use report::RunReport;
