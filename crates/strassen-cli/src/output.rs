//! CLI output formatting.

use std::fmt::{Display, Write as _};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use strassen_core::{Matrix, Scalar};

/// Rows and columns shown before a matrix is elided.
pub const PREVIEW_DIM: usize = 8;

/// Format a matrix for display, one bracketed row per line.
///
/// Unless `full` is set, only the top-left `PREVIEW_DIM x PREVIEW_DIM`
/// corner of a larger matrix is shown.
#[must_use]
pub fn format_matrix<T: Scalar + Display>(matrix: &Matrix<T>, full: bool) -> String {
    let (rows, cols) = matrix.dims();
    if full || (rows <= PREVIEW_DIM && cols <= PREVIEW_DIM) {
        return matrix.to_string();
    }

    let mut out = String::new();
    for row in matrix.row_iter().take(PREVIEW_DIM) {
        let shown: Vec<String> = row.iter().take(PREVIEW_DIM).map(ToString::to_string).collect();
        let ellipsis = if cols > PREVIEW_DIM { ", ..." } else { "" };
        let _ = writeln!(out, "[{}{ellipsis}]", shown.join(", "));
    }
    if rows > PREVIEW_DIM {
        out.push_str("...\n");
    }
    let _ = write!(out, "({rows}x{cols}, showing top-left corner)");
    out
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Write a matrix to a file, one whitespace-separated row per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file<T: Scalar + Display>(path: &Path, matrix: &Matrix<T>) -> io::Result<()> {
    let mut file = BufWriter::new(std::fs::File::create(path)?);
    for row in matrix.row_iter() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(file, "{}", line.join(" "))?;
    }
    file.flush()?;
    tracing::debug!(path = %path.display(), "product written");
    Ok(())
}
