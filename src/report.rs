//! Human-readable progress report.
//!
//! One line per generation followed by a final block:
//!
//! ```text
//! Generation 1: A (weight: 2, value: 3) B (weight: 3, value: 4) Total weight: 5, Total value: 7
//! Best solution:
//!   A (weight: 2, value: 3)
//!   B (weight: 3, value: 4)
//! Total weight: 5
//! Total value: 7
//! ```
//!
//! Weights print with six significant digits in the `%g` style: trailing
//! zeros are dropped and very large or very small magnitudes switch to
//! exponent form (`1.23457e+06`).

use crate::error::Result;
use crate::ga::{GenerationReport, KnapsackProblem, Solution};
use std::io::Write;

const SIGNIFICANT_DIGITS: usize = 6;

/// Writes the line for one generation.
///
/// # Errors
/// [`KnapsackError::Io`](crate::KnapsackError::Io) if the writer fails.
pub fn write_generation<W: Write>(
    out: &mut W,
    problem: &KnapsackProblem,
    report: &GenerationReport,
) -> Result<()> {
    write!(out, "Generation {}: ", report.generation)?;
    for item in report.best.items(problem) {
        write!(
            out,
            "{} (weight: {}, value: {}) ",
            item.name,
            format_real(item.weight),
            item.value
        )?;
    }
    writeln!(
        out,
        "Total weight: {}, Total value: {}",
        format_real(report.best.total_weight),
        report.best.total_value
    )?;
    Ok(())
}

/// Writes the final best-solution block.
///
/// # Errors
/// [`KnapsackError::Io`](crate::KnapsackError::Io) if the writer fails.
pub fn write_best<W: Write>(out: &mut W, problem: &KnapsackProblem, best: &Solution) -> Result<()> {
    writeln!(out, "Best solution: ")?;
    for item in best.items(problem) {
        writeln!(
            out,
            "  {} (weight: {}, value: {})",
            item.name,
            format_real(item.weight),
            item.value
        )?;
    }
    writeln!(out, "Total weight: {}", format_real(best.total_weight))?;
    writeln!(out, "Total value: {}", best.total_value)?;
    Ok(())
}

/// Formats `x` like `printf("%g")`: [`SIGNIFICANT_DIGITS`] significant
/// digits, no trailing zeros, exponent form outside `[1e-4, 1e6)`.
fn format_real(x: f64) -> String {
    if x == 0.0 || !x.is_finite() {
        return x.to_string();
    }

    // Exponent after rounding, so 999999.7 becomes 1e+06.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, x);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
