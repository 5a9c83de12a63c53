//! Report sink: CSV export and console rendering
//!
//! Thin glue over the harness output. Durations leave the crate as float
//! seconds here; everything upstream works in `Duration`.

use std::io::{self, Write};

use crate::bench::Sample;

/// Write samples as CSV with a `height,<labelA>,<labelB>` header.
///
/// Seconds at 8 decimal places, one row per sample, sample order preserved.
pub fn write_csv<W: Write>(
    out: &mut W,
    label_a: &str,
    label_b: &str,
    samples: &[Sample],
) -> io::Result<()> {
    writeln!(out, "height,{label_a},{label_b}")?;
    for sample in samples {
        writeln!(
            out,
            "{},{:.8},{:.8}",
            sample.height,
            sample.duration_a.as_secs_f64(),
            sample.duration_b.as_secs_f64()
        )?;
    }
    Ok(())
}

/// Render the fixed-width comparison table printed after each run.
pub fn render_table<W: Write>(
    out: &mut W,
    label_a: &str,
    label_b: &str,
    samples: &[Sample],
) -> io::Result<()> {
    writeln!(out, "{:<8} {:>16} {:>16}", "height", label_a, label_b)?;
    writeln!(out, "{}", "-".repeat(42))?;
    for sample in samples {
        writeln!(
            out,
            "{:<8} {:>16.6} {:>16.6}",
            sample.height,
            sample.duration_a.as_secs_f64(),
            sample.duration_b.as_secs_f64()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn samples() -> Vec<Sample> {
        vec![
            Sample {
                height: 4,
                duration_a: Duration::from_micros(1500),
                duration_b: Duration::from_micros(1250),
            },
            Sample {
                height: 5,
                duration_a: Duration::from_micros(3100),
                duration_b: Duration::from_micros(2600),
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let mut out = Vec::new();
        write_csv(&mut out, "recursive_nc", "iterative_nc", &samples()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("height,recursive_nc,iterative_nc"));
        assert_eq!(lines.next(), Some("4,0.00150000,0.00125000"));
        assert_eq!(lines.next(), Some("5,0.00310000,0.00260000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_table_has_header_and_one_row_per_sample() {
        let mut out = Vec::new();
        render_table(&mut out, "recursive", "iterative", &samples()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4); // header, rule, two samples
        assert!(lines[0].contains("recursive"));
        assert!(lines[2].starts_with('4'));
        assert!(lines[3].starts_with('5'));
    }
}
