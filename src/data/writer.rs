use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::model::SplineOutput;
use crate::error::{Error, Result};

/// Render a value the way the solver does: shortest round-trip
/// representation with a comma as decimal separator.
pub fn format_value(value: f64) -> String {
    value.to_string().replace('.', ",")
}

/// Write the four lines xp, yp, xs, ys. Every value is followed by a single
/// space, matching the solver's output.
pub fn write_output<W: Write>(w: &mut W, output: &SplineOutput) -> std::io::Result<()> {
    let empty = Vec::new();
    let (xs, ys) = match &output.spline {
        Some(spline) => (&spline.x, &spline.y),
        None => (&empty, &empty),
    };
    let sequences = [&output.control.x, &output.control.y, xs, ys];
    for values in sequences {
        for &v in values.iter() {
            write!(w, "{} ", format_value(v))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write `output` into it.
pub fn save_output(path: &Path, output: &SplineOutput) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut w = BufWriter::new(file);
    write_output(&mut w, output)
        .and_then(|_| w.flush())
        .map_err(|e| Error::io(path, e))?;
    log::info!("Wrote {} control points to {}", output.control.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;
    use crate::data::loader::{load_file, parse_output};
    use crate::data::model::Series;

    fn sample() -> SplineOutput {
        SplineOutput::new(
            Series::new(vec![0.0, 1.0, 2.0], vec![10.01, -0.228, 9.885]),
            Series::new(vec![0.0, 0.01, 0.02, 0.03], vec![-8.826, 3.348, 1.076, 1e-7]),
        )
    }

    #[test]
    fn format_uses_comma() {
        assert_eq!("0,5", format_value(0.5));
        assert_eq!("-8,923", format_value(-8.923));
        assert_eq!("3", format_value(3.0));
    }

    #[test]
    fn written_text_shape() {
        let output = SplineOutput::new(
            Series::new(vec![0.5, 1.0], vec![2.0, 2.5]),
            Series::new(vec![0.0], vec![1.0]),
        );
        let mut buf = Vec::new();
        write_output(&mut buf, &output).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!("0,5 1 \n2 2,5 \n0 \n1 \n", text);
    }

    #[test]
    fn round_trip_through_text() {
        let original = sample();
        let mut buf = Vec::new();
        write_output(&mut buf, &original).unwrap();

        let parsed = parse_output(std::str::from_utf8(&buf).unwrap()).unwrap();
        assert_eq!(original.spline_len(), parsed.spline_len());
        for (a, b) in original.control.y.iter().zip(parsed.control.y.iter()) {
            assert_approx_eq!(*a, *b, 1e-12);
        }
        let (before, after) = (original.spline.unwrap(), parsed.spline.unwrap());
        for (a, b) in before.y.iter().zip(after.y.iter()) {
            assert_approx_eq!(*a, *b, 1e-12);
        }
    }

    #[test]
    fn control_only_writes_blank_curve_lines() {
        let output = SplineOutput::from_control(Series::new(vec![1.0], vec![2.0]));
        let mut buf = Vec::new();
        write_output(&mut buf, &output).unwrap();
        assert_eq!("1 \n2 \n\n\n", String::from_utf8(buf).unwrap());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Output.txt");
        save_output(&path, &sample()).unwrap();

        let loaded = load_file(&path).unwrap();
        assert_eq!(sample(), loaded);
    }
}
