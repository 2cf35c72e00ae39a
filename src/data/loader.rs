use std::path::Path;

use super::model::{NodeDocument, Series, SplineOutput};
use crate::error::{Error, Result};

/// Names of the four lines of the output format, in file order.
pub const LINE_NAMES: [&str; 4] = ["xp", "yp", "xs", "ys"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load spline data from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – solver input, `{ "Nodes": [{ "X": .., "Y": .. }, ..] }`,
///   shown as control points without a curve
/// * anything else – the four-line solver output (`Output.txt`)
pub fn load_file(path: &Path) -> Result<SplineOutput> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_nodes(path),
        _ => load_output(path),
    }
}

// ---------------------------------------------------------------------------
// Four-line output format
// ---------------------------------------------------------------------------

/// Read and parse a solver output file.
pub fn load_output(path: &Path) -> Result<SplineOutput> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let output = parse_output(&text)?;
    log::info!(
        "Loaded {} control points and {} spline points from {}",
        output.control.len(),
        output.spline_len(),
        path.display()
    );
    Ok(output)
}

/// Parse the four lines xp, yp, xs, ys. A file with fewer than four lines is
/// an error; lines after the fourth are ignored.
pub fn parse_output(text: &str) -> Result<SplineOutput> {
    let mut lines = text.lines();
    let mut read = |index: usize| -> Result<Vec<f64>> {
        let name = LINE_NAMES[index];
        let line = lines.next().ok_or(Error::MissingLine {
            line: index + 1,
            name,
        })?;
        parse_line(line, index + 1, name)
    };

    let control = Series::new(read(0)?, read(1)?);
    let spline = Series::new(read(2)?, read(3)?);

    let extra = lines.filter(|l| !l.trim().is_empty()).count();
    if extra > 0 {
        log::warn!("Ignoring {extra} non-empty line(s) after the fourth");
    }

    Ok(SplineOutput::new(control, spline))
}

/// Parse one line of whitespace-separated numbers. Commas are accepted as the
/// decimal separator. `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize, name: &'static str) -> Result<Vec<f64>> {
    let normalized = line.trim().replace(',', ".");

    let values = normalized
        .split_whitespace()
        .enumerate()
        .map(|(column, tok)| {
            tok.parse::<f64>().map_err(|_| Error::InvalidNumber {
                line: line_no,
                name,
                column: column + 1,
                token: tok.to_string(),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    log::debug!("{name}: {} values", values.len());
    Ok(values)
}

// ---------------------------------------------------------------------------
// Node document
// ---------------------------------------------------------------------------

/// Load the solver's input nodes as control points.
pub fn load_nodes(path: &Path) -> Result<SplineOutput> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let doc: NodeDocument = serde_json::from_str(&text)?;
    log::info!("Loaded {} nodes from {}", doc.nodes.len(), path.display());
    Ok(SplineOutput::from_control(Series::from(doc)))
}
