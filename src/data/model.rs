use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Series – one pair of coordinate sequences
// ---------------------------------------------------------------------------

/// Paired x / y sequences. Lengths are only checked by [`Series::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    /// Number of complete (x, y) pairs.
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that the series can be drawn: same length on both axes and at
    /// least one point.
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.x.len() != self.y.len() {
            return Err(Error::dimension_mismatch(name, self.x.len(), self.y.len()));
        }
        if self.x.is_empty() {
            return Err(Error::EmptySeries {
                series: name.to_string(),
            });
        }
        Ok(())
    }

    /// Iterate `[x, y]` pairs, the shape `egui_plot` consumes.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| [x, y])
    }
}

// ---------------------------------------------------------------------------
// SplineOutput – the four sequences of Output.txt
// ---------------------------------------------------------------------------

/// Everything the solver writes: control points (xp, yp) and the sampled
/// curve (xs, ys). The two series need not share a length.
///
/// `spline` is `None` only for data that never had a curve (a node document);
/// an output file with blank curve lines yields `Some` of an empty series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplineOutput {
    pub control: Series,
    pub spline: Option<Series>,
}

impl SplineOutput {
    pub fn new(control: Series, spline: Series) -> Self {
        Self {
            control,
            spline: Some(spline),
        }
    }

    /// Control points only, as read from a node document.
    pub fn from_control(control: Series) -> Self {
        Self {
            control,
            spline: None,
        }
    }

    pub fn has_spline(&self) -> bool {
        self.spline.is_some()
    }

    /// Number of curve points, zero without a curve.
    pub fn spline_len(&self) -> usize {
        self.spline.as_ref().map_or(0, Series::len)
    }
}

// ---------------------------------------------------------------------------
// Node document – the solver's input file
// ---------------------------------------------------------------------------

/// A single input node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

/// `{ "Nodes": [ { "X": .., "Y": .. }, .. ] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDocument {
    #[serde(rename = "Nodes", default)]
    pub nodes: Vec<Node>,
}

impl From<NodeDocument> for Series {
    fn from(doc: NodeDocument) -> Self {
        let (x, y) = doc.nodes.into_iter().map(|n| (n.x, n.y)).unzip();
        Series { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_paired_series() {
        let series = Series::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]);
        assert!(series.validate("line").is_ok());
        assert_eq!(3, series.len());
    }

    #[test]
    fn validate_reports_mismatch() {
        let series = Series::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]);
        match series.validate("line") {
            Err(Error::DimensionMismatch {
                series,
                x_len,
                y_len,
            }) => {
                assert_eq!("line", series);
                assert_eq!(3, x_len);
                assert_eq!(2, y_len);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_empty() {
        let series = Series::default();
        assert!(matches!(
            series.validate("spline"),
            Err(Error::EmptySeries { .. })
        ));
    }

    #[test]
    fn node_document_to_series() {
        let doc = NodeDocument {
            nodes: vec![Node { x: 1.0, y: 2.0 }, Node { x: 3.0, y: 4.0 }],
        };
        let series = Series::from(doc);
        assert_eq!(vec![1.0, 3.0], series.x);
        assert_eq!(vec![2.0, 4.0], series.y);
    }

    #[test]
    fn control_only_output_has_no_spline() {
        let output = SplineOutput::from_control(Series::new(vec![1.0], vec![1.0]));
        assert!(!output.has_spline());
    }
}
