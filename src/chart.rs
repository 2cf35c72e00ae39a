//! Chart model: which series are drawn, how, and under which legend label.
//!
//! Styles use the short format strings familiar from matplotlib (`"bo"`,
//! `"r--"`). The model carries no GUI types so it can be built and checked
//! without a window.

use crate::data::model::{Series, SplineOutput};
use crate::error::{Error, Result};

/// Legend label of the control polyline and its markers.
pub const CONTROL_LABEL: &str = "line";
/// Legend label of the precomputed curve.
pub const SPLINE_LABEL: &str = "spline";

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotColor {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl PlotColor {
    fn from_code(c: char) -> Option<Self> {
        Some(match c {
            'b' => Self::Blue,
            'g' => Self::Green,
            'r' => Self::Red,
            'c' => Self::Cyan,
            'm' => Self::Magenta,
            'y' => Self::Yellow,
            'k' => Self::Black,
            'w' => Self::White,
            _ => return None,
        })
    }

    /// sRGB components of the matplotlib base colours.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Blue => [0, 0, 255],
            Self::Green => [0, 128, 0],
            Self::Red => [255, 0, 0],
            Self::Cyan => [0, 191, 191],
            Self::Magenta => [191, 0, 191],
            Self::Yellow => [191, 191, 0],
            Self::Black => [0, 0, 0],
            Self::White => [255, 255, 255],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Diamond,
    Up,
    Cross,
    Plus,
}

impl Marker {
    fn from_code(c: char) -> Option<Self> {
        Some(match c {
            'o' => Self::Circle,
            's' => Self::Square,
            'D' => Self::Diamond,
            '^' => Self::Up,
            'x' => Self::Cross,
            '+' => Self::Plus,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
    Dotted,
}

/// Parsed format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color: PlotColor,
    pub marker: Option<Marker>,
    pub line: Option<LineKind>,
}

impl SeriesStyle {
    /// Parse a format string: at most one colour letter, one marker and one
    /// line style, in any order. A format with a marker but no line style
    /// draws markers only; one with neither draws a solid line. Colour
    /// defaults to blue.
    pub fn parse(format: &str) -> Result<Self> {
        let mut color = None;
        let mut marker = None;
        let mut line = None;

        let set = |slot_is_some: bool, what: &str| -> Result<()> {
            if slot_is_some {
                Err(Error::invalid_style(format, format!("more than one {what}")))
            } else {
                Ok(())
            }
        };

        let mut rest = format;
        while let Some(c) = rest.chars().next() {
            if let Some(kind) = ["--", "-", ":"]
                .iter()
                .find(|p| rest.starts_with(**p))
                .map(|p| (*p, line_kind(p)))
            {
                set(line.is_some(), "line style")?;
                line = Some(kind.1);
                rest = &rest[kind.0.len()..];
                continue;
            }
            if let Some(col) = PlotColor::from_code(c) {
                set(color.is_some(), "colour")?;
                color = Some(col);
            } else if let Some(m) = Marker::from_code(c) {
                set(marker.is_some(), "marker")?;
                marker = Some(m);
            } else {
                return Err(Error::invalid_style(format, format!("unknown code '{c}'")));
            }
            rest = &rest[c.len_utf8()..];
        }

        if marker.is_none() && line.is_none() {
            line = Some(LineKind::Solid);
        }

        Ok(Self {
            color: color.unwrap_or(PlotColor::Blue),
            marker,
            line,
        })
    }
}

fn line_kind(code: &str) -> LineKind {
    match code {
        "--" => LineKind::Dashed,
        ":" => LineKind::Dotted,
        _ => LineKind::Solid,
    }
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// One drawable item. Items sharing a label form one legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartItem {
    pub label: String,
    pub style: SeriesStyle,
    pub series: Series,
}

/// Validated set of items, drawn in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    pub items: Vec<ChartItem>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series after checking it can be drawn.
    pub fn plot(&mut self, series: Series, format: &str, label: &str) -> Result<&mut Self> {
        series.validate(label)?;
        self.items.push(ChartItem {
            label: label.to_string(),
            style: SeriesStyle::parse(format)?,
            series,
        });
        Ok(self)
    }

    /// Control points as blue circles, the blue polyline through them
    /// labelled `line`, and the red curve labelled `spline`.
    pub fn from_output(output: &SplineOutput) -> Result<Self> {
        let mut chart = Chart::new();
        chart.plot(output.control.clone(), "bo", CONTROL_LABEL)?;
        chart.plot(output.control.clone(), "b", CONTROL_LABEL)?;
        if let Some(spline) = &output.spline {
            chart.plot(spline.clone(), "r", SPLINE_LABEL)?;
        }
        Ok(chart)
    }

    /// Distinct labels in first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for item in &self.items {
            if !labels.contains(&item.label.as_str()) {
                labels.push(&item.label);
            }
        }
        labels
    }

    /// Smallest box holding every finite point, as `(min, max)`.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut points = self
            .items
            .iter()
            .flat_map(|item| item.series.points())
            .filter(|p| p[0].is_finite() && p[1].is_finite());

        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                [min[0].min(p[0]), min[1].min(p[1])],
                [max[0].max(p[0]), max[1].max(p[1])],
            )
        }))
    }
}
