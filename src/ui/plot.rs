use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use spline_viewer::chart::{ChartItem, LineKind, Marker};

use crate::state::AppState;

/// Fraction of the data range left empty around a reset view.
const VIEW_MARGIN: f64 = 0.05;

// ---------------------------------------------------------------------------
// Spline plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart in the central panel.
pub fn spline_plot(ui: &mut Ui, state: &mut AppState) {
    let reset_bounds = if std::mem::take(&mut state.reset_view) {
        state.chart.bounds()
    } else {
        None
    };

    Plot::new("spline_plot")
        .legend(Legend::default())
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for item in &state.chart.items {
                let color = item_color(item);

                if let Some(marker) = item.style.marker {
                    let points = Points::new(series_points(item))
                        .name(&item.label)
                        .color(color)
                        .shape(marker_shape(marker))
                        .filled(true)
                        .radius(4.0);
                    plot_ui.points(points);
                }

                if let Some(kind) = item.style.line {
                    let line = Line::new(series_points(item))
                        .name(&item.label)
                        .color(color)
                        .style(line_style(kind))
                        .width(1.5);
                    plot_ui.line(line);
                }
            }

            if let Some((min, max)) = reset_bounds {
                let (min, max) = pad(min, max);
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
            }
        });
}

fn series_points(item: &ChartItem) -> PlotPoints {
    item.series.points().collect()
}

fn item_color(item: &ChartItem) -> Color32 {
    let [r, g, b] = item.style.color.rgb();
    Color32::from_rgb(r, g, b)
}

fn marker_shape(marker: Marker) -> MarkerShape {
    match marker {
        Marker::Circle => MarkerShape::Circle,
        Marker::Square => MarkerShape::Square,
        Marker::Diamond => MarkerShape::Diamond,
        Marker::Up => MarkerShape::Up,
        Marker::Cross => MarkerShape::Cross,
        Marker::Plus => MarkerShape::Plus,
    }
}

fn line_style(kind: LineKind) -> LineStyle {
    match kind {
        LineKind::Solid => LineStyle::Solid,
        LineKind::Dashed => LineStyle::Dashed { length: 10.0 },
        LineKind::Dotted => LineStyle::Dotted { spacing: 6.0 },
    }
}

/// Widen a bounding box by [`VIEW_MARGIN`] on each side. Degenerate axes get
/// a unit span so a single point stays visible.
fn pad(min: [f64; 2], max: [f64; 2]) -> ([f64; 2], [f64; 2]) {
    let mut lo = min;
    let mut hi = max;
    for axis in 0..2 {
        let span = hi[axis] - lo[axis];
        let margin = if span > 0.0 { span * VIEW_MARGIN } else { 0.5 };
        lo[axis] -= margin;
        hi[axis] += margin;
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn pad_widens_each_axis() {
        let (lo, hi) = pad([0.0, -1.0], [2.0, 1.0]);
        assert_approx_eq!(lo[0], -0.1, 1e-12);
        assert_approx_eq!(lo[1], -1.1, 1e-12);
        assert_approx_eq!(hi[0], 2.1, 1e-12);
        assert_approx_eq!(hi[1], 1.1, 1e-12);
    }

    #[test]
    fn pad_single_point() {
        let (lo, hi) = pad([1.0, 1.0], [1.0, 1.0]);
        assert_eq!([0.5, 0.5], lo);
        assert_eq!([1.5, 1.5], hi);
    }
}
