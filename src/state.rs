use std::path::{Path, PathBuf};

use spline_viewer::chart::Chart;
use spline_viewer::data::loader::load_file;
use spline_viewer::data::model::SplineOutput;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the current chart was read from.
    pub source: PathBuf,

    /// Parsed sequences of `source`.
    pub output: SplineOutput,

    /// Validated chart built from `output`.
    pub chart: Chart,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Frame the whole chart on the next draw.
    pub reset_view: bool,
}

/// Read `path` and build its chart.
fn load_chart(path: &Path) -> spline_viewer::Result<(SplineOutput, Chart)> {
    let output = load_file(path)?;
    let chart = Chart::from_output(&output)?;
    Ok((output, chart))
}

impl AppState {
    /// Load the initial file. Errors propagate to the caller.
    pub fn load(path: &Path) -> spline_viewer::Result<Self> {
        let (output, chart) = load_chart(path)?;
        Ok(Self {
            source: path.to_path_buf(),
            output,
            chart,
            status_message: None,
            reset_view: false,
        })
    }

    /// Replace the chart with the contents of `path`. On failure the current
    /// chart stays and the error is shown.
    pub fn open(&mut self, path: PathBuf) {
        match load_chart(&path) {
            Ok((output, chart)) => {
                log::info!(
                    "Showing {} ({} items, labels {:?})",
                    path.display(),
                    chart.items.len(),
                    chart.labels()
                );
                self.output = output;
                self.chart = chart;
                self.source = path;
                self.status_message = None;
                self.reset_view = true;
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Re-read the current source, e.g. after the solver rewrote it.
    pub fn reload(&mut self) {
        self.open(self.source.clone());
    }

    /// Short description for the top bar.
    pub fn summary(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());
        if self.output.has_spline() {
            format!(
                "{name}: {} control points, {} spline points",
                self.output.control.len(),
                self.output.spline_len()
            )
        } else {
            format!("{name}: {} control points", self.output.control.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0 1 2 \n0 1 0 \n0 0,5 1 1,5 2 \n0 0,7 1 0,7 0 \n";

    #[test]
    fn load_builds_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Output.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let state = AppState::load(&path).unwrap();
        assert_eq!(3, state.chart.items.len());
        assert_eq!("Output.txt: 3 control points, 5 spline points", state.summary());
    }

    #[test]
    fn load_rejects_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Output.txt");
        std::fs::write(&path, "0 1 2\n0 1\n0\n0\n").unwrap();

        assert!(matches!(
            AppState::load(&path),
            Err(spline_viewer::Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn failed_open_keeps_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Output.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let mut state = AppState::load(&path).unwrap();

        state.open(dir.path().join("missing.txt"));
        assert_eq!(3, state.chart.items.len());
        assert_eq!(path, state.source);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn reload_picks_up_new_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Output.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let mut state = AppState::load(&path).unwrap();

        std::fs::write(&path, "0 1 \n5 6 \n0 \n1 \n").unwrap();
        state.reload();
        assert!(state.status_message.is_none());
        assert!(state.reset_view);
        assert_eq!(vec![5.0, 6.0], state.output.control.y);
    }

    #[test]
    fn open_node_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Output.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let mut state = AppState::load(&path).unwrap();

        let nodes = dir.path().join("data.json");
        std::fs::write(&nodes, r#"{"Nodes":[{"X":0,"Y":1},{"X":1,"Y":3}]}"#).unwrap();
        state.open(nodes);
        assert_eq!(2, state.chart.items.len());
        assert_eq!("data.json: 2 control points", state.summary());
    }
}
