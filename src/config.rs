use std::path::PathBuf;

use eframe::egui;

/// File the solver writes next to the working directory.
pub const DEFAULT_INPUT: &str = "Output.txt";

/// Start-up settings of the viewer window.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub input_path: PathBuf,
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            title: "Hermite Spline Viewer".to_string(),
            inner_size: [1000.0, 700.0],
            min_inner_size: [400.0, 300.0],
        }
    }
}

impl ViewerConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_output_txt() {
        let config = ViewerConfig::default();
        assert_eq!(PathBuf::from("Output.txt"), config.input_path);
    }

    #[test]
    fn native_options_carry_sizes() {
        let options = ViewerConfig::default().native_options();
        assert_eq!(Some(egui::vec2(1000.0, 700.0)), options.viewport.inner_size);
        assert_eq!(Some(egui::vec2(400.0, 300.0)), options.viewport.min_inner_size);
    }
}
