use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if ui.button("Reset view").clicked() {
            state.reset_view = true;
        }

        ui.separator();

        ui.label(state.summary());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open spline data")
        .add_filter("Supported files", &["txt", "json"])
        .add_filter("Solver output", &["txt"])
        .add_filter("Solver nodes (JSON)", &["json"]);

    if let Some(dir) = state.source.parent().filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.pick_file() {
        state.open(path);
    }
}
