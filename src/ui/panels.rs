use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::format_number;
use crate::state::AppState;
use crate::views::View;

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📊 Dashboard Navigation");
    ui.separator();

    ui.label("Go to section:");
    for view in View::ALL {
        if ui.radio(state.view == view, view.label()).clicked() {
            state.set_view(view);
        }
    }

    ui.separator();

    if let Some(table) = &state.table {
        ui.weak(format!(
            "{} products · {} categories",
            table.len(),
            table.categories.len()
        ));
        let median = |m: Option<f64>| m.map(format_number).unwrap_or_else(|| "n/a".into());
        ui.weak(format!(
            "Missing ratings filled with medians {} (product) / {} (overall)",
            median(table.product_rating_median),
            median(table.overall_rating_median)
        ));
    }
}

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
        });

        ui.separator();
        ui.label(state.source.display().to_string());

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
    let file = rfd::FileDialog::new()
        .set_title("Open product table")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening {}", path.display());
        state.load_source(path);
    }
}
