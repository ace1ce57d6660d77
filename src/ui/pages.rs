use eframe::egui::{self, RichText, Ui};

use crate::data::model::format_number;
use crate::state::AppState;
use crate::ui::{plot, tables};
use crate::views::filter::category_choices;
use crate::views::overview::OverviewReport;
use crate::views::{View, ViewOutput};

// ---------------------------------------------------------------------------
// Central panel – the selected page
// ---------------------------------------------------------------------------

/// Render the current page in the central panel.
pub fn current_page(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a product table to begin  (File → Open…)");
        });
        return;
    }

    ui.heading(state.view.title());
    ui.add_space(6.0);

    // The category selector sits above the output and may change it.
    if state.view == View::FilterByCategory {
        category_selector(ui, state);
    }

    let Some(output) = &state.output else {
        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(egui::Color32::RED));
        }
        return;
    };

    match output {
        ViewOutput::Overview(report) => overview(ui, report),
        ViewOutput::CategoryCounts(counts) => {
            ui.label(format!("Top {} Product Categories", counts.len()));
            plot::category_bars(ui, counts);
        }
        ViewOutput::RatingDistribution(dist) => {
            plot::histogram(ui, "rating_distribution", dist, "Rating");
        }
        ViewOutput::PriceVsRating(series) => {
            if series.skipped > 0 {
                ui.weak(format!("{} products without a price not shown", series.skipped));
            }
            plot::scatter(ui, series);
        }
        ViewOutput::DiscountDistribution(dist) => {
            if dist.skipped > 0 {
                ui.weak(format!("{} products without a defined discount", dist.skipped));
            }
            plot::histogram(ui, "discount_distribution", dist, "Discount (%)");
        }
        ViewOutput::FilterByCategory(listing) => {
            ui.label(
                RichText::new(format!(
                    "Showing {} products in {}",
                    listing.count(),
                    listing.category
                ))
                .strong(),
            );
            ui.add_space(4.0);
            tables::listing_table(ui, listing);
        }
    }
}

fn overview(ui: &mut Ui, report: &OverviewReport) {
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Products", &thousands(report.total_products));
        metric(&mut cols[1], "Unique Categories", &report.unique_categories.to_string());
        metric(&mut cols[2], "Average Rating", &format_number(report.average_rating));
    });

    ui.add_space(10.0);
    ui.strong("📌 Dataset Preview");
    tables::preview_table(ui, &report.preview);
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value).size(28.0).strong());
    });
}

fn category_selector(ui: &mut Ui, state: &mut AppState) {
    let Some(table) = &state.table else {
        return;
    };
    let choices = category_choices(table);
    let current = state.selected_category.clone().unwrap_or_default();

    let mut picked = None;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select a category:");
        egui::ComboBox::from_id_salt("category_select")
            .selected_text(&current)
            .width(240.0)
            .show_ui(ui, |ui: &mut Ui| {
                for cat in &choices {
                    if ui.selectable_label(current == *cat, cat).clicked() {
                        picked = Some(cat.clone());
                    }
                }
            });
    });

    if let Some(cat) = picked {
        state.select_category(cat);
    }
    ui.separator();
}

/// `1234567` → `1,234,567`.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::thousands;

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(20000), "20,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }
}
