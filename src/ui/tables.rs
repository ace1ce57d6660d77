use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::format_number;
use crate::views::filter::CategoryListing;
use crate::views::overview::PreviewTable;

const ROW_HEIGHT: f32 = 18.0;

/// Generic text grid with a bold header row.
fn text_table(ui: &mut Ui, columns: &[String], rows: &[Vec<String>]) {
    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(60.0).clip(true), columns.len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                for name in columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let cells = &rows[row.index()];
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}

/// The overview's verbatim row preview.
pub fn preview_table(ui: &mut Ui, preview: &PreviewTable) {
    text_table(ui, &preview.columns, &preview.rows);
}

/// Projected columns of a category listing.
pub fn listing_table(ui: &mut Ui, listing: &CategoryListing) {
    let columns: Vec<String> = [
        "product_name",
        "retail_price",
        "discounted_price",
        "product_rating",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    let rows: Vec<Vec<String>> = listing
        .rows
        .iter()
        .map(|r| {
            vec![
                r.product_name.clone().unwrap_or_default(),
                format_number(r.retail_price),
                format_number(r.discounted_price),
                format_number(r.product_rating),
            ]
        })
        .collect();

    text_table(ui, &columns, &rows);
}
