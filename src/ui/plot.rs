use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::color;
use crate::views::categories::CategoryCount;
use crate::views::distribution::Distribution;
use crate::views::scatter::ScatterSeries;

// ---------------------------------------------------------------------------
// Category bar chart
// ---------------------------------------------------------------------------

/// Horizontal bars, the most frequent category on top.
pub fn category_bars(ui: &mut Ui, counts: &[CategoryCount]) {
    let n = counts.len();
    let palette = color::sequential_palette(n);

    // y = n-1 for the first entry so the biggest bar sits at the top.
    let bars: Vec<Bar> = counts
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (c, fill))| {
            Bar::new((n - 1 - i) as f64, c.count as f64)
                .name(&c.category)
                .fill(fill)
                .width(0.8)
        })
        .collect();

    let labels: Vec<String> = counts.iter().rev().map(|c| c.category.clone()).collect();

    Plot::new("category_counts")
        .x_axis_label("Count")
        .y_axis_label("Category")
        .y_axis_formatter(move |mark: GridMark, _range| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
                return String::new();
            }
            labels.get(pos as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Top categories"));
        });
}

// ---------------------------------------------------------------------------
// Histogram with density overlay
// ---------------------------------------------------------------------------

pub fn histogram(ui: &mut Ui, id: &str, dist: &Distribution, x_label: &str) {
    let width = dist.histogram.bin_width();
    let bars: Vec<Bar> = dist
        .histogram
        .bars()
        .map(|(center, count)| {
            Bar::new(center, count as f64)
                .width(width)
                .fill(color::histogram_fill())
        })
        .collect();

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label("Number of Products")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Products"));
            if !dist.density.is_empty() {
                let points: PlotPoints = dist.density.iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .name("Density")
                        .color(color::accent())
                        .width(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

pub fn scatter(ui: &mut Ui, series: &ScatterSeries) {
    let points: PlotPoints = series.points.iter().copied().collect();

    Plot::new("price_vs_rating")
        .x_axis_label("Selling Price (Discounted Price)")
        .y_axis_label("Product Rating")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .radius(2.0)
                    .color(color::accent().gamma_multiply(0.5))
                    .name("Products"),
            );
        });
}
