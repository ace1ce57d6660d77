use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` colours running from deep violet through teal to yellow, in the
/// spirit of a viridis ramp. The first entry is the darkest.
pub fn sequential_palette(n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![hsl_color(180.0, 0.6, 0.4)],
        _ => (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                let hue = 280.0 - t * 220.0;
                let lightness = 0.3 + t * 0.35;
                hsl_color(hue, 0.7, lightness)
            })
            .collect(),
    }
}

fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Fill colour of histogram bars.
pub fn histogram_fill() -> Color32 {
    hsl_color(210.0, 0.55, 0.55)
}

/// Colour of the density overlay and scatter points.
pub fn accent() -> Color32 {
    hsl_color(210.0, 0.7, 0.35)
}
