use crate::data::model::ProductTable;
use crate::data::stats::{self, Histogram};

/// Histogram plus a density curve scaled to the histogram's count axis.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    pub histogram: Histogram,
    /// `[x, count-scaled density]` points; empty when no curve can be fit.
    pub density: Vec<[f64; 2]>,
    /// Values dropped for being NaN or infinite.
    pub skipped: usize,
}

impl Distribution {
    /// Bin the finite `values` and overlay a Gaussian KDE evaluated across
    /// the observed range.
    pub fn from_values(values: &[f64], bins: usize, grid_points: usize) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let skipped = values.len() - finite.len();

        let histogram = Histogram::new(&finite, bins);
        let (lo, hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let scale = finite.len() as f64 * histogram.bin_width();
        let density = stats::gaussian_kde(&finite, lo, hi, grid_points)
            .into_iter()
            .map(|[x, d]| [x, d * scale])
            .collect();

        Distribution {
            histogram,
            density,
            skipped,
        }
    }
}

/// Distribution of (imputed) product ratings.
pub fn rating_distribution(table: &ProductTable, bins: usize, grid: usize) -> Distribution {
    let values: Vec<f64> = table.records.iter().map(|r| r.product_rating).collect();
    Distribution::from_values(&values, bins, grid)
}

/// Distribution of discount percentages. Rows with an undefined discount
/// (zero or missing retail price) are skipped.
pub fn discount_distribution(table: &ProductTable, bins: usize, grid: usize) -> Distribution {
    let values: Vec<f64> = table.records.iter().map(|r| r.discount_percent).collect();
    let dist = Distribution::from_values(&values, bins, grid);
    if dist.skipped > 0 {
        log::debug!("{} rows without a defined discount", dist.skipped);
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{table_with, table_with_prices};

    #[test]
    fn rating_histogram_covers_every_row() {
        let table = table_with(&[("A", 1.0), ("A", 2.0), ("B", 4.5), ("B", 5.0)]);
        let dist = rating_distribution(&table, 30, 200);

        assert_eq!(dist.histogram.counts.len(), 30);
        assert_eq!(dist.histogram.total(), 4);
        assert_eq!(dist.histogram.edges.first(), Some(&1.0));
        assert_eq!(dist.histogram.edges.last(), Some(&5.0));
        assert_eq!(dist.density.len(), 200);
        assert_eq!(dist.skipped, 0);
    }

    #[test]
    fn density_is_scaled_to_counts() {
        let values: Vec<f64> = (0..1000).map(|i| (i % 100) as f64 / 10.0).collect();
        let dist = Distribution::from_values(&values, 10, 200);
        let peak_bar = *dist.histogram.counts.iter().max().unwrap() as f64;
        let peak_curve = dist.density.iter().map(|p| p[1]).fold(0.0, f64::max);
        // uniform sample: the curve should sit near the bar heights
        assert!(peak_curve > peak_bar * 0.5 && peak_curve < peak_bar * 1.5);
    }

    #[test]
    fn discount_skips_undefined_values() {
        let table = table_with_prices(&[(100.0, 40.0), (0.0, 0.0), (200.0, 150.0)]);
        let dist = discount_distribution(&table, 50, 200);

        assert_eq!(dist.skipped, 1);
        assert_eq!(dist.histogram.total(), 2);
        assert_eq!(dist.histogram.counts.len(), 50);
        assert_eq!(dist.histogram.edges.first(), Some(&25.0));
        assert_eq!(dist.histogram.edges.last(), Some(&60.0));
    }

    #[test]
    fn empty_table_degrades_to_empty_distribution() {
        let dist = rating_distribution(&ProductTable::default(), 30, 200);
        assert!(dist.histogram.is_empty());
        assert!(dist.density.is_empty());
    }
}
