use crate::data::model::ProductTable;

/// `(discounted_price, product_rating)` per product.
#[derive(Debug, Clone, Default)]
pub struct ScatterSeries {
    pub points: Vec<[f64; 2]>,
    /// Rows dropped because a coordinate was not finite.
    pub skipped: usize,
}

pub fn price_vs_rating(table: &ProductTable) -> ScatterSeries {
    let mut series = ScatterSeries::default();
    for r in &table.records {
        if r.discounted_price.is_finite() && r.product_rating.is_finite() {
            series.points.push([r.discounted_price, r.product_rating]);
        } else {
            series.skipped += 1;
        }
    }
    series
}
