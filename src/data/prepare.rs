use std::collections::BTreeSet;
use std::path::Path;

use super::loader;
use super::model::{CellValue, ProductRecord, ProductTable, RawTable};
use super::stats;
use crate::error::{DashboardError, DashboardResult};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

pub const CATEGORY_TREE: &str = "product_category_tree";
pub const RETAIL_PRICE: &str = "retail_price";
pub const DISCOUNTED_PRICE: &str = "discounted_price";
pub const PRODUCT_RATING: &str = "product_rating";
pub const OVERALL_RATING: &str = "overall_rating";
pub const PRODUCT_NAME: &str = "product_name";

/// Columns the source table must carry. Everything else passes through.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    CATEGORY_TREE,
    RETAIL_PRICE,
    DISCOUNTED_PRICE,
    PRODUCT_RATING,
    OVERALL_RATING,
    PRODUCT_NAME,
];

/// Positions of the required columns inside a [`RawTable`].
struct ColumnIndex {
    category_tree: usize,
    retail_price: usize,
    discounted_price: usize,
    product_rating: usize,
    overall_rating: usize,
    product_name: usize,
}

impl ColumnIndex {
    fn resolve(raw: &RawTable) -> DashboardResult<Self> {
        let find = |name: &str| {
            raw.column_index(name).ok_or_else(|| DashboardError::Schema {
                column: name.to_string(),
            })
        };
        Ok(ColumnIndex {
            category_tree: find(CATEGORY_TREE)?,
            retail_price: find(RETAIL_PRICE)?,
            discounted_price: find(DISCOUNTED_PRICE)?,
            product_rating: find(PRODUCT_RATING)?,
            overall_rating: find(OVERALL_RATING)?,
            product_name: find(PRODUCT_NAME)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Preparation
// ---------------------------------------------------------------------------

/// Read `path` and prepare it. Loader failures become
/// [`DashboardError::DataLoad`], absent columns [`DashboardError::Schema`].
pub fn prepare_file(path: &Path) -> DashboardResult<ProductTable> {
    let raw = loader::load_file(path).map_err(|e| DashboardError::data_load(path, &e))?;
    let table = prepare(raw)?;
    log::info!(
        "Prepared {} products in {} categories from {}",
        table.len(),
        table.categories.len(),
        path.display()
    );
    Ok(table)
}

/// Derive the normalized columns for every row of `raw`.
///
/// Malformed cells never fail: ratings that do not parse are filled with the
/// column median over the values that did, and prices that do not parse
/// become NaN.
pub fn prepare(raw: RawTable) -> DashboardResult<ProductTable> {
    let idx = ColumnIndex::resolve(&raw)?;

    let parsed_product: Vec<Option<f64>> = raw
        .rows
        .iter()
        .map(|row| cell(row, idx.product_rating).to_numeric())
        .collect();
    let parsed_overall: Vec<Option<f64>> = raw
        .rows
        .iter()
        .map(|row| cell(row, idx.overall_rating).to_numeric())
        .collect();

    let product_rating_median = column_median(&parsed_product);
    let overall_rating_median = column_median(&parsed_overall);
    log::debug!(
        "Rating medians: product={product_rating_median:?} overall={overall_rating_median:?}"
    );

    let fill = |parsed: Option<f64>, median: Option<f64>| {
        parsed.or(median).unwrap_or(f64::NAN)
    };

    let mut records = Vec::with_capacity(raw.rows.len());
    let mut categories = BTreeSet::new();

    for (i, mut cells) in raw.rows.into_iter().enumerate() {
        let product_rating = fill(parsed_product[i], product_rating_median);
        let overall_rating = fill(parsed_overall[i], overall_rating_median);

        let category = cell(&cells, idx.category_tree)
            .as_text()
            .filter(|s| !s.is_empty())
            .map(|path| main_category(&path));
        if let Some(cat) = &category {
            categories.insert(cat.clone());
        }

        let retail_price = cell(&cells, idx.retail_price).to_numeric().unwrap_or(f64::NAN);
        let discounted_price = cell(&cells, idx.discounted_price)
            .to_numeric()
            .unwrap_or(f64::NAN);

        let product_name = cell(&cells, idx.product_name).as_text();

        // Ratings are shown post-imputation everywhere, previews included.
        if let Some(slot) = cells.get_mut(idx.product_rating) {
            *slot = CellValue::Float(product_rating);
        }
        if let Some(slot) = cells.get_mut(idx.overall_rating) {
            *slot = CellValue::Float(overall_rating);
        }

        records.push(ProductRecord {
            cells,
            product_name,
            retail_price,
            discounted_price,
            product_rating,
            overall_rating,
            main_category: category,
            discount_percent: discount_percent(retail_price, discounted_price),
        });
    }

    Ok(ProductTable {
        records,
        column_names: raw.column_names,
        categories,
        product_rating_median,
        overall_rating_median,
    })
}

fn cell(row: &[CellValue], idx: usize) -> &CellValue {
    row.get(idx).unwrap_or(&CellValue::Null)
}

fn column_median(parsed: &[Option<f64>]) -> Option<f64> {
    let values: Vec<f64> = parsed.iter().flatten().copied().collect();
    stats::median(&values)
}

// ---------------------------------------------------------------------------
// Derived fields
// ---------------------------------------------------------------------------

/// First `>>` segment of a category path, with every `[`, `]` and `'`
/// removed beforehand and surrounding whitespace trimmed.
///
/// The stripping is unconditional: those characters are assumed never to be
/// part of a real category name.
pub fn main_category(path: &str) -> String {
    let cleaned: String = path
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\''))
        .collect();
    cleaned
        .split(">>")
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Percentage knocked off the retail price. NaN when the retail price is
/// zero or either price is missing.
pub fn discount_percent(retail_price: f64, discounted_price: f64) -> f64 {
    if retail_price == 0.0 {
        return f64::NAN;
    }
    (retail_price - discounted_price) / retail_price * 100.0
}
