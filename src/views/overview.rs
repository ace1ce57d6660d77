use crate::data::model::ProductTable;
use crate::data::stats;

/// Headline numbers plus a verbatim look at the first rows.
#[derive(Debug, Clone)]
pub struct OverviewReport {
    pub total_products: usize,
    pub unique_categories: usize,
    /// Mean product rating rounded to 2 decimals; NaN for an empty table.
    pub average_rating: f64,
    pub preview: PreviewTable,
}

/// Rows already rendered to text, ready for a table widget.
#[derive(Debug, Clone, Default)]
pub struct PreviewTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn overview(table: &ProductTable, preview_rows: usize) -> OverviewReport {
    let average_rating = stats::round_to(
        stats::mean(table.records.iter().map(|r| r.product_rating)),
        2,
    );

    let preview = PreviewTable {
        columns: table.preview_columns(),
        rows: table
            .records
            .iter()
            .take(preview_rows)
            .map(|r| r.preview_cells())
            .collect(),
    };

    OverviewReport {
        total_products: table.len(),
        unique_categories: table.categories.len(),
        average_rating,
        preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::table_with;

    #[test]
    fn overview_of_small_table() {
        let table = table_with(&[("A", 4.0), ("A", 5.0), ("B", 3.333)]);
        let report = overview(&table, 10);

        assert_eq!(report.total_products, 3);
        assert_eq!(report.unique_categories, 2);
        assert_eq!(report.average_rating, 4.11);
        assert_eq!(report.preview.rows.len(), 3);
        assert_eq!(report.preview.columns.len(), report.preview.rows[0].len());
    }

    #[test]
    fn preview_is_capped() {
        let rows: Vec<(&str, f64)> = (0..25).map(|_| ("A", 4.0)).collect();
        let report = overview(&table_with(&rows), 10);
        assert_eq!(report.preview.rows.len(), 10);
    }

    #[test]
    fn overview_of_empty_table() {
        let report = overview(&ProductTable::default(), 10);
        assert_eq!(report.total_products, 0);
        assert_eq!(report.unique_categories, 0);
        assert!(report.average_rating.is_nan());
        assert!(report.preview.rows.is_empty());
    }
}
