use crate::data::model::ProductTable;
use crate::error::{DashboardError, DashboardResult};

// ---------------------------------------------------------------------------
// Browse products of one main category
// ---------------------------------------------------------------------------

/// The projected columns shown for each matching product.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub product_name: Option<String>,
    pub retail_price: f64,
    pub discounted_price: f64,
    pub product_rating: f64,
}

/// All products of `category`.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub category: String,
    pub rows: Vec<ListingRow>,
}

impl CategoryListing {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Choices offered by the category selector, ascending.
pub fn category_choices(table: &ProductTable) -> Vec<String> {
    table.categories.iter().cloned().collect()
}

/// Indices of records whose main category equals `category`.
pub fn matching_indices(table: &ProductTable, category: &str) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.main_category.as_deref() == Some(category))
        .map(|(i, _)| i)
        .collect()
}

/// Products whose main category equals `category`.
///
/// `None` picks the first category in ascending order. A category outside
/// the table's distinct set is rejected rather than yielding an empty list.
pub fn filter_by_category(
    table: &ProductTable,
    category: Option<&str>,
) -> DashboardResult<CategoryListing> {
    let category = match category {
        Some(c) if table.categories.contains(c) => c,
        Some(c) => {
            return Err(DashboardError::InvalidSelection {
                category: c.to_string(),
            })
        }
        None => table
            .categories
            .first()
            .map(String::as_str)
            .ok_or_else(|| DashboardError::InvalidSelection {
                category: String::new(),
            })?,
    };

    let rows = matching_indices(table, category)
        .into_iter()
        .map(|i| {
            let r = &table.records[i];
            ListingRow {
                product_name: r.product_name.clone(),
                retail_price: r.retail_price,
                discounted_price: r.discounted_price,
                product_rating: r.product_rating,
            }
        })
        .collect();

    Ok(CategoryListing {
        category: category.to_string(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::table_with;

    #[test]
    fn selecting_a_category_returns_its_rows() {
        let table = table_with(&[("A", 4.0), ("A", 3.0), ("B", 5.0)]);
        let listing = filter_by_category(&table, Some("B")).unwrap();

        assert_eq!(listing.count(), 1);
        assert_eq!(listing.rows[0].product_name.as_deref(), Some("p2"));
        assert_eq!(listing.rows[0].product_rating, 5.0);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let table = table_with(&[("A", 4.0), ("A", 3.0), ("B", 5.0)]);
        match filter_by_category(&table, Some("Z")) {
            Err(DashboardError::InvalidSelection { category }) => assert_eq!(category, "Z"),
            other => panic!("expected invalid selection, got {other:?}"),
        }
    }

    #[test]
    fn no_selection_defaults_to_first_choice() {
        let table = table_with(&[("B", 4.0), ("A", 3.0)]);
        assert_eq!(category_choices(&table), vec!["A", "B"]);
        let listing = filter_by_category(&table, None).unwrap();
        assert_eq!(listing.category, "A");
        assert_eq!(listing.count(), 1);
    }

    #[test]
    fn empty_table_has_nothing_to_select() {
        let table = ProductTable::default();
        assert!(category_choices(&table).is_empty());
        assert!(matches!(
            filter_by_category(&table, None),
            Err(DashboardError::InvalidSelection { .. })
        ));
    }
}
