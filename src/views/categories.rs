use std::collections::HashMap;

use crate::data::model::ProductTable;

/// One bar of the category chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Products per main category, most frequent first, at most `top` entries.
/// Equal counts keep the order in which the categories first appear.
/// Rows without a category are not counted.
pub fn category_counts(table: &ProductTable, top: usize) -> Vec<CategoryCount> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for cat in table.records.iter().filter_map(|r| r.main_category.as_deref()) {
        match position.get(cat) {
            Some(&i) => counts[i].count += 1,
            None => {
                position.insert(cat, counts.len());
                counts.push(CategoryCount {
                    category: cat.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top);
    counts
}
