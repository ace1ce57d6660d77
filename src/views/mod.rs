/// View layer: one pure computation per dashboard page.
///
/// ```text
///   Arc<ProductTable>  +  View  (+ selected category)
///          │
///          ▼
///   ┌──────────┐
///   │ compute  │  exhaustive match on View
///   └──────────┘
///          │
///          ▼
///      ViewOutput  →  ui::pages
/// ```

pub mod categories;
pub mod distribution;
pub mod filter;
pub mod overview;
pub mod scatter;

use std::fmt;

use crate::config::ViewSettings;
use crate::data::model::ProductTable;
use crate::error::DashboardResult;

use categories::CategoryCount;
use distribution::Distribution;
use filter::CategoryListing;
use overview::OverviewReport;
use scatter::ScatterSeries;

// ---------------------------------------------------------------------------
// View – the closed set of pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Overview,
    CategoryCounts,
    RatingDistribution,
    PriceVsRating,
    DiscountDistribution,
    FilterByCategory,
}

impl View {
    /// Navigation order.
    pub const ALL: [View; 6] = [
        View::Overview,
        View::CategoryCounts,
        View::RatingDistribution,
        View::PriceVsRating,
        View::DiscountDistribution,
        View::FilterByCategory,
    ];

    /// Label shown in the navigation selector.
    pub fn label(self) -> &'static str {
        match self {
            View::Overview => "🏠 Overview",
            View::CategoryCounts => "📦 Product Categories",
            View::RatingDistribution => "⭐ Rating Analysis",
            View::PriceVsRating => "💰 Price Analysis",
            View::DiscountDistribution => "🏷️ Discount Analysis",
            View::FilterByCategory => "🔍 Filter by Category",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            View::Overview => "🏠 Product Catalogue Overview",
            View::CategoryCounts => "📦 Product Count by Main Category",
            View::RatingDistribution => "⭐ Distribution of Product Ratings",
            View::PriceVsRating => "💰 Relationship Between Price and Rating",
            View::DiscountDistribution => "🏷️ Distribution of Discount Percentage",
            View::FilterByCategory => "🔍 Filter Products by Category",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ViewOutput – what each page renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum ViewOutput {
    Overview(OverviewReport),
    CategoryCounts(Vec<CategoryCount>),
    RatingDistribution(Distribution),
    PriceVsRating(ScatterSeries),
    DiscountDistribution(Distribution),
    FilterByCategory(CategoryListing),
}

impl ViewOutput {
    pub fn view(&self) -> View {
        match self {
            ViewOutput::Overview(_) => View::Overview,
            ViewOutput::CategoryCounts(_) => View::CategoryCounts,
            ViewOutput::RatingDistribution(_) => View::RatingDistribution,
            ViewOutput::PriceVsRating(_) => View::PriceVsRating,
            ViewOutput::DiscountDistribution(_) => View::DiscountDistribution,
            ViewOutput::FilterByCategory(_) => View::FilterByCategory,
        }
    }
}

/// Run the computation behind `view`.
///
/// `category` is only read by [`View::FilterByCategory`]; the only error any
/// view can raise is that page's invalid selection.
pub fn compute(
    view: View,
    table: &ProductTable,
    category: Option<&str>,
    settings: &ViewSettings,
) -> DashboardResult<ViewOutput> {
    let output = match view {
        View::Overview => ViewOutput::Overview(overview::overview(table, settings.preview_rows)),
        View::CategoryCounts => ViewOutput::CategoryCounts(categories::category_counts(
            table,
            settings.top_categories,
        )),
        View::RatingDistribution => ViewOutput::RatingDistribution(
            distribution::rating_distribution(table, settings.rating_bins, settings.density_grid),
        ),
        View::PriceVsRating => ViewOutput::PriceVsRating(scatter::price_vs_rating(table)),
        View::DiscountDistribution => {
            ViewOutput::DiscountDistribution(distribution::discount_distribution(
                table,
                settings.discount_bins,
                settings.density_grid,
            ))
        }
        View::FilterByCategory => {
            ViewOutput::FilterByCategory(filter::filter_by_category(table, category)?)
        }
    };
    Ok(output)
}
