use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Where the product table is read from when nothing else is given.
pub const DEFAULT_DATA_PATH: &str = "flipkart_com-ecommerce_sample.csv";

/// Process-level settings. Fixed at startup.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub views: ViewSettings,
}

/// Sizes used by the view computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    /// Rows shown verbatim in the overview preview.
    pub preview_rows: usize,
    /// Categories kept in the category-count chart.
    pub top_categories: usize,
    pub rating_bins: usize,
    pub discount_bins: usize,
    /// Sample points along each density curve.
    pub density_grid: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            preview_rows: 10,
            top_categories: 15,
            rating_bins: 30,
            discount_bins: 50,
            density_grid: 200,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            views: ViewSettings::default(),
        }
    }
}

impl DashboardConfig {
    /// Build from process arguments: the first positional argument, when
    /// present, replaces the data path.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let mut config = Self::default();
        // skip program name
        args.next();
        if let Some(path) = args.next() {
            config.data_path = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults_point_at_the_bundled_csv() {
        let config = DashboardConfig::from_args(args(&["catalog-dash"]));
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.views.rating_bins, 30);
        assert_eq!(config.views.discount_bins, 50);
    }

    #[test]
    fn first_argument_overrides_data_path() {
        let config = DashboardConfig::from_args(args(&["catalog-dash", "other.csv"]));
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
    }
}
