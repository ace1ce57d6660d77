use std::path::PathBuf;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::data::cache::PreparedCache;
use crate::data::model::ProductTable;
use crate::error::DashboardError;
use crate::views::{self, View, ViewOutput};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Prepared tables, one per source signature.
    pub cache: PreparedCache,

    /// File the dashboard currently reports on.
    pub source: PathBuf,

    /// Prepared table for `source` (None until a load succeeds).
    pub table: Option<Arc<ProductTable>>,

    /// Page selected in the navigation panel.
    pub view: View,

    /// Category picked on the filter page.
    pub selected_category: Option<String>,

    /// Output of the current page (cached until view, selection or table change).
    pub output: Option<ViewOutput>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            source: config.data_path.clone(),
            config,
            cache: PreparedCache::new(),
            table: None,
            view: View::default(),
            selected_category: None,
            output: None,
            status_message: None,
        }
    }

    /// Point the dashboard at `path`, preparing it through the cache.
    /// On failure the previous source and table stay current.
    pub fn load_source(&mut self, path: PathBuf) {
        match self.cache.get_or_prepare(&path) {
            Ok(table) => {
                self.source = path;
                if let Some(cat) = &self.selected_category {
                    if !table.categories.contains(cat) {
                        self.selected_category = None;
                    }
                }
                self.table = Some(table);
                self.status_message = None;
                self.recompute();
            }
            Err(e) => self.fail(e),
        }
    }

    /// Drop the cached table for the current source and prepare it again.
    pub fn reload(&mut self) {
        self.cache.invalidate(&self.source);
        self.load_source(self.source.clone());
        log::debug!("{} preparations so far", self.cache.prepare_count());
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view || self.output.is_none() {
            self.view = view;
            self.recompute();
        }
    }

    pub fn select_category(&mut self, category: String) {
        if self.selected_category.as_deref() != Some(category.as_str()) {
            self.selected_category = Some(category);
            self.recompute();
        }
    }

    /// Recompute the current page's output from the prepared table.
    pub fn recompute(&mut self) {
        let Some(table) = &self.table else {
            self.output = None;
            return;
        };
        match views::compute(
            self.view,
            table,
            self.selected_category.as_deref(),
            &self.config.views,
        ) {
            Ok(output) => {
                log::debug!("Computed {}", output.view());
                if let ViewOutput::FilterByCategory(listing) = &output {
                    self.selected_category = Some(listing.category.clone());
                }
                self.output = Some(output);
                self.status_message = None;
            }
            Err(e) => {
                self.output = None;
                self.fail(e);
            }
        }
    }

    fn fail(&mut self, e: DashboardError) {
        log::error!("{e}");
        self.status_message = Some(format!("Error: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "product_category_tree,retail_price,discounted_price,\
                          product_rating,overall_rating,product_name,brand\n\
                          \"['Clothing >> Women']\",100,40,4,4,Kurta,Acme\n\
                          \"['Clothing >> Men']\",200,150,No rating available,5,Shirt,Acme\n\
                          \"['Watches >> Men']\",0,0,3,3,Watch,Tick\n";

    fn state_for(dir: &tempfile::TempDir) -> AppState {
        let path = dir.path().join("products.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let config = DashboardConfig {
            data_path: path.clone(),
            ..DashboardConfig::default()
        };
        let mut state = AppState::new(config);
        state.load_source(path);
        state
    }

    #[test]
    fn loading_computes_the_overview() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(&dir);

        assert!(state.status_message.is_none());
        match &state.output {
            Some(ViewOutput::Overview(report)) => {
                assert_eq!(report.total_products, 3);
                assert_eq!(report.unique_categories, 2);
                assert_eq!(report.average_rating, 3.5);
            }
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn filter_page_defaults_and_switches_category() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_for(&dir);

        state.set_view(View::FilterByCategory);
        assert_eq!(state.selected_category.as_deref(), Some("Clothing"));

        state.select_category("Watches".to_string());
        match &state.output {
            Some(ViewOutput::FilterByCategory(listing)) => {
                assert_eq!(listing.count(), 1);
                assert_eq!(listing.rows[0].product_name.as_deref(), Some("Watch"));
            }
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn invalid_selection_surfaces_as_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_for(&dir);
        state.set_view(View::FilterByCategory);

        state.select_category("Garden".to_string());
        assert!(state.output.is_none());
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("Garden")));
    }

    #[test]
    fn missing_source_surfaces_as_status() {
        let mut state = AppState::new(DashboardConfig::default());
        state.load_source(PathBuf::from("no/such/products.csv"));
        assert!(state.table.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn failed_open_keeps_the_current_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_for(&dir);
        let good = state.source.clone();

        state.load_source(dir.path().join("broken.csv"));
        assert_eq!(state.source, good);
        assert!(state.table.is_some());
        assert!(matches!(state.output, Some(ViewOutput::Overview(_))));
        assert!(state.status_message.is_some());

        state.reload();
        assert!(state.status_message.is_none());
        assert_eq!(state.cache.prepare_count(), 2);
    }

    #[test]
    fn reload_prepares_again() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_for(&dir);
        assert_eq!(state.cache.prepare_count(), 1);

        state.set_view(View::RatingDistribution);
        assert_eq!(state.cache.prepare_count(), 1);

        state.reload();
        assert_eq!(state.cache.prepare_count(), 2);
        assert!(matches!(state.output, Some(ViewOutput::RatingDistribution(_))));
    }
}
