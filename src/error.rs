use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard error taxonomy
// ---------------------------------------------------------------------------

/// Errors surfaced to the presentation layer.
///
/// Each one ends the request that raised it; the UI shows it as a status
/// message and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The source file could not be read or parsed.
    #[error("Failed to load {}: {reason}", path.display())]
    DataLoad { path: PathBuf, reason: String },

    /// A required column is absent from the source table.
    #[error("Missing required column '{column}'")]
    Schema { column: String },

    /// The filter view was asked for a category the table does not contain.
    #[error("Unknown category '{category}'")]
    InvalidSelection { category: String },
}

pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    /// Wrap a loader failure, keeping the whole context chain in the message.
    pub fn data_load(path: impl Into<PathBuf>, err: &anyhow::Error) -> Self {
        DashboardError::DataLoad {
            path: path.into(),
            reason: format!("{err:#}"),
        }
    }
}
