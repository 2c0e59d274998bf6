use std::sync::Arc;

use crate::data::SalesDataset;

/// Shared request state: the dataset provider built once at startup.
/// Cloning is cheap, every handler reads the same immutable records.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<SalesDataset>,
}

impl AppState {
    pub fn new(dataset: Arc<SalesDataset>) -> Self {
        Self { dataset }
    }
}
