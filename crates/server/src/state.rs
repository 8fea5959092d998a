use std::sync::Arc;
use podscout_core::{CatalogLoader, Config, GenreIndex, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    loader: Arc<CatalogLoader>,
    genre_index: GenreIndex,
}

impl AppState {
    pub fn new(config: Config, loader: Arc<CatalogLoader>, genre_index: GenreIndex) -> Self {
        Self {
            config,
            loader,
            genre_index,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    pub fn genre_index(&self) -> &GenreIndex {
        &self.genre_index
    }

    pub fn page_size(&self) -> usize {
        self.config.browse.page_size
    }
}
