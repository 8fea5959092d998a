pub mod catalog;
pub mod config;
pub mod derive;
pub mod genre;
pub mod loader;
pub mod testing;

pub use catalog::{
    CatalogFetchError, CatalogSource, HttpCatalogSource, HttpSourceConfig, PodcastEntry,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use derive::{derive, Criteria, DerivedPage, SortMode};
pub use genre::{Genre, GenreIndex};
pub use loader::{CatalogLoader, LoadPhase, LoadState, LoadStatus};
