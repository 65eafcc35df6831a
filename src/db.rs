pub mod data_repo;
pub use data_repo::DataRepository;
pub mod data_source;
pub use data_source::{DataSource, InMemorySource, JsonFileSource};
pub mod preferences_repo;
pub use preferences_repo::PreferencesRepository;
pub mod query_cache;
pub use query_cache::{QueryCache, QueryState};
