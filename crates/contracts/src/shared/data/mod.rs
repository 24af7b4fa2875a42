//! Data access: the repository seam, its in-memory implementation and the
//! compiled-in mock data source.

pub mod data_source;
pub mod repository;
pub mod seed;

pub use data_source::{DataSource, MockDataSource};
pub use repository::{InMemoryRepository, Repository, RepositoryError};
