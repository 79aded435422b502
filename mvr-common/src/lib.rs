// mvr-common/src/lib.rs
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod settings;

// Re-export key types
pub use cache::LocalRepository;
pub use config::Config;
pub use error::{MvrError, Result};
pub use model::{ArtifactCoordinate, JarArtifact};
