// mvr-core/src/lib.rs

pub mod cancel;
pub mod fetcher;
pub mod resolver;

// Re-export key types for easier use by the CLI crate
pub use cancel::CancelToken;
pub use fetcher::ArtifactFetcher;
pub use resolver::DependencyResolver;
