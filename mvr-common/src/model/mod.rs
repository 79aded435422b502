// src/model/mod.rs
// Declares the modules within the model directory.
pub mod artifact;
pub mod coordinate;

// Re-export
pub use artifact::JarArtifact;
pub use coordinate::ArtifactCoordinate;
