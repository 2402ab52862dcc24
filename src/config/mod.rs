#[cfg(feature = "cli")]
pub mod cli;
pub mod model_artifact;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use model_artifact::ModelArtifact;
