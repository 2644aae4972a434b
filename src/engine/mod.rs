pub mod config;
pub mod ingestor;

// Re-export commonly used types
pub use config::EngineConfig;
pub use ingestor::IngestionEngine;
