pub mod args;
pub mod cli;
pub mod error;
pub mod plan;

// Re-export commonly used types
pub use args::{CliArgs, Command, USAGE};
pub use cli::{CliApp, init_tracing};
pub use error::AppError;
pub use plan::plan_job;
