use tokio::io::AsyncWrite;
use tracing::{info, warn};

use super::args::Command;
use super::error::AppError;
use crate::engine::EngineConfig;
use crate::io::{CsvUserStream, list_media_dir, write_plan, write_violations};
use crate::planner::plan_ranges;
use crate::validation::validate_users;

/// Dry run of a job: read the input, validate it and print the chunk plan.
///
/// Nothing is submitted. A user batch with violations prints the
/// violations instead and fails with [`AppError::ValidationRejected`].
pub async fn plan_job<W>(command: &Command, config: &EngineConfig, writer: W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin + Send,
{
    let (total, mode) = match command {
        Command::Users { path } => {
            let users = CsvUserStream::from_file(path).await?.read_all().await?;
            let violations = validate_users(&users);
            if !violations.is_empty() {
                warn!(
                    records = users.len(),
                    violations = violations.len(),
                    "Batch rejected by validation"
                );
                write_violations(&violations, writer).await?;
                return Err(AppError::ValidationRejected {
                    count: violations.len(),
                });
            }
            (users.len(), config.user_import_mode())
        }
        Command::Media { dir, selected } => {
            let files = list_media_dir(dir).await?;
            let mode = if *selected {
                config.selected_files_mode()
            } else {
                config.folder_batch_mode()
            };
            (files.len(), mode)
        }
    };

    let ranges = plan_ranges(total, mode.policy());
    info!(
        mode = mode.name(),
        records = total,
        chunks = ranges.len(),
        "Planned ingestion"
    );
    write_plan(&ranges, writer).await?;
    Ok(())
}
