//! Submission adapter.
//!
//! Translates a backend-independent job description into Afanasy
//! binding calls: one binding block per command block, numeric when
//! the block holds a single command, task-based when it holds
//! several. Binding failures propagate unchanged.

use renderfarm_core::job::Job as JobDescription;

use crate::client::{AfClient, AfError};
use crate::job::{Block, Job, Task};

/// Default output parser assigned to every block.
pub const DEFAULT_PARSER: &str = "generic";

/// Build the binding-side job for a description.
///
/// Fails with [`AfError::EmptyJob`] when the description has no
/// command blocks; everything else is passed through untouched.
pub fn build_af_job(job: &JobDescription, parser: &str) -> Result<Job, AfError> {
    if job.command_blocks.is_empty() {
        return Err(AfError::EmptyJob);
    }

    let mut af_job = Job::new(&job.name);

    for cmd_block in &job.command_blocks {
        let mut block = Block::new(&cmd_block.title, &cmd_block.service);
        block.set_working_directory(&job.working_directory);
        block.set_parser(parser);

        if cmd_block.commands.len() > 1 {
            // Discrete tasks: each carries its own command string, no
            // frame parameterization.
            for cmd in &cmd_block.commands {
                let mut task = Task::new(&cmd.title);
                task.set_command(&cmd.command);
                block.tasks.push(task);
            }
        } else if let Some(cmd) = cmd_block.commands.first() {
            // Single command: numeric block, the command is the
            // frame-parameterized template.
            block.set_numeric(job.start_frame, job.end_frame, job.frames_per_task);
            block.set_command(&cmd.command);
        }

        af_job.blocks.push(block);
    }

    Ok(af_job)
}

/// Submit one job description to the farm.
///
/// Builds the binding job, materializes its JSON output, and sends it
/// in one blocking call. No retry, no rollback.
pub async fn submit_job(
    client: &AfClient,
    job: &JobDescription,
    parser: &str,
) -> Result<(), AfError> {
    let af_job = build_af_job(job, parser)?;
    let payload = af_job.output();

    tracing::debug!(job_name = %job.name, "Sending job payload to Afanasy");
    client.send(&payload).await?;

    tracing::info!(
        job_name = %job.name,
        blocks = af_job.blocks.len(),
        start_frame = job.start_frame,
        end_frame = job.end_frame,
        "Job submitted",
    );
    Ok(())
}
