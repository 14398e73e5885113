//! Backend-independent job description.
//!
//! A [`Job`] is the unit handed to a submission backend: one or more
//! [`CommandBlock`]s, each holding one or more [`Command`]s. All three
//! types are constructed once and never mutated afterwards.
//!
//! How a block is materialized on the farm depends on its shape:
//! a block with exactly one command becomes a numeric (frame-range)
//! block using that command as a frame-parameterized template, while a
//! block with several commands becomes one discrete task per command.

/// Default service tag for command blocks.
pub const DEFAULT_SERVICE: &str = "generic";

/// A single fully formed, shell-quoted invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub title: String,
    pub command: String,
}

impl Command {
    pub fn new(title: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            command: command.into(),
        }
    }
}

/// A group of commands sharing a working directory and service tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBlock {
    pub title: String,
    pub commands: Vec<Command>,
    pub service: String,
}

impl CommandBlock {
    /// Create a block with the default `"generic"` service tag.
    pub fn new(title: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            title: title.into(),
            commands,
            service: DEFAULT_SERVICE.to_string(),
        }
    }

    pub fn with_service(
        title: impl Into<String>,
        commands: Vec<Command>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            commands,
            service: service.into(),
        }
    }
}

/// One submittable unit of farm work.
///
/// Invariants (documented, not enforced here): `start_frame <=
/// end_frame`, `frames_per_task >= 1`, and at least one command block
/// is required for the job to be submittable. The submission backend
/// rejects an empty job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    pub working_directory: String,
    pub start_frame: i64,
    pub end_frame: i64,
    pub frames_per_task: i64,
    pub command_blocks: Vec<CommandBlock>,
}

impl Job {
    /// Create a job with the default of one frame per task.
    pub fn new(
        name: impl Into<String>,
        working_directory: impl Into<String>,
        start_frame: i64,
        end_frame: i64,
        command_blocks: Vec<CommandBlock>,
    ) -> Self {
        Self {
            name: name.into(),
            working_directory: working_directory.into(),
            start_frame,
            end_frame,
            frames_per_task: 1,
            command_blocks,
        }
    }

    pub fn frames_per_task(mut self, frames_per_task: i64) -> Self {
        self.frames_per_task = frames_per_task;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_defaults_to_generic_service() {
        let block = CommandBlock::new("Render Block", Vec::new());
        assert_eq!(block.service, DEFAULT_SERVICE);
    }

    #[test]
    fn job_defaults_to_one_frame_per_task() {
        let job = Job::new("shot01-render-gt", "/proj", 1, 100, Vec::new());
        assert_eq!(job.frames_per_task, 1);
        assert_eq!(job.frames_per_task(5).frames_per_task, 5);
    }
}
