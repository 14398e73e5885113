//! Binding-side job construction.
//!
//! Mirrors the Afanasy submission API surface: a [`Job`] owns an
//! ordered list of [`Block`]s, and each block is either numeric
//! (frame-range templated, one command) or task-based (one explicit
//! command per [`Task`]). [`Job::output`] materializes the structure
//! as the JSON payload the server expects.

use serde::Serialize;

/// One discrete unit of work inside a task-based block.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub name: String,
    pub command: String,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: String::new(),
        }
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }
}

/// A block of work inside a job.
///
/// Numeric fields are only serialized once [`set_numeric`] has been
/// called; `tasks` is only serialized when non-empty. A block is
/// expected to be one or the other, never both.
///
/// [`set_numeric`]: Block::set_numeric
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub name: String,
    pub service: String,
    pub parser: String,
    pub working_directory: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_first: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_last: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_per_task: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

impl Block {
    pub fn new(name: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service: service.into(),
            parser: String::new(),
            working_directory: String::new(),
            frame_first: None,
            frame_last: None,
            frames_per_task: None,
            command: None,
            tasks: Vec::new(),
        }
    }

    pub fn set_working_directory(&mut self, working_directory: impl Into<String>) {
        self.working_directory = working_directory.into();
    }

    pub fn set_parser(&mut self, parser: impl Into<String>) {
        self.parser = parser.into();
    }

    /// Configure the block as numeric: the farm expands it into tasks
    /// over `[frame_first, frame_last]`, `frames_per_task` frames each,
    /// substituting the frame placeholder in the templated command.
    pub fn set_numeric(&mut self, frame_first: i64, frame_last: i64, frames_per_task: i64) {
        self.frame_first = Some(frame_first);
        self.frame_last = Some(frame_last);
        self.frames_per_task = Some(frames_per_task);
    }

    /// Set the frame-templated command for a numeric block.
    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = Some(command.into());
    }

    /// Whether [`set_numeric`](Block::set_numeric) has been called.
    pub fn is_numeric(&self) -> bool {
        self.frame_first.is_some()
    }
}

/// Binding-side job object.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub name: String,
    pub blocks: Vec<Block>,
}

impl Job {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    /// Materialize the JSON payload sent to the server.
    pub fn output(&self) -> serde_json::Value {
        serde_json::json!({ "job": self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_block_serializes_frame_range() {
        let mut block = Block::new("Render Block", "generic");
        block.set_working_directory("/proj");
        block.set_parser("generic");
        block.set_numeric(1, 100, 5);
        block.set_command("Render -s @####@ -e @####@ scene.ma");

        let mut job = Job::new("shot01-render-gt");
        job.blocks.push(block);

        let payload = job.output();
        let block_json = &payload["job"]["blocks"][0];
        assert_eq!(block_json["frame_first"], 1);
        assert_eq!(block_json["frame_last"], 100);
        assert_eq!(block_json["frames_per_task"], 5);
        assert!(block_json.get("tasks").is_none());
    }

    #[test]
    fn task_block_omits_numeric_fields() {
        let mut block = Block::new("Comp Block", "generic");
        let mut task = Task::new("comp 1");
        task.set_command("comp --frame 1");
        block.tasks.push(task);

        let mut job = Job::new("comp-job");
        job.blocks.push(block);

        let payload = job.output();
        let block_json = &payload["job"]["blocks"][0];
        assert!(block_json.get("frame_first").is_none());
        assert_eq!(block_json["tasks"][0]["command"], "comp --frame 1");
    }
}
