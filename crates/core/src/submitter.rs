//! Maya/Redshift job assembly.
//!
//! Turns high-level render parameters into a backend-independent
//! [`Job`] description: exactly one command block holding exactly one
//! command, the rendered invocation from [`crate::command`]. The
//! block's single-command shape makes the backend expand it as a
//! numeric frame-range block.

use crate::command::build_render_command;
use crate::config::FarmConfig;
use crate::job::{Command, CommandBlock, Job};

/// Title of the single command inside a render job.
pub const COMMAND_TITLE: &str = "Maya Redshift Render";

/// Title of the single block inside a render job.
pub const BLOCK_TITLE: &str = "Render Block";

/// Parameters for one Maya/Redshift render job.
#[derive(Debug, Clone)]
pub struct RenderJobParams {
    pub job_name: String,
    pub project_dir: String,
    pub scene_file: String,
    pub output_path: String,
    pub start_frame: i64,
    pub end_frame: i64,
    pub frames_per_task: i64,
    /// Extra MEL appended after the fixed pre-render prelude.
    pub pre_render_script: String,
    pub log_level: i32,
}

impl RenderJobParams {
    /// Create params with the defaults: one frame per task, no extra
    /// pre-render script, log level 2.
    pub fn new(
        job_name: impl Into<String>,
        project_dir: impl Into<String>,
        scene_file: impl Into<String>,
        output_path: impl Into<String>,
        start_frame: i64,
        end_frame: i64,
    ) -> Self {
        Self {
            job_name: job_name.into(),
            project_dir: project_dir.into(),
            scene_file: scene_file.into(),
            output_path: output_path.into(),
            start_frame,
            end_frame,
            frames_per_task: 1,
            pre_render_script: String::new(),
            log_level: 2,
        }
    }
}

/// Assemble one submittable render job. Pure construction, no side
/// effects.
pub fn create_maya_redshift_job(config: &FarmConfig, params: &RenderJobParams) -> Job {
    let command_str = build_render_command(
        config,
        &params.scene_file,
        &params.project_dir,
        &params.output_path,
        &params.pre_render_script,
        params.log_level,
    );

    let command = Command::new(COMMAND_TITLE, command_str);
    let block = CommandBlock::new(BLOCK_TITLE, vec![command]);

    Job::new(
        &params.job_name,
        &params.project_dir,
        params.start_frame,
        params.end_frame,
        vec![block],
    )
    .frames_per_task(params.frames_per_task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_RENDER_EXEC, DEFAULT_SERVER_ADDRESS};

    fn test_config() -> FarmConfig {
        FarmConfig {
            working_directory: String::new(),
            maya_render_exec: DEFAULT_RENDER_EXEC.to_string(),
            maya_redshift_wrapper: String::new(),
            output_image_dir: String::new(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
        }
    }

    #[test]
    fn assembles_single_block_single_command() {
        let params = RenderJobParams::new(
            "shot01-render-gt",
            "/proj",
            "/proj/scenes/shot01.ma",
            "/out/shot01-render-gt",
            1,
            100,
        );
        let job = create_maya_redshift_job(&test_config(), &params);

        assert_eq!(job.name, "shot01-render-gt");
        assert_eq!(job.working_directory, "/proj");
        assert_eq!(job.start_frame, 1);
        assert_eq!(job.end_frame, 100);
        assert_eq!(job.frames_per_task, 1);
        assert_eq!(job.command_blocks.len(), 1);

        let block = &job.command_blocks[0];
        assert_eq!(block.title, BLOCK_TITLE);
        assert_eq!(block.commands.len(), 1);
        assert_eq!(block.commands[0].title, COMMAND_TITLE);
        assert!(block.commands[0].command.contains("-r redshift"));
        assert!(block.commands[0].command.ends_with("/proj/scenes/shot01.ma"));
    }

    #[test]
    fn frames_per_task_is_carried_through() {
        let mut params =
            RenderJobParams::new("j", "/proj", "/proj/s.ma", "/out", 10, 20);
        params.frames_per_task = 5;
        let job = create_maya_redshift_job(&test_config(), &params);
        assert_eq!(job.frames_per_task, 5);
    }
}
