//! CLI surface for the Maya/Redshift submitter.

use clap::Parser;

/// Submit a Maya Redshift render job to the Afanasy render farm.
#[derive(Debug, Parser)]
#[command(name = "submit-maya-redshift")]
pub struct SubmitArgs {
    /// Name stem for the render job; defaults to the scene file name.
    #[arg(long = "job_name", default_value = "")]
    pub job_name: String,

    /// Path to the Maya scene file.
    #[arg(long)]
    pub scene: String,

    /// Start frame of the render.
    #[arg(long)]
    pub start: i64,

    /// End frame of the render.
    #[arg(long)]
    pub end: i64,

    /// Render quality preset (GT, HIGH, MEDIUM, LOW, AGGRESSIVE).
    /// Empty submits one job per preset.
    #[arg(long, default_value = "")]
    pub quality: String,

    /// Maya project directory; defaults to AF_WORKING_DIRECTORY.
    #[arg(long = "project_dir", default_value = "")]
    pub project_dir: String,

    /// Output directory for rendered images; defaults to
    /// AF_OUTPUT_IMAGE_DIR.
    #[arg(long, default_value = "")]
    pub output: String,

    /// Number of frames per farm task.
    #[arg(long = "frames-per-task", default_value_t = 5)]
    pub frames_per_task: i64,

    /// Extra MEL appended after the quality preset settings.
    #[arg(long = "pre-render-script", default_value = "")]
    pub pre_render_script: String,

    /// Log level for the Redshift renderer.
    #[arg(long = "log-level", default_value_t = 2)]
    pub log_level: i32,
}
