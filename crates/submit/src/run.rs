//! Submission driver: validate arguments, fan out over quality
//! presets, and submit the resulting jobs sequentially.
//!
//! Each preset produces its own job, named `{stem}-render-{preset}`
//! and rendering into its own subdirectory of the output root. Jobs
//! are submitted one after another; the first failure stops the run,
//! leaving earlier submissions on the farm.

use std::path::Path;

use renderfarm_afanasy::client::{AfClient, AfError};
use renderfarm_afanasy::submit::{submit_job, DEFAULT_PARSER};
use renderfarm_core::command::scene_stem;
use renderfarm_core::config::FarmConfig;
use renderfarm_core::error::CoreError;
use renderfarm_core::quality::QualityPreset;
use renderfarm_core::submitter::{create_maya_redshift_job, RenderJobParams};

use crate::args::SubmitArgs;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Farm(#[from] AfError),
}

/// Presets selected by the `--quality` flag: one preset when named,
/// every preset (lowest quality first) when empty.
pub fn selected_presets(quality: &str) -> Result<Vec<QualityPreset>, CoreError> {
    if quality.is_empty() {
        Ok(QualityPreset::all_descending().to_vec())
    } else {
        QualityPreset::from_str_value(quality)
            .map(|preset| vec![preset])
            .map_err(CoreError::Validation)
    }
}

/// Job name for one preset: `{stem}-render-{preset}`, where the stem
/// is the `--job_name` flag when given, else the scene file name.
pub fn job_name_for_preset(job_name_flag: &str, scene_file: &str, preset: QualityPreset) -> String {
    let stem = if job_name_flag.is_empty() {
        scene_stem(scene_file)
    } else {
        job_name_flag
    };
    format!("{stem}-render-{}", preset.as_str().to_lowercase())
}

/// Check the frame-range invariants before anything is built.
pub fn validate_args(args: &SubmitArgs) -> Result<(), CoreError> {
    if args.start > args.end {
        return Err(CoreError::Validation(format!(
            "Start frame {} is after end frame {}",
            args.start, args.end
        )));
    }
    if args.frames_per_task < 1 {
        return Err(CoreError::Validation(format!(
            "frames-per-task must be at least 1, got {}",
            args.frames_per_task
        )));
    }
    Ok(())
}

/// Run one submission pass: one job per selected preset, submitted
/// sequentially.
pub async fn run(args: &SubmitArgs, config: &FarmConfig) -> Result<(), SubmitError> {
    validate_args(args)?;

    // Resolved before any job is built; missing output is fatal here.
    let out_dir = config.resolve_output_dir(&args.output)?;
    let project_dir = config.resolve_project_dir(&args.project_dir);
    let presets = selected_presets(&args.quality)?;

    let client = AfClient::new(config.server_address.clone());

    for preset in presets {
        let job_name = job_name_for_preset(&args.job_name, &args.scene, preset);
        let output_dir = Path::new(out_dir.trim_matches('"'))
            .join(&job_name)
            .to_string_lossy()
            .into_owned();
        let pre_render_script = format!(
            "{}{}",
            preset.render_settings_script(),
            args.pre_render_script
        );

        let mut params = RenderJobParams::new(
            &job_name,
            &project_dir,
            &args.scene,
            &output_dir,
            args.start,
            args.end,
        );
        params.frames_per_task = args.frames_per_task;
        params.pre_render_script = pre_render_script;
        params.log_level = args.log_level;

        let job = create_maya_redshift_job(config, &params);

        tracing::info!(
            job_name = %job_name,
            preset = preset.as_str(),
            start_frame = args.start,
            end_frame = args.end,
            output_dir = %output_dir,
            "Submitting render job",
        );
        submit_job(&client, &job, DEFAULT_PARSER).await?;
    }

    Ok(())
}
