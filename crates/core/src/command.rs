//! Maya/Redshift command-line construction.
//!
//! Builds the single shell-quoted invocation string that a farm task
//! executes. Frame numbers are not resolved here: the start/end flags
//! carry the literal `@####@` placeholder, which the farm substitutes
//! per task when it expands a numeric block.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use crate::config::FarmConfig;

/// Literal frame token substituted by the farm at task expansion time.
pub const FRAME_PLACEHOLDER: &str = "@####@";

/// Render engine passed to Maya's `-r` flag.
pub const RENDER_ENGINE: &str = "redshift";

/// Output image format passed to `-of`.
pub const OUTPUT_FORMAT: &str = "exr";

/// Build the full render invocation for one scene.
///
/// The executable and optional wrapper come from `config`; when the
/// wrapper is set the invocation is `wrapper exe ...`, otherwise
/// `exe ...`. Paths are defensively normalized (surrounding quotes
/// and trailing separators stripped) but otherwise passed through
/// unvalidated; a bad path produces a bad command, not an error.
///
/// `pre_render_script` is extra MEL appended after the fixed prelude
/// (OpenCL off, evaluation manager off, Redshift log level).
pub fn build_render_command(
    config: &FarmConfig,
    scene_file: &str,
    project_dir: &str,
    output_path: &str,
    pre_render_script: &str,
    log_level: i32,
) -> String {
    let exe = strip_decorations(&config.maya_render_exec);
    let wrapper = strip_decorations(&config.maya_redshift_wrapper);

    let mut argv: Vec<String> = Vec::new();
    if !wrapper.is_empty() {
        argv.push(wrapper.to_string());
    }
    argv.push(exe.to_string());

    let proj = normalize_path(project_dir);
    let proj = strip_decorations(&proj).to_string();

    let mut out = normalize_path(output_path);
    if !out.ends_with(MAIN_SEPARATOR) {
        out.push(MAIN_SEPARATOR);
    }

    let image_name = scene_stem(scene_file);

    let pre_render_cmd = format!(
        "optionVar -iv useOpenCL 0;\
         catchQuiet(`evaluationManager -mode off`);\
         setAttr redshiftOptions.logLevel {log_level};\
         {pre_render_script}"
    );

    argv.extend([
        "-r".to_string(),
        RENDER_ENGINE.to_string(),
        "-proj".to_string(),
        proj,
        "-rd".to_string(),
        out,
        "-of".to_string(),
        OUTPUT_FORMAT.to_string(),
        "-im".to_string(),
        image_name.to_string(),
    ]);

    if !pre_render_cmd.is_empty() {
        argv.push("-preRender".to_string());
        argv.push(pre_render_cmd);
    }

    argv.extend([
        "-s".to_string(),
        FRAME_PLACEHOLDER.to_string(),
        "-e".to_string(),
        FRAME_PLACEHOLDER.to_string(),
        scene_file.to_string(),
    ]);

    shell_words::join(&argv)
}

/// Strip surrounding quote characters, then trailing path separators.
///
/// Environment values sometimes arrive quoted or with a trailing
/// slash; both break the invocation if left in place.
pub fn strip_decorations(value: &str) -> &str {
    value
        .trim_matches('"')
        .trim_matches('\'')
        .trim_end_matches(['/', '\\'])
}

/// Lexically normalize a path: collapse duplicate separators and
/// resolve `.`/`..` components without touching the filesystem.
pub fn normalize_path(path: &str) -> String {
    let mut out = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        ".".to_string()
    } else {
        out.to_string_lossy().into_owned()
    }
}

/// Derive the output image base name from a scene file path: the file
/// name with its extension removed, splitting on either separator
/// flavor so Windows-style scene paths behave on the farm.
pub fn scene_stem(scene_file: &str) -> &str {
    let base = scene_file
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(scene_file);
    match base.rfind('.') {
        Some(idx) if idx > 0 => &base[..idx],
        _ => base,
    }
}
