//! Farm submission configuration loaded from environment variables.
//!
//! Built once at process start and passed by reference to everything
//! that needs it; no module reads the environment behind the caller's
//! back.

use crate::error::CoreError;

/// Default Maya batch-render executable name.
pub const DEFAULT_RENDER_EXEC: &str = "Render";

/// Default Afanasy server HTTP endpoint.
pub const DEFAULT_SERVER_ADDRESS: &str = "http://localhost:51000";

/// Submission configuration, resolved from the environment.
///
/// | Env Var                 | Default                  | Description                              |
/// |-------------------------|--------------------------|------------------------------------------|
/// | `AF_WORKING_DIRECTORY`  | `""`                     | Fallback Maya project directory          |
/// | `MAYA_RENDER_EXEC`      | `Render`                 | Maya batch-render executable             |
/// | `MAYA_REDSHIFT_WRAPPER` | `""`                     | Optional wrapper executable for `Render` |
/// | `AF_OUTPUT_IMAGE_DIR`   | `""`                     | Fallback output image directory          |
/// | `AF_SERVER_ADDRESS`     | `http://localhost:51000` | Afanasy server HTTP endpoint             |
///
/// Empty string means "unset" for the optional paths.
#[derive(Debug, Clone)]
pub struct FarmConfig {
    pub working_directory: String,
    pub maya_render_exec: String,
    pub maya_redshift_wrapper: String,
    pub output_image_dir: String,
    pub server_address: String,
}

impl FarmConfig {
    /// Load the configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            working_directory: env_or("AF_WORKING_DIRECTORY", ""),
            maya_render_exec: env_or("MAYA_RENDER_EXEC", DEFAULT_RENDER_EXEC),
            maya_redshift_wrapper: env_or("MAYA_REDSHIFT_WRAPPER", ""),
            output_image_dir: env_or("AF_OUTPUT_IMAGE_DIR", ""),
            server_address: env_or("AF_SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
        }
    }

    /// Resolve the output image directory from a CLI flag or the
    /// environment fallback.
    ///
    /// The flag wins when non-empty. If neither is set this is a fatal
    /// configuration error, raised before any job is built.
    pub fn resolve_output_dir(&self, flag: &str) -> Result<String, CoreError> {
        let dir = if flag.is_empty() {
            self.output_image_dir.as_str()
        } else {
            flag
        };
        if dir.is_empty() {
            Err(CoreError::MissingOutputDir)
        } else {
            Ok(dir.to_string())
        }
    }

    /// Resolve the Maya project directory from a CLI flag or the
    /// environment fallback. An empty result is tolerated; the command
    /// line will carry it through as-is.
    pub fn resolve_project_dir(&self, flag: &str) -> String {
        if flag.is_empty() {
            self.working_directory.clone()
        } else {
            flag.to_string()
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
