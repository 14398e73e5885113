#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Output directory must be specified via --output or the AF_OUTPUT_IMAGE_DIR env variable")]
    MissingOutputDir,

    #[error("Validation failed: {0}")]
    Validation(String),
}
