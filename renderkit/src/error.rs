pub type Result<T> = std::result::Result<T, DistortionError>;

/// Reasons a strict distortion setup refuses a display configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistortionError {
    #[error("Unrecognized distortion correction type: {0}")]
    UnrecognizedType(String),

    #[error("Missing eye: {eye} (display has {eye_count})")]
    MissingEye { eye: usize, eye_count: usize },
}
