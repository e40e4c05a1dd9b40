use thiserror::Error;

/// error types of the Reynolds bearing task
#[derive(Debug, Error)]
pub enum ReynoldsError {
    #[error("{0}")]
    InvalidParameter(String),
    #[error("attribute '{0}' is read-only")]
    ReadOnly(String),
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),
    #[error("{0} is not implemented yet")]
    NotImplemented(String),
    #[error("grid node ({i}, {j}) is outside of the {n_theta} x {n_z} grid")]
    IndexOutOfRange {
        i: usize,
        j: usize,
        n_theta: usize,
        n_z: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
