use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognised mode: {mode:?}")]
    UnrecognisedMode { mode: String },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnrecognisedMode { .. } => "UnrecognisedMode",
        }
    }
}
