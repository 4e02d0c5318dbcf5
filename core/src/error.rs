use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown parameter '{id}'")]
    UnknownParameter { id: String },

    #[error("Unknown forecast variable '{id}'")]
    UnknownVariable { id: String },

    #[error("Invalid forecast horizon '{raw}': expected '<days>d' or '1 month'")]
    InvalidHorizon { raw: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Float id '{id}' carries no platform number")]
    InvalidPlatformId { id: String },

    #[error("Malformed data URI: {reason}")]
    MalformedDataUri { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SynthResult<T> = Result<T, SynthError>;
