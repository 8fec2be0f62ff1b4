pub type PanofoldResult<T> = Result<T, PanofoldError>;

/// Request-scoped failure of a net conversion.
///
/// Every variant aborts the whole request; no partially rendered page is ever
/// handed back alongside an error.
#[derive(thiserror::Error, Debug)]
pub enum PanofoldError {
    #[error("decode error: {0}")]
    Decode(String),

    #[error("allocation error: {0}")]
    Allocation(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PanofoldError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
