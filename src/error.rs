pub type OverpressResult<T> = Result<T, OverpressError>;

#[derive(thiserror::Error, Debug)]
pub enum OverpressError {
    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OverpressError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }
}
