use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("malformed address token '{token}': {detail}")]
    Malformed { token: String, detail: String },

    #[error("ambiguous address token '{0}': mixes '-' and ':' separators")]
    Ambiguous(String),

    #[error("address index {index} out of bounds for collection of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
