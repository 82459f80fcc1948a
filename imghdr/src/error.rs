#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Insufficient data to determine format: got {len} bytes, need at least {needed}")]
    InsufficientData { len: usize, needed: usize },
}
