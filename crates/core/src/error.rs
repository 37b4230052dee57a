use crate::types::RoundStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("word bank contains no words")]
    EmptyWordBank,
    #[error("image gallery contains no panels (every panel must end with ',')")]
    EmptyGallery,
    #[error("round is already over ({0:?})")]
    RoundOver(RoundStatus),
}
