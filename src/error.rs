/// The ways a list or cursor operation can fail.
///
/// All variants signal programmer errors detected at the call site; no
/// operation recovers from them internally, and a failed operation leaves
/// the container unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index argument fell outside the range the operation accepts.
    ///
    /// Insertion and cursor creation accept `0..=len`; access and removal
    /// accept `0..len`.
    #[error("index {index} out of bounds for a list of length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A cursor was asked to move past either end of its list.
    #[error("cursor moved past the end of the list")]
    Exhausted,

    /// The operation is not part of the read-only cursor surface.
    #[error("unsupported cursor operation `{0}`")]
    Unsupported(&'static str),
}

impl Error {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Error::OutOfBounds { index, len }
    }
}
