//! Waveform error types

use thiserror::Error;

/// Errors that can occur when accessing waveform data
///
/// Degenerate geometry and progress inputs (unmeasured surfaces, empty
/// waveforms, mismatched blend lengths) are handled by policy and never
/// produce an error. Indexing past the end of a waveform is the one genuine
/// fault condition: it indicates a caller bug, not a recoverable state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    /// Wave index outside `[0, count)`
    #[error("wave index {index} out of range for waveform of {count} waves")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Result type for waveform operations
pub type WaveResult<T> = Result<T, WaveError>;
