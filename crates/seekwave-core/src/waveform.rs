//! Immutable waveform data
//!
//! A [`Waveform`] is an ordered sequence of non-negative integer amplitudes.
//! It never mutates after construction; operations that would change it (such
//! as blending two waveforms together) produce a new instance instead. The
//! maximum amplitude is computed lazily on first access and cached, and the
//! cache is shared between clones.

use std::sync::{Arc, OnceLock};

use crate::error::{WaveError, WaveResult};

/// An immutable view over a sequence of amplitude samples
#[derive(Debug, Clone)]
pub struct Waveform {
    samples: Arc<[u32]>,
    max: Arc<OnceLock<u32>>,
}

impl Waveform {
    /// Create a waveform from a sample vector
    pub fn new(samples: Vec<u32>) -> Self {
        Self {
            samples: samples.into(),
            max: Arc::new(OnceLock::new()),
        }
    }

    /// The empty waveform (zero waves, max value 0)
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of waves in the sequence
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Whether the waveform holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Amplitude at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`. Indexing past the end is a caller bug;
    /// use [`Waveform::try_value_at`] for a checked variant.
    pub fn value_at(&self, index: usize) -> u32 {
        self.samples[index]
    }

    /// Amplitude at `index`, or [`WaveError::IndexOutOfRange`]
    pub fn try_value_at(&self, index: usize) -> WaveResult<u32> {
        self.samples
            .get(index)
            .copied()
            .ok_or(WaveError::IndexOutOfRange {
                index,
                count: self.samples.len(),
            })
    }

    /// Maximum amplitude, 0 for an empty waveform
    ///
    /// Computed once on first access and cached for the lifetime of the
    /// waveform (clones share the cache).
    pub fn max_value(&self) -> u32 {
        *self
            .max
            .get_or_init(|| self.samples.iter().copied().max().unwrap_or(0))
    }

    /// Borrow the raw samples
    pub fn samples(&self) -> &[u32] {
        &self.samples
    }
}

impl Default for Waveform {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u32>> for Waveform {
    fn from(samples: Vec<u32>) -> Self {
        Self::new(samples)
    }
}

impl From<&[u32]> for Waveform {
    fn from(samples: &[u32]) -> Self {
        Self::new(samples.to_vec())
    }
}

impl PartialEq for Waveform {
    fn eq(&self, other: &Self) -> bool {
        self.samples == other.samples
    }
}
