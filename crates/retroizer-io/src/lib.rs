//! Audio file I/O for the retroizer processor.
//!
//! Offline WAV reading and writing, always surfaced as non-interleaved
//! stereo ([`StereoSamples`]) since the effect rack processes channels
//! independently. Mono files are duplicated to both channels on read.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use retroizer_io::{read_wav_stereo, write_wav_stereo};
//!
//! let (mut samples, spec) = read_wav_stereo("input.wav")?;
//! // ... process samples.left / samples.right ...
//! write_wav_stereo("output.wav", &samples, spec)?;
//! ```

mod wav;

pub use wav::{
    StereoSamples, WavFormat, WavInfo, WavSpec, read_wav_info, read_wav_stereo, write_wav_stereo,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
