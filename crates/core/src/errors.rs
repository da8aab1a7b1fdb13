use core::fmt::Display;

use displaydoc::Display;

/// A specialized result type for the carousel.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while setting up or driving a carousel.
///
/// An empty element sequence is not an error: advancing such a carousel does nothing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Debug)]
pub enum Error {
    /// Unable to query the display elements sequence.
    SourceUnavailable,
    /// The tick interval must be greater than zero.
    InvalidInterval,
    /// Configuration decoding error.
    Decode,
    /// The rotation task is no longer running.
    Stopped,
    /// No timer runtime is available to drive the carousel.
    NoRuntime,
}

impl Error {
    /// Creates a new element source error.
    pub fn source_unavailable<E>(err: E) -> Self
    where
        E: Display,
    {
        log::warn!("Unable to query carousel elements: {}", err);
        Self::SourceUnavailable
    }

    /// Creates a new decode data error.
    pub fn decode<E>(err: E) -> Self
    where
        E: Display,
    {
        log::debug!("Unable to decode carousel configuration: {}", err);
        Self::Decode
    }

    pub fn stopped<E>(err: E) -> Self
    where
        E: Display,
    {
        log::debug!("Rotation task is gone: {}", err);
        Self::Stopped
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
