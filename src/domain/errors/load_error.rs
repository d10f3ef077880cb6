//! Channel-load and selection error types.

use thiserror::Error;

/// Errors surfaced by the channel loader capability.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum LoadError {
    #[error("channel data unavailable: {message}")]
    ChannelsUnavailable { message: String },

    #[error("channel selection failed: {message}")]
    SelectionFailed { message: String },

    #[error("network error while loading: {message}")]
    Network { message: String },

    #[error("no teams available to select")]
    NoTeamsAvailable,
}

impl LoadError {
    /// Creates a channels-unavailable error.
    #[must_use]
    pub fn channels_unavailable(message: impl Into<String>) -> Self {
        Self::ChannelsUnavailable {
            message: message.into(),
        }
    }

    /// Creates a selection-failed error.
    #[must_use]
    pub fn selection_failed(message: impl Into<String>) -> Self {
        Self::SelectionFailed {
            message: message.into(),
        }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Returns whether retrying the load may succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ChannelsUnavailable { .. } | Self::Network { .. }
        )
    }
}
