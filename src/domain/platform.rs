//! Platform hint passed to the transport for capability negotiation.

/// Host platform the client shell runs on.
///
/// The transport includes this in its connect handshake so the server can
/// negotiate platform-specific capabilities (push wake-ups, payload limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Apple mobile platforms.
    Ios,
    /// Android platforms.
    Android,
    /// Desktop and everything else.
    #[default]
    Desktop,
}

impl Platform {
    /// Detects the platform from the build target.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Desktop
        }
    }

    /// Returns the wire name the server expects in the handshake.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
