use serde::{Deserialize, Serialize};

/// Optional hardware features the platform exposes to a recording session.
///
/// Injected at session construction so the pause/resume gate can be decided
/// without probing the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    /// The encoder supports pausing and resuming a take.
    pub pause_resume: bool,
}

impl PlatformCapabilities {
    /// First platform API level whose encoder supports pause/resume.
    pub const PAUSE_RESUME_MIN_API_LEVEL: u32 = 24;

    pub const fn all() -> Self {
        Self { pause_resume: true }
    }

    pub const fn none() -> Self {
        Self { pause_resume: false }
    }

    /// Derive capabilities from the platform API level reported by the host.
    pub fn from_api_level(level: u32) -> Self {
        Self {
            pause_resume: level >= Self::PAUSE_RESUME_MIN_API_LEVEL,
        }
    }

    pub fn supports_pause_resume(&self) -> bool {
        self.pause_resume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_level_gate() {
        assert!(!PlatformCapabilities::from_api_level(23).supports_pause_resume());
        assert!(PlatformCapabilities::from_api_level(24).supports_pause_resume());
        assert!(PlatformCapabilities::from_api_level(34).supports_pause_resume());
        assert_eq!(PlatformCapabilities::default(), PlatformCapabilities::none());
    }
}
