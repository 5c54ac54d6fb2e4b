use std::fmt;

use serde::{Deserialize, Serialize};

/// Recording session state machine.
///
/// State transitions:
/// ```text
/// not_started → recording ⇄ paused
///      ↓            ↓         ↓
///  cancelled    stopped / cancelled
/// ```
///
/// A live encoder exists only in `Recording` and `Paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    NotStarted,
    Recording,
    Paused,
    Stopped,
    Cancelled,
}

impl SessionState {
    pub fn is_not_started(&self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// `Stopped` and `Cancelled` admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped | Self::Cancelled)
    }

    /// Whether the session owns an encoder in this state.
    pub fn has_live_encoder(&self) -> bool {
        matches!(self, Self::Recording | Self::Paused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Recording => "recording",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_encoder_states() {
        assert!(SessionState::Recording.has_live_encoder());
        assert!(SessionState::Paused.has_live_encoder());
        assert!(!SessionState::NotStarted.has_live_encoder());
        assert!(!SessionState::Stopped.has_live_encoder());
        assert!(!SessionState::Cancelled.has_live_encoder());
    }

    #[test]
    fn terminal_states() {
        assert!(SessionState::Stopped.is_terminal());
        assert!(SessionState::Cancelled.is_terminal());
        assert!(!SessionState::Paused.is_terminal());
        assert_eq!(SessionState::default(), SessionState::NotStarted);
    }
}
