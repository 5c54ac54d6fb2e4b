use std::path::Path;

use crate::models::error::CaptureError;
use crate::models::state::SessionState;

/// Event delegate for recording session notifications.
///
/// All methods are called from whichever task drives the session, while the
/// session guard is held. Implementations must not call back into the session.
pub trait SessionDelegate: Send + Sync {
    /// Called after every state transition.
    fn on_state_changed(&self, state: SessionState);

    /// Called when the encoder or pipeline fails during `start` or `stop_recording`.
    fn on_error(&self, _error: &CaptureError) {}

    /// Called when a take is finalized. Hosts index the file from here.
    fn on_recording_finished(&self, _output: &Path) {}
}
