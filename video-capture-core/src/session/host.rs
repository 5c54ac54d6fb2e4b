use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::encoder::dummy::prepare_dummy_encoder;
use crate::models::capabilities::PlatformCapabilities;
use crate::models::config::{RecordingConfiguration, SessionOptions};
use crate::models::error::CaptureError;
use crate::session::recording::{RecordingSession, SessionCollaborators};
use crate::traits::session_delegate::SessionDelegate;

/// Owner of the camera-side resources and of at most one active take.
///
/// The active take lives in an explicit single-owner slot. A new take can
/// only begin once the slot is empty or holds a finished session. The host
/// releases the persistent input surface in [`shutdown`](Self::shutdown),
/// never while a take could still be using it.
pub struct SessionHost {
    collaborators: SessionCollaborators,
    capabilities: PlatformCapabilities,
    options: SessionOptions,
    delegate: Option<Arc<dyn SessionDelegate>>,
    active: Option<RecordingSession>,
    shut_down: bool,
}

impl SessionHost {
    pub fn new(
        collaborators: SessionCollaborators,
        capabilities: PlatformCapabilities,
        options: SessionOptions,
    ) -> Self {
        Self {
            collaborators,
            capabilities,
            options,
            delegate: None,
            active: None,
            shut_down: false,
        }
    }

    /// Delegate handed to every take started after this call.
    pub fn set_delegate(&mut self, delegate: Arc<dyn SessionDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    pub fn active_take(&self) -> Option<&RecordingSession> {
        self.active.as_ref()
    }

    /// Size the input surface for `config` by preparing and discarding an encoder.
    pub fn prepare_input_surface(
        &self,
        config: &RecordingConfiguration,
        scratch_dir: &Path,
    ) -> Result<(), CaptureError> {
        self.ensure_running()?;
        prepare_dummy_encoder(
            self.collaborators.factory.as_ref(),
            config,
            self.collaborators.input_surface.as_ref(),
            scratch_dir,
        )?;
        Ok(())
    }

    /// Start a new take. Fails with `InvalidState` while another take is live.
    pub async fn start_take(
        &mut self,
        config: RecordingConfiguration,
        orientation_hint: Option<i32>,
    ) -> Result<(), CaptureError> {
        self.ensure_running()?;
        if let Some(active) = &self.active {
            if !active.is_stopped() {
                return Err(CaptureError::InvalidState(format!(
                    "a take is already {} into {}",
                    active.state(),
                    active.output_path().display()
                )));
            }
        }

        let session = RecordingSession::new(
            config,
            self.collaborators.clone(),
            self.capabilities,
            self.options.clone(),
        )?;
        if let Some(delegate) = &self.delegate {
            session.set_delegate(Arc::clone(delegate));
        }

        session.start(orientation_hint).await?;
        self.active = Some(session);
        Ok(())
    }

    pub async fn pause_take(&self) -> Result<bool, CaptureError> {
        match &self.active {
            Some(session) => session.pause().await,
            None => self.no_take_to("pause"),
        }
    }

    pub async fn resume_take(&self) -> Result<bool, CaptureError> {
        match &self.active {
            Some(session) => session.resume().await,
            None => self.no_take_to("resume"),
        }
    }

    /// Finalize the active take and empty the slot.
    ///
    /// The session stays in the slot until its stop completes, so a dropped
    /// call leaves the take running rather than half torn down.
    pub async fn stop_take(&mut self) -> Result<PathBuf, CaptureError> {
        let Some(session) = self.active.as_ref() else {
            return Err(CaptureError::Recording("no active take to stop".into()));
        };
        let result = session.stop_recording().await;
        self.active = None;
        result
    }

    /// Abandon the active take, if any, and empty the slot.
    pub async fn cancel_take(&mut self) {
        if let Some(session) = self.active.as_ref() {
            session.cancel().await;
        }
        self.active = None;
    }

    /// Cancel any active take, withdraw the repeating request and release the
    /// input surface. Safe to call more than once.
    pub async fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.cancel_take().await;

        if let Err(e) = self.collaborators.pipeline.stop_repeating() {
            log::warn!("Failed to stop repeating capture request on shutdown: {}", e);
        }
        self.collaborators.input_surface.release();
        self.shut_down = true;
        log::info!("Session host shut down");
    }

    fn ensure_running(&self) -> Result<(), CaptureError> {
        if self.shut_down {
            return Err(CaptureError::InvalidState("session host is shut down".into()));
        }
        Ok(())
    }

    fn no_take_to(&self, operation: &str) -> Result<bool, CaptureError> {
        if !self.capabilities.supports_pause_resume() {
            return Err(CaptureError::UnsupportedOperation(format!(
                "{} requires platform pause/resume support",
                operation
            )));
        }
        Ok(false)
    }
}
