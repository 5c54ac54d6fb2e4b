use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::Mutex as AsyncMutex;
use tokio::time::Instant;

use crate::encoder::settings::EncoderSettings;
use crate::models::capabilities::PlatformCapabilities;
use crate::models::capture_request::CaptureRequest;
use crate::models::config::{RecordingConfiguration, SessionOptions};
use crate::models::error::{CaptureError, EncoderError};
use crate::models::orientation::Orientation;
use crate::models::state::SessionState;
use crate::models::surface::SurfaceHandle;
use crate::traits::capture_pipeline::CapturePipeline;
use crate::traits::encoder::{EncoderFactory, EncoderResource};
use crate::traits::input_surface::InputSurface;
use crate::traits::session_delegate::SessionDelegate;

/// Host-owned collaborators a session reads from but never owns.
#[derive(Clone)]
pub struct SessionCollaborators {
    pub factory: Arc<dyn EncoderFactory>,
    pub pipeline: Arc<dyn CapturePipeline>,
    pub input_surface: Arc<dyn InputSurface>,
    /// Surfaces besides the input surface that the capture request targets
    /// (preview, analysis).
    pub extra_targets: Vec<SurfaceHandle>,
}

/// State only touched while holding the session guard.
struct SessionInner {
    state: SessionState,
    encoder: Option<Box<dyn EncoderResource>>,
    started_at: Option<Instant>,
}

/// Lock-free view of the session for the read-only accessors.
#[derive(Clone, Copy)]
struct StatusSnapshot {
    state: SessionState,
    started_at: Option<Instant>,
}

struct Shared {
    guard: AsyncMutex<SessionInner>,
    status: RwLock<StatusSnapshot>,
    delegate: RwLock<Option<Arc<dyn SessionDelegate>>>,
    output_path: PathBuf,
}

impl Shared {
    fn transition(&self, inner: &mut SessionInner, state: SessionState) {
        inner.state = state;
        *self.status.write() = StatusSnapshot {
            state,
            started_at: inner.started_at,
        };
        log::debug!("Recording session → {}", state);

        if let Some(delegate) = self.delegate.read().as_ref() {
            delegate.on_state_changed(state);
        }
    }

    fn report_error(&self, error: &CaptureError) {
        if let Some(delegate) = self.delegate.read().as_ref() {
            delegate.on_error(error);
        }
    }

    /// Cancel teardown. Never fails; every fault is logged and dropped.
    async fn abandon(&self) {
        let mut inner = self.guard.lock().await;

        let Some(mut encoder) = inner.encoder.take() else {
            if inner.state.is_not_started() {
                self.transition(&mut inner, SessionState::Cancelled);
            } else {
                log::debug!("Cancel ignored, session already {}", inner.state);
            }
            return;
        };

        log::info!("Cancelling take {}", self.output_path.display());
        if let Err(e) = encoder.stop() {
            log::warn!("Best-effort encoder stop during cancel failed: {}", e);
        }
        encoder.release();

        log_output_removal(&self.output_path, tokio::fs::remove_file(&self.output_path).await);
        self.transition(&mut inner, SessionState::Cancelled);
    }
}

/// One recording take bound to a hardware encoder.
///
/// Every state-changing operation acquires the same session guard and holds
/// it for its whole duration, including the minimum-duration wait inside
/// [`stop_recording`](Self::stop_recording). Operations on one session
/// therefore run one at a time, in guard-acquisition order. The read-only
/// accessors never wait on the guard.
///
/// ```text
/// start ──▶ Recording ⇄ Paused ──▶ stop_recording ──▶ Stopped
///                  └──────────────▶ cancel ─────────▶ Cancelled
/// ```
pub struct RecordingSession {
    config: RecordingConfiguration,
    options: SessionOptions,
    capabilities: PlatformCapabilities,
    collaborators: SessionCollaborators,
    shared: Arc<Shared>,
}

impl RecordingSession {
    pub fn new(
        config: RecordingConfiguration,
        collaborators: SessionCollaborators,
        capabilities: PlatformCapabilities,
        options: SessionOptions,
    ) -> Result<Self, CaptureError> {
        config.validate().map_err(CaptureError::ConfigurationFailed)?;

        let shared = Arc::new(Shared {
            guard: AsyncMutex::new(SessionInner {
                state: SessionState::NotStarted,
                encoder: None,
                started_at: None,
            }),
            status: RwLock::new(StatusSnapshot {
                state: SessionState::NotStarted,
                started_at: None,
            }),
            delegate: RwLock::new(None),
            output_path: config.output_path().to_path_buf(),
        });

        Ok(Self {
            config,
            options,
            capabilities,
            collaborators,
            shared,
        })
    }

    pub fn set_delegate(&self, delegate: Arc<dyn SessionDelegate>) {
        *self.shared.delegate.write() = Some(delegate);
    }

    pub fn config(&self) -> &RecordingConfiguration {
        &self.config
    }

    pub fn output_path(&self) -> &Path {
        self.config.output_path()
    }

    pub fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    pub fn state(&self) -> SessionState {
        self.shared.status.read().state
    }

    /// True once the take is stopped or cancelled.
    pub fn is_stopped(&self) -> bool {
        self.state().is_terminal()
    }

    pub fn is_paused(&self) -> bool {
        self.state().is_paused()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.shared.status.read().started_at
    }

    /// Time since the encoder started, while the take is live.
    pub fn elapsed(&self) -> Option<Duration> {
        let status = *self.shared.status.read();
        if !status.state.has_live_encoder() {
            return None;
        }
        status.started_at.map(|t| t.elapsed())
    }

    /// Build the encoder, point the camera pipeline at it and start capturing.
    ///
    /// `orientation_hint` is in clockwise degrees and must be a right angle.
    /// Any failure once the encoder exists leaves the session `Cancelled`:
    /// the encoder is released, and if the request was already submitted it
    /// is withdrawn and partial output deleted.
    pub async fn start(&self, orientation_hint: Option<i32>) -> Result<(), CaptureError> {
        let mut inner = self.shared.guard.lock().await;

        if !inner.state.is_not_started() {
            return Err(CaptureError::InvalidState(format!(
                "start called on a session that is {}",
                inner.state
            )));
        }
        let orientation = orientation_hint.map(Orientation::from_degrees).transpose()?;

        let input = self.collaborators.input_surface.as_ref();
        let settings = EncoderSettings::from_configuration(&self.config, input.handle());
        log::info!(
            "Starting take {}x{} @ {:?} fps, audio: {}, output: {}",
            settings.width,
            settings.height,
            settings.frame_rate,
            settings.audio.is_some(),
            settings.output_path.display()
        );

        let mut encoder = match self.collaborators.factory.create(&settings, input) {
            Ok(encoder) => encoder,
            Err(e) => return Err(self.fail_start(&mut inner, None, false, e.into())),
        };

        let request = CaptureRequest::for_recording(
            input.handle(),
            &self.collaborators.extra_targets,
            self.config.frame_rate(),
        );
        if let Err(e) = self.collaborators.pipeline.submit_repeating(&request) {
            return Err(self.fail_start(&mut inner, Some(encoder), false, CaptureError::Pipeline(e)));
        }

        if let Some(orientation) = orientation {
            encoder.set_orientation_hint(orientation);
        }
        if let Err(e) = encoder.prepare().and_then(|()| encoder.start()) {
            return Err(self.fail_start(&mut inner, Some(encoder), true, e.into()));
        }

        inner.started_at = Some(Instant::now());
        inner.encoder = Some(encoder);
        self.shared.transition(&mut inner, SessionState::Recording);
        Ok(())
    }

    /// Pause the encoder.
    ///
    /// Returns `Ok(false)` when there is no live encoder or the encoder
    /// refuses; fails only when the platform cannot pause at all.
    pub async fn pause(&self) -> Result<bool, CaptureError> {
        self.require_pause_resume("pause")?;
        let mut inner = self.shared.guard.lock().await;

        let state = inner.state;
        let Some(encoder) = inner.encoder.as_mut() else {
            log::debug!("Pause ignored, session is {}", state);
            return Ok(false);
        };
        let paused = succeeded("pause", encoder.pause());
        if paused && !state.is_paused() {
            self.shared.transition(&mut inner, SessionState::Paused);
        }
        Ok(paused)
    }

    /// Resume a paused encoder. Same contract as [`pause`](Self::pause).
    pub async fn resume(&self) -> Result<bool, CaptureError> {
        self.require_pause_resume("resume")?;
        let mut inner = self.shared.guard.lock().await;

        let state = inner.state;
        let Some(encoder) = inner.encoder.as_mut() else {
            log::debug!("Resume ignored, session is {}", state);
            return Ok(false);
        };
        let resumed = succeeded("resume", encoder.resume());
        if resumed && !state.is_recording() {
            self.shared.transition(&mut inner, SessionState::Recording);
        }
        Ok(resumed)
    }

    /// Finalize the take and return its output path.
    ///
    /// Waits, without blocking the thread, until the minimum recording
    /// duration has passed since start. The encoder is released whether or
    /// not its stop succeeds. On error the output file is kept but may be
    /// corrupt.
    pub async fn stop_recording(&self) -> Result<PathBuf, CaptureError> {
        let mut inner = self.shared.guard.lock().await;

        if inner.encoder.is_none() {
            return Err(CaptureError::Recording(
                "missing encoder, already stopped".into(),
            ));
        }
        if let Some(started_at) = inner.started_at {
            self.wait_minimum_duration(started_at).await;
        }

        let Some(mut encoder) = inner.encoder.take() else {
            return Err(CaptureError::Recording(
                "missing encoder, already stopped".into(),
            ));
        };
        let stopped = encoder.stop();
        encoder.release();
        self.shared.transition(&mut inner, SessionState::Stopped);

        let elapsed = inner.started_at.map(|t| t.elapsed()).unwrap_or_default();
        match stopped {
            Ok(()) => {
                log::info!(
                    "Take finished after {:.2}s: {}",
                    elapsed.as_secs_f64(),
                    self.output_path().display()
                );
                if let Some(delegate) = self.shared.delegate.read().as_ref() {
                    delegate.on_recording_finished(self.output_path());
                }
                Ok(self.output_path().to_path_buf())
            }
            Err(e) => {
                let error = CaptureError::from_stop_failure(e);
                log::error!("Stopping take after {:.2}s failed: {}", elapsed.as_secs_f64(), error);
                self.shared.report_error(&error);
                Err(error)
            }
        }
    }

    /// Abandon the take: stop the encoder best-effort, release it and delete
    /// the output. Idempotent and infallible.
    ///
    /// The teardown runs on its own task, so dropping this future does not
    /// interrupt it.
    pub async fn cancel(&self) {
        let shared = Arc::clone(&self.shared);
        let teardown = tokio::spawn(async move { shared.abandon().await });
        if let Err(e) = teardown.await {
            log::error!("Cancel teardown task did not complete: {}", e);
        }
    }

    fn require_pause_resume(&self, operation: &str) -> Result<(), CaptureError> {
        if self.capabilities.supports_pause_resume() {
            Ok(())
        } else {
            Err(CaptureError::UnsupportedOperation(format!(
                "{} requires platform pause/resume support",
                operation
            )))
        }
    }

    async fn wait_minimum_duration(&self, started_at: Instant) {
        let deadline = started_at + self.options.min_recording_duration;
        let now = Instant::now();
        if now < deadline {
            log::info!(
                "Holding stop {:?} to reach the minimum recording duration",
                deadline - now
            );
            tokio::time::sleep_until(deadline).await;
        }
    }

    /// Unwind a failed start and leave the session `Cancelled`.
    fn fail_start(
        &self,
        inner: &mut SessionInner,
        encoder: Option<Box<dyn EncoderResource>>,
        request_submitted: bool,
        error: CaptureError,
    ) -> CaptureError {
        log::error!("Starting take failed: {}", error);

        let mut error = error;
        if request_submitted {
            if let Err(e) = self.collaborators.pipeline.stop_repeating() {
                error = CaptureError::Pipeline(format!(
                    "{}; withdrawing the capture request also failed ({}), the pipeline must be reset",
                    error, e
                ));
            }
        }
        if let Some(encoder) = encoder {
            encoder.release();
        }
        // Only prepare creates the output, and it runs after submission.
        if request_submitted {
            log_output_removal(self.output_path(), std::fs::remove_file(self.output_path()));
        }

        self.shared.transition(inner, SessionState::Cancelled);
        self.shared.report_error(&error);
        error
    }
}

impl Drop for RecordingSession {
    fn drop(&mut self) {
        let Ok(mut inner) = self.shared.guard.try_lock() else {
            return;
        };
        let Some(mut encoder) = inner.encoder.take() else {
            return;
        };

        log::warn!(
            "Recording session dropped while {}, abandoning {}",
            inner.state,
            self.shared.output_path.display()
        );
        if let Err(e) = encoder.stop() {
            log::debug!("Encoder stop on drop failed: {}", e);
        }
        encoder.release();
        log_output_removal(&self.shared.output_path, std::fs::remove_file(&self.shared.output_path));
        self.shared.transition(&mut inner, SessionState::Cancelled);
    }
}

/// Degrade a best-effort encoder call to a success flag.
fn succeeded(operation: &str, result: Result<(), EncoderError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Encoder {} failed: {}", operation, e);
            false
        }
    }
}

fn log_output_removal(path: &Path, result: io::Result<()>) {
    match result {
        Ok(()) => log::info!("Deleted partial output {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Failed to delete partial output {}: {}", path.display(), e),
    }
}
