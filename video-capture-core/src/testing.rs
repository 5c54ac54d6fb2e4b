//! Scripted collaborators for unit tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::encoder::settings::EncoderSettings;
use crate::models::capture_request::CaptureRequest;
use crate::models::error::{CaptureError, EncoderError};
use crate::models::orientation::Orientation;
use crate::models::state::SessionState;
use crate::models::surface::SurfaceHandle;
use crate::traits::capture_pipeline::CapturePipeline;
use crate::traits::encoder::{EncoderFactory, EncoderResource};
use crate::traits::input_surface::InputSurface;
use crate::traits::session_delegate::SessionDelegate;

/// Failures each encoder primitive should raise.
#[derive(Debug, Clone)]
pub struct EncoderScript {
    pub create: Option<EncoderError>,
    pub prepare: Option<EncoderError>,
    pub start: Option<EncoderError>,
    pub pause: Option<EncoderError>,
    pub resume: Option<EncoderError>,
    pub stop: Option<EncoderError>,
    /// Whether `prepare` creates the output file.
    pub write_output: bool,
}

impl Default for EncoderScript {
    fn default() -> Self {
        Self {
            create: None,
            prepare: None,
            start: None,
            pause: None,
            resume: None,
            stop: None,
            write_output: true,
        }
    }
}

#[derive(Default)]
struct LogInner {
    calls: Vec<&'static str>,
    created: Vec<EncoderSettings>,
    orientation: Option<Orientation>,
    stop_times: Vec<tokio::time::Instant>,
}

/// Shared record of what the fake encoders were asked to do.
#[derive(Clone, Default)]
pub struct EncoderLog {
    inner: Arc<Mutex<LogInner>>,
    live: Arc<AtomicUsize>,
}

impl EncoderLog {
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.lock().calls.clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.inner.lock().calls.iter().filter(|c| **c == call).count()
    }

    pub fn created_settings(&self) -> Vec<EncoderSettings> {
        self.inner.lock().created.clone()
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.inner.lock().orientation
    }

    pub fn stop_times(&self) -> Vec<tokio::time::Instant> {
        self.inner.lock().stop_times.clone()
    }

    /// Encoders created and not yet released.
    pub fn live_encoders(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    fn record(&self, call: &'static str) {
        self.inner.lock().calls.push(call);
    }
}

pub struct FakeEncoder {
    script: EncoderScript,
    output_path: PathBuf,
    log: EncoderLog,
}

fn scripted(error: &Option<EncoderError>) -> Result<(), EncoderError> {
    match error {
        Some(e) => Err(e.clone()),
        None => Ok(()),
    }
}

impl EncoderResource for FakeEncoder {
    fn set_orientation_hint(&mut self, orientation: Orientation) {
        self.log.record("orientation");
        self.log.inner.lock().orientation = Some(orientation);
    }

    fn prepare(&mut self) -> Result<(), EncoderError> {
        self.log.record("prepare");
        scripted(&self.script.prepare)?;
        if self.script.write_output {
            fs::write(&self.output_path, b"ftypisom").map_err(|e| EncoderError::Io(e.to_string()))?;
        }
        Ok(())
    }

    fn start(&mut self) -> Result<(), EncoderError> {
        self.log.record("start");
        scripted(&self.script.start)
    }

    fn pause(&mut self) -> Result<(), EncoderError> {
        self.log.record("pause");
        scripted(&self.script.pause)
    }

    fn resume(&mut self) -> Result<(), EncoderError> {
        self.log.record("resume");
        scripted(&self.script.resume)
    }

    fn stop(&mut self) -> Result<(), EncoderError> {
        self.log.record("stop");
        self.log.inner.lock().stop_times.push(tokio::time::Instant::now());
        scripted(&self.script.stop)
    }

    fn release(self: Box<Self>) {
        self.log.record("release");
        self.log.live.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct FakeEncoderFactory {
    script: EncoderScript,
    log: EncoderLog,
}

impl FakeEncoderFactory {
    pub fn new(script: EncoderScript) -> Self {
        Self {
            script,
            log: EncoderLog::default(),
        }
    }

    pub fn log(&self) -> EncoderLog {
        self.log.clone()
    }
}

impl EncoderFactory for FakeEncoderFactory {
    fn create(
        &self,
        settings: &EncoderSettings,
        _input: &dyn InputSurface,
    ) -> Result<Box<dyn EncoderResource>, EncoderError> {
        self.log.record("create");
        self.log.inner.lock().created.push(settings.clone());
        scripted(&self.script.create)?;
        self.log.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeEncoder {
            script: self.script.clone(),
            output_path: settings.output_path.clone(),
            log: self.log.clone(),
        }))
    }
}

#[derive(Default)]
pub struct FakePipeline {
    submit_error: Option<String>,
    stop_error: Option<String>,
    submitted: Mutex<Vec<CaptureRequest>>,
    stops: AtomicUsize,
}

impl FakePipeline {
    pub fn failing_submit(error: &str) -> Self {
        Self {
            submit_error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_stop(error: &str) -> Self {
        Self {
            stop_error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn submitted(&self) -> Vec<CaptureRequest> {
        self.submitted.lock().clone()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl CapturePipeline for FakePipeline {
    fn submit_repeating(&self, request: &CaptureRequest) -> Result<(), String> {
        if let Some(e) = &self.submit_error {
            return Err(e.clone());
        }
        self.submitted.lock().push(request.clone());
        Ok(())
    }

    fn stop_repeating(&self) -> Result<(), String> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        match &self.stop_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

pub struct FakeInputSurface {
    id: u64,
    releases: AtomicUsize,
}

impl FakeInputSurface {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            releases: AtomicUsize::new(0),
        }
    }

    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl InputSurface for FakeInputSurface {
    fn handle(&self) -> SurfaceHandle {
        SurfaceHandle::new(self.id, "encoder-input")
    }

    fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingDelegate {
    states: Mutex<Vec<SessionState>>,
    errors: Mutex<Vec<CaptureError>>,
    finished: Mutex<Vec<PathBuf>>,
}

impl RecordingDelegate {
    pub fn states(&self) -> Vec<SessionState> {
        self.states.lock().clone()
    }

    pub fn errors(&self) -> Vec<CaptureError> {
        self.errors.lock().clone()
    }

    pub fn finished(&self) -> Vec<PathBuf> {
        self.finished.lock().clone()
    }
}

impl SessionDelegate for RecordingDelegate {
    fn on_state_changed(&self, state: SessionState) {
        self.states.lock().push(state);
    }

    fn on_error(&self, error: &CaptureError) {
        self.errors.lock().push(error.clone());
    }

    fn on_recording_finished(&self, output: &Path) {
        self.finished.lock().push(output.to_path_buf());
    }
}

/// Unique output path under the system temp directory.
pub fn temp_output_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "video_capture_test_{}_{}.mp4",
        name,
        uuid::Uuid::new_v4().simple()
    ))
}
