//! # video-capture-core
//!
//! Platform-agnostic core for recording one camera "take" into a hardware
//! encoder.
//!
//! Owns the recording session state machine: serializes every state change
//! behind a session-scoped guard, holds stop back until the minimum recording
//! duration has elapsed, classifies encoder faults into [`CaptureError`], and
//! releases the encoder on every exit path. Platform backends (hardware
//! encoder, camera pipeline, input surface) implement the traits in
//! [`traits`] and are injected at construction.
//!
//! ## Architecture
//!
//! ```text
//! video-capture-core (this crate)
//! ├── models/    ← RecordingConfiguration, SessionOptions, PlatformCapabilities, CaptureError, SessionState
//! ├── traits/    ← EncoderResource, EncoderFactory, CapturePipeline, InputSurface, SessionDelegate
//! ├── encoder/   ← EncoderSettings (fixed output policy), dummy preparation
//! └── session/   ← RecordingSession (state machine), SessionHost (single active take)
//! ```

pub mod encoder;
pub mod models;
pub mod session;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root for convenience.
pub use encoder::dummy::prepare_dummy_encoder;
pub use encoder::settings::{AudioCodec, AudioSettings, AudioSource, EncoderSettings, OutputFormat, VideoCodec};
pub use models::capabilities::PlatformCapabilities;
pub use models::capture_request::{CaptureRequest, FpsRange};
pub use models::config::{FrameRate, RecordingConfiguration, SessionOptions};
pub use models::error::{CaptureError, EncoderError};
pub use models::orientation::Orientation;
pub use models::state::SessionState;
pub use models::surface::SurfaceHandle;
pub use session::host::SessionHost;
pub use session::recording::{RecordingSession, SessionCollaborators};
pub use traits::capture_pipeline::CapturePipeline;
pub use traits::encoder::{EncoderFactory, EncoderResource};
pub use traits::input_surface::InputSurface;
pub use traits::session_delegate::SessionDelegate;
