//! Encoder construction policy.
//!
//! Turns a [`RecordingConfiguration`](crate::RecordingConfiguration) into the
//! fixed [`EncoderSettings`](settings::EncoderSettings) every backend encoder is
//! built from, and provides the prepare-then-discard "dummy" path hosts use to
//! size their input surface.

pub mod dummy;
pub mod settings;
