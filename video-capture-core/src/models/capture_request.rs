use std::ops::RangeInclusive;

use crate::models::config::FrameRate;
use crate::models::surface::SurfaceHandle;

/// Target frame-rate range requested from the camera pipeline.
pub type FpsRange = RangeInclusive<u32>;

/// Repeating capture directive submitted to the camera pipeline for a take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    /// Surfaces that receive frames: the host's extra surfaces, then the
    /// encoder's input surface.
    pub targets: Vec<SurfaceHandle>,
    /// `None` leaves the pipeline's default.
    pub fps_range: Option<FpsRange>,
}

impl CaptureRequest {
    pub fn for_recording(
        input: SurfaceHandle,
        extra_targets: &[SurfaceHandle],
        frame_rate: FrameRate,
    ) -> Self {
        let mut targets = extra_targets.to_vec();
        targets.push(input);

        let fps_range = match frame_rate {
            FrameRate::HardwareDefault => None,
            FrameRate::Fixed { fps } => Some(fps..=fps),
            FrameRate::Range { min, max } => Some(min..=max),
        };

        Self { targets, fps_range }
    }
}
