use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Requested capture frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameRate {
    /// Let the hardware pick its default rate.
    #[default]
    HardwareDefault,
    Fixed { fps: u32 },
    Range { min: u32, max: u32 },
}

impl FrameRate {
    /// A fixed rate; zero means "hardware default".
    pub fn fixed(fps: u32) -> Self {
        if fps == 0 {
            Self::HardwareDefault
        } else {
            Self::Fixed { fps }
        }
    }

    pub fn range(min: u32, max: u32) -> Self {
        Self::Range { min, max }
    }

    /// Rate handed to the encoder. Ranges encode at their upper bound.
    pub fn encoder_fps(&self) -> Option<u32> {
        match *self {
            Self::HardwareDefault => None,
            Self::Fixed { fps } => Some(fps),
            Self::Range { max, .. } => Some(max),
        }
    }
}

/// Immutable description of one take: frame size, rate, audio and output file.
///
/// One configuration maps to exactly one output destination for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingConfiguration {
    width: u32,
    height: u32,
    #[serde(default)]
    frame_rate: FrameRate,
    #[serde(default = "default_audio_enabled")]
    audio_enabled: bool,
    output_path: PathBuf,
}

fn default_audio_enabled() -> bool {
    true
}

impl RecordingConfiguration {
    pub fn new(
        width: u32,
        height: u32,
        frame_rate: FrameRate,
        audio_enabled: bool,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            width,
            height,
            frame_rate,
            audio_enabled,
            output_path: output_path.into(),
        }
    }

    /// Same as [`new`](Self::new) but names the output file under `directory`.
    ///
    /// Generated names look like `VID_2026_10_16_09_30_12_345_1a2b3c4d.mp4`.
    pub fn with_generated_output(
        width: u32,
        height: u32,
        frame_rate: FrameRate,
        audio_enabled: bool,
        directory: &Path,
    ) -> Self {
        Self::new(
            width,
            height,
            frame_rate,
            audio_enabled,
            generate_output_path(directory, "mp4"),
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "frame size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if let FrameRate::Range { min, max } = self.frame_rate {
            if min == 0 || min > max {
                return Err(format!("invalid frame rate range: {}..={}", min, max));
            }
        }
        if self.output_path.file_name().is_none() {
            return Err(format!(
                "output path does not name a file: {}",
                self.output_path.display()
            ));
        }
        Ok(())
    }
}

/// Unique, timestamped file path under `directory`.
pub fn generate_output_path(directory: &Path, extension: &str) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y_%m_%d_%H_%M_%S_%3f");
    let unique = uuid::Uuid::new_v4().simple().to_string();
    directory.join(format!("VID_{}_{}.{}", stamp, &unique[..8], extension))
}

/// Tunables of the recording session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Stop requests are held back until this much time has passed since start.
    /// Hardware encoders fault when stopped sooner.
    pub min_recording_duration: Duration,
}

impl SessionOptions {
    pub const DEFAULT_MIN_RECORDING_DURATION: Duration = Duration::from_millis(1000);
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            min_recording_duration: Self::DEFAULT_MIN_RECORDING_DURATION,
        }
    }
}
