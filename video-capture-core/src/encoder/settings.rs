use std::path::{Path, PathBuf};

use crate::models::config::{generate_output_path, RecordingConfiguration};
use crate::models::surface::SurfaceHandle;

/// Output container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Mpeg4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoCodec {
    H264,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioSource {
    Microphone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCodec {
    Aac,
}

/// Audio block, present only when the configuration enables audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioSettings {
    pub source: AudioSource,
    pub codec: AudioCodec,
    pub sample_rate: u32,
}

/// Everything a backend needs to construct an encoder for one take.
///
/// Container, codecs and bit-rate are fixed policy; only size, frame rate,
/// audio and output come from the [`RecordingConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSettings {
    pub video_source: SurfaceHandle,
    pub output_format: OutputFormat,
    pub video_codec: VideoCodec,
    pub video_bit_rate: u32,
    pub width: u32,
    pub height: u32,
    /// `None` lets the hardware pick.
    pub frame_rate: Option<u32>,
    pub audio: Option<AudioSettings>,
    pub output_path: PathBuf,
}

impl EncoderSettings {
    pub const VIDEO_BIT_RATE: u32 = 10_000_000;
    pub const AUDIO_SAMPLE_RATE: u32 = 48_000;

    pub fn from_configuration(config: &RecordingConfiguration, video_source: SurfaceHandle) -> Self {
        let audio = config.audio_enabled().then_some(AudioSettings {
            source: AudioSource::Microphone,
            codec: AudioCodec::Aac,
            sample_rate: Self::AUDIO_SAMPLE_RATE,
        });

        Self {
            video_source,
            output_format: OutputFormat::Mpeg4,
            video_codec: VideoCodec::H264,
            video_bit_rate: Self::VIDEO_BIT_RATE,
            width: config.width(),
            height: config.height(),
            frame_rate: config.frame_rate().encoder_fps(),
            audio,
            output_path: config.output_path().to_path_buf(),
        }
    }

    /// Copy of these settings writing to a scratch file under `scratch_dir`.
    pub fn dummy(&self, scratch_dir: &Path) -> Self {
        Self {
            output_path: generate_output_path(scratch_dir, "dummy.mp4"),
            ..self.clone()
        }
    }
}
