use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::encoder::settings::EncoderSettings;
use crate::models::config::RecordingConfiguration;
use crate::models::error::EncoderError;
use crate::traits::encoder::EncoderFactory;
use crate::traits::input_surface::InputSurface;

/// Build, prepare and immediately release an encoder for `config`.
///
/// Preparing binds the input surface to the encoder's expected frame size,
/// which lets a host size the surface before any take exists. The encoder
/// writes to a scratch file under `scratch_dir` that is deleted afterwards;
/// the configured output is never touched.
pub fn prepare_dummy_encoder(
    factory: &dyn EncoderFactory,
    config: &RecordingConfiguration,
    input: &dyn InputSurface,
    scratch_dir: &Path,
) -> Result<(), EncoderError> {
    let settings = EncoderSettings::from_configuration(config, input.handle()).dummy(scratch_dir);
    log::debug!(
        "Preparing dummy encoder {}x{} at {}",
        settings.width,
        settings.height,
        settings.output_path.display()
    );

    let mut encoder = factory.create(&settings, input)?;
    let prepared = encoder.prepare();
    encoder.release();

    match fs::remove_file(&settings.output_path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => log::warn!(
            "Failed to remove dummy encoder output {}: {}",
            settings.output_path.display(),
            e
        ),
    }

    prepared
}
