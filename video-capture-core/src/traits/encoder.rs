use crate::encoder::settings::EncoderSettings;
use crate::models::error::EncoderError;
use crate::models::orientation::Orientation;
use crate::traits::input_surface::InputSurface;

/// A stateful hardware encoder writing one output container.
///
/// Created configured but unprepared by an [`EncoderFactory`]. A recording
/// session drives it: `set_orientation_hint` → `prepare` → `start` →
/// (`pause` ⇄ `resume`) → `stop` → `release`. The session owns it exclusively.
pub trait EncoderResource: Send {
    /// Must be called before `prepare`.
    fn set_orientation_hint(&mut self, orientation: Orientation);

    /// Allocate codec resources and open the output file.
    fn prepare(&mut self) -> Result<(), EncoderError>;

    /// Begin consuming frames from the input surface.
    fn start(&mut self) -> Result<(), EncoderError>;

    fn pause(&mut self) -> Result<(), EncoderError>;

    fn resume(&mut self) -> Result<(), EncoderError>;

    /// Finalize the output container.
    ///
    /// Fails with [`EncoderError::IllegalState`] when not started and with
    /// [`EncoderError::Runtime`] when stopped too soon after start.
    fn stop(&mut self) -> Result<(), EncoderError>;

    /// Free the hardware encoder. Consumes the handle; it cannot be reused.
    fn release(self: Box<Self>);
}

/// Builds encoders for a backend.
pub trait EncoderFactory: Send + Sync {
    /// Construct an encoder configured from `settings`, reading frames from `input`.
    fn create(
        &self,
        settings: &EncoderSettings,
        input: &dyn InputSurface,
    ) -> Result<Box<dyn EncoderResource>, EncoderError>;
}
