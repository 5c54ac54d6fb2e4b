use crate::models::surface::SurfaceHandle;

/// Persistent frame surface shared by the camera pipeline and the encoder.
///
/// Owned by the host and reused across takes. Recording sessions only read
/// its handle; the host calls `release` once no take is active.
pub trait InputSurface: Send + Sync {
    fn handle(&self) -> SurfaceHandle;

    /// Free the surface. Called at most once, by the host.
    fn release(&self);
}
