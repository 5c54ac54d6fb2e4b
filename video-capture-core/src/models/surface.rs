use std::fmt;

/// Opaque identifier of a frame surface owned by the host.
///
/// The core only forwards handles: into capture request targets and into the
/// encoder's video source. It never allocates or releases the surface itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceHandle {
    id: u64,
    label: String,
}

impl SurfaceHandle {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.id)
    }
}
