use crate::models::error::CaptureError;

/// Rotation hint written into the output container, in clockwise degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// Normalize an angle in degrees. Only right angles are accepted.
    pub fn from_degrees(degrees: i32) -> Result<Self, CaptureError> {
        match degrees.rem_euclid(360) {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(CaptureError::ConfigurationFailed(format!(
                "orientation hint must be a multiple of 90 degrees, got {}",
                degrees
            ))),
        }
    }

    pub fn degrees(&self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_modulo_full_turn() {
        assert_eq!(Orientation::from_degrees(90).unwrap(), Orientation::Deg90);
        assert_eq!(Orientation::from_degrees(450).unwrap(), Orientation::Deg90);
        assert_eq!(Orientation::from_degrees(-90).unwrap(), Orientation::Deg270);
        assert_eq!(Orientation::from_degrees(360).unwrap().degrees(), 0);
    }

    #[test]
    fn rejects_oblique_angles() {
        assert!(matches!(
            Orientation::from_degrees(45),
            Err(CaptureError::ConfigurationFailed(_))
        ));
    }
}
