//! Status light shown while the device is awake.
//!
//! Red while a cycle runs, green once the screen shows fresh data, dark while
//! suspended. A cycle that fails leaves the light red until suspension.

/// What the device is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// A cycle is running.
    Fetching,
    /// The summary was redrawn with fresh records.
    Updated,
    /// Suspended until the next cycle.
    Off,
}

impl Status {
    /// Which channels of an RGB light are lit, as `(red, green, blue)`.
    pub const fn channels(self) -> (bool, bool, bool) {
        match self {
            Self::Fetching => (true, false, false),
            Self::Updated => (false, true, false),
            Self::Off => (false, false, false),
        }
    }
}

/// A light that can show a [`Status`].
pub trait StatusLight {
    fn show(
        &mut self,
        status: Status,
    );
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        assert_eq!(Status::Fetching.channels(), (true, false, false));
        assert_eq!(Status::Updated.channels(), (false, true, false));
        assert_eq!(Status::Off.channels(), (false, false, false));
    }

    #[test]
    fn test_never_mixes_colors() {
        for status in [Status::Fetching, Status::Updated, Status::Off] {
            let (r, g, b) = status.channels();
            assert!(u8::from(r) + u8::from(g) + u8::from(b) <= 1);
        }
    }
}
