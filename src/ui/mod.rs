//! Watchface composition.

mod classic;

pub use classic::ClassicFace;

/// Which optional readouts a face shows.
///
/// Time and weather are always present; date and battery mark the richer
/// variants of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceConfig {
    pub show_date: bool,
    pub show_battery: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            show_date: true,
            show_battery: true,
        }
    }
}
