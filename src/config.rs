//! Track computation settings.

use thiserror::Error;

use crate::composition::{CompositionCounter, DEFAULT_WINDOW};
use crate::mask::{MarkerRunScanner, DEFAULT_MARKER};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Window width must be at least 1")]
    ZeroWindow,

    #[error("Window width {0} is too large (maximum {max})", max = u32::MAX)]
    WindowTooLarge(usize),

    #[error("Marker must be a printable ASCII character, got {0:?}")]
    InvalidMarker(char),
}

/// Window width and mask marker; defaults to 100 bp bins and `P`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackConfig {
    pub window: usize,
    pub marker: u8,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            marker: DEFAULT_MARKER,
        }
    }
}

impl TrackConfig {
    /// Set the marker from a `char`, rejecting anything outside ASCII
    pub fn with_marker_char(mut self, marker: char) -> Result<Self, ConfigError> {
        if !marker.is_ascii() {
            return Err(ConfigError::InvalidMarker(marker));
        }
        #[allow(clippy::cast_possible_truncation)] // ASCII checked above
        {
            self.marker = marker as u8;
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.counter()?;
        self.scanner()?;
        Ok(())
    }

    pub fn counter(&self) -> Result<CompositionCounter, ConfigError> {
        CompositionCounter::new(self.window)
    }

    pub fn scanner(&self) -> Result<MarkerRunScanner, ConfigError> {
        MarkerRunScanner::new(self.marker)
    }
}
