//! Zoom slider value and the scene scale it drives.

use log::warn;

use super::error::LayoutError;

/// Slider minimum.
pub const MIN_ZOOM: u8 = 0;
/// Slider maximum.
pub const MAX_ZOOM: u8 = 100;
/// Slider position on page load.
pub const DEFAULT_ZOOM: u8 = 50;

/// Slider position in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomLevel(u8);

impl Default for ZoomLevel {
	fn default() -> Self {
		Self(DEFAULT_ZOOM)
	}
}

impl ZoomLevel {
	/// Fully zoomed out, scale 0.5.
	pub const MIN: Self = Self(MIN_ZOOM);
	/// Fully zoomed in, scale 1.5.
	pub const MAX: Self = Self(MAX_ZOOM);

	/// Accepts only finite values inside `0..=100`. Fractions round to the
	/// nearest step.
	pub fn new(value: f64) -> Result<Self, LayoutError> {
		if !value.is_finite() || value < MIN_ZOOM as f64 || value > MAX_ZOOM as f64 {
			return Err(LayoutError::InvalidZoom { value });
		}
		Ok(Self(value.round() as u8))
	}

	/// Like [`ZoomLevel::new`], but values above the range are pulled down to
	/// the maximum instead of rejected. Negative and non-finite input is still
	/// an error.
	pub fn clamped(value: f64) -> Result<Self, LayoutError> {
		if !value.is_finite() || value < MIN_ZOOM as f64 {
			return Err(LayoutError::InvalidZoom { value });
		}
		if value > MAX_ZOOM as f64 {
			warn!("zoom {} above {}, clamping", value, MAX_ZOOM);
			return Ok(Self::MAX);
		}
		Self::new(value)
	}

	/// Slider position.
	pub fn value(self) -> u8 {
		self.0
	}

	/// Scene scale factor, `0.5 + zoom / 100`.
	pub fn scale(self) -> f64 {
		scale_for(self, 0.5, MAX_ZOOM as f64)
	}

	/// Moves the slider by `delta` steps, saturating at both ends.
	pub fn step(self, delta: i32) -> Self {
		let next = (self.0 as i32 + delta).clamp(MIN_ZOOM as i32, MAX_ZOOM as i32);
		Self(next as u8)
	}
}

impl TryFrom<f64> for ZoomLevel {
	type Error = LayoutError;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

pub(crate) fn scale_for(zoom: ZoomLevel, base: f64, divisor: f64) -> f64 {
	base + zoom.0 as f64 / divisor
}
