use thiserror::Error;

/// Invalid input to, or output from, the orbit layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
	/// Zoom outside `0..=100`, or not a finite number.
	#[error("invalid zoom level: {value} (expected a finite value in 0..=100)")]
	InvalidZoom {
		/// The rejected value.
		value: f64,
	},

	/// Slider text that is not a number at all.
	#[error("zoom input {input:?} is not a number")]
	UnparsableZoom {
		/// The text as entered.
		input: String,
	},

	/// The layout parameters produced a non-finite scene scale.
	#[error("layout parameters produced a non-finite scale: {scale}")]
	NonFiniteScale {
		/// The computed scale.
		scale: f64,
	},

	/// The layout parameters produced a non-finite node position.
	#[error("layout produced a non-finite coordinate for node {index}")]
	NonFiniteCoordinate {
		/// Position of the node in the filtered input.
		index: usize,
	},
}

/// Raised when a dropdown value does not name a known selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSelectorError {
	/// Not `all` and not a risk level key.
	#[error("unknown risk level: {0:?}")]
	UnknownRiskLevel(String),

	/// Not `all` and not an entity kind key.
	#[error("unknown entity kind: {0:?}")]
	UnknownEntityKind(String),
}
