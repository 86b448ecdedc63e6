//! Identity graph: entity filtering, orbit layout and canvas rendering.

mod component;
mod error;
mod filter;
mod layout;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::IdentityGraphCanvas;
pub use error::{LayoutError, ParseSelectorError};
pub use filter::{FilterCriteria, Selector, filter};
pub use layout::{GraphLayoutEngine, LayoutParams, layout};
pub use scale::ZoomLevel;
pub use state::{CanvasState, GraphStats, ViewState};
pub use types::{
	EntityKind, FraudCluster, GraphNode, LayoutPoint, Point, RiskLevel, Scene, Segment,
};
