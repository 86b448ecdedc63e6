use log::debug;

use super::error::{LayoutError, ParseSelectorError};
use super::filter::{FilterCriteria, filter};
use super::layout::GraphLayoutEngine;
use super::scale::ZoomLevel;
use super::types::{FraudCluster, GraphNode, Point, RiskLevel, Scene};

/// Node circle radius in scene units; also the hit-test radius.
pub const NODE_RADIUS: f64 = 24.0;
/// Radius of the center hub.
pub const HUB_RADIUS: f64 = 32.0;

/// Filter and zoom selections. Owned by the page, passed into the pure
/// filter and layout functions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
	/// Risk and entity-kind dropdowns.
	pub criteria: FilterCriteria,
	/// Zoom slider.
	pub zoom: ZoomLevel,
}

impl ViewState {
	/// Nodes passing the current criteria.
	pub fn visible(&self, nodes: &[GraphNode]) -> Vec<GraphNode> {
		filter(nodes, &self.criteria)
	}

	/// Filters `nodes` and lays out what remains at the current zoom.
	pub fn scene(
		&self,
		engine: &GraphLayoutEngine,
		nodes: &[GraphNode],
	) -> Result<Scene, LayoutError> {
		engine.layout_at(&self.visible(nodes), self.zoom)
	}

	/// Sets the risk selector from a dropdown value (`all`, `high`, ...).
	pub fn set_risk(&mut self, value: &str) -> Result<(), ParseSelectorError> {
		self.criteria.risk = value.parse()?;
		debug!("risk filter -> {}", self.criteria.risk.key());
		Ok(())
	}

	/// Sets the entity selector from a dropdown value (`all`, `user`, ...).
	pub fn set_kind(&mut self, value: &str) -> Result<(), ParseSelectorError> {
		self.criteria.kind = value.parse()?;
		debug!("entity filter -> {}", self.criteria.kind.key());
		Ok(())
	}

	/// Slider input arrives as text.
	pub fn set_zoom(&mut self, value: &str) -> Result<(), LayoutError> {
		let raw = value
			.trim()
			.parse::<f64>()
			.map_err(|_| LayoutError::UnparsableZoom {
				input: value.to_string(),
			})?;
		self.zoom = ZoomLevel::clamped(raw)?;
		Ok(())
	}
}

/// Figures shown in the statistics card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
	/// Every seeded node.
	pub total_nodes: usize,
	/// Nodes left after filtering.
	pub visible_nodes: usize,
	/// Detected fraud clusters.
	pub active_clusters: usize,
	/// Nodes classified [`RiskLevel::High`].
	pub high_risk_entities: usize,
	/// Devices seen on more than one account, as reported by the feed.
	pub shared_devices: usize,
}

impl GraphStats {
	/// Counts over the full and filtered node sets. `shared_devices` is not
	/// derivable from the nodes and is passed through.
	pub fn collect(
		nodes: &[GraphNode],
		visible: &[GraphNode],
		clusters: &[FraudCluster],
		shared_devices: usize,
	) -> Self {
		Self {
			total_nodes: nodes.len(),
			visible_nodes: visible.len(),
			active_clusters: clusters.len(),
			high_risk_entities: nodes.iter().filter(|n| n.risk == RiskLevel::High).count(),
			shared_devices,
		}
	}
}

/// Canvas geometry, hover tracking and hit testing.
#[derive(Clone, Debug, Default)]
pub struct CanvasState {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Id of the hovered node. Keyed by id so a filter change never moves
	/// the highlight onto another node.
	pub hover: Option<String>,
}

impl CanvasState {
	/// A canvas of the given size with nothing hovered.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			hover: None,
		}
	}

	/// Screen position of the scene origin.
	pub fn center(&self) -> Point {
		Point {
			x: self.width / 2.0,
			y: self.height / 2.0,
		}
	}

	/// Undoes the center translation and scene scale.
	pub fn screen_to_scene(&self, scene: &Scene, sx: f64, sy: f64) -> Point {
		let center = self.center();
		Point {
			x: (sx - center.x) / scene.scale,
			y: (sy - center.y) / scene.scale,
		}
	}

	/// Index of the topmost node under the cursor.
	pub fn node_at_position(&self, scene: &Scene, sx: f64, sy: f64) -> Option<usize> {
		let cursor = self.screen_to_scene(scene, sx, sy);
		scene
			.points
			.iter()
			.rev()
			.find(|p| p.position.distance(cursor) < NODE_RADIUS)
			.map(|p| p.index)
	}

	/// Position of the hovered node within `nodes`, if it is still there.
	pub fn hovered_index(&self, nodes: &[GraphNode]) -> Option<usize> {
		let id = self.hover.as_deref()?;
		nodes.iter().position(|n| n.id == id)
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<String>) -> bool {
		if self.hover == node {
			return false;
		}
		self.hover = node;
		true
	}

	/// Records a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::identity_graph::filter::Selector;
	use crate::components::identity_graph::types::EntityKind;
	use crate::seed;

	#[test]
	fn setters_parse_dropdown_values() {
		let mut state = ViewState::default();
		state.set_risk("high").unwrap();
		state.set_kind("device").unwrap();
		state.set_zoom("80").unwrap();

		assert_eq!(state.criteria.risk, Selector::Only(RiskLevel::High));
		assert_eq!(state.criteria.kind, Selector::Only(EntityKind::Device));
		assert_eq!(state.zoom.value(), 80);

		let ids: Vec<_> = state
			.visible(&seed::graph_nodes())
			.into_iter()
			.map(|n| n.id)
			.collect();
		assert_eq!(ids, ["DEV-002"]);
	}

	#[test]
	fn bad_input_leaves_state_untouched() {
		let mut state = ViewState::default();
		assert!(state.set_risk("extreme").is_err());
		assert!(state.set_kind("bank").is_err());
		assert!(state.set_zoom("-3").is_err());
		assert_eq!(
			state.set_zoom("wide"),
			Err(LayoutError::UnparsableZoom {
				input: "wide".into()
			})
		);
		assert_eq!(state, ViewState::default());
	}

	#[test]
	fn scene_follows_filter_and_zoom() {
		let engine = GraphLayoutEngine::default();
		let nodes = seed::graph_nodes();
		let mut state = ViewState::default();

		let full = state.scene(&engine, &nodes).unwrap();
		assert_eq!(full.points.len(), nodes.len());

		state.set_kind("merchant").unwrap();
		state.set_zoom("0").unwrap();
		let merchants = state.scene(&engine, &nodes).unwrap();
		assert_eq!(merchants.points.len(), 2);
		assert_eq!(merchants.scale, 0.5);
		assert_eq!(merchants.points[1].angle, 180.0);
	}

	#[test]
	fn stats_count_seed_data() {
		let nodes = seed::graph_nodes();
		let clusters = seed::fraud_clusters();
		let mut state = ViewState::default();
		state.set_kind("user").unwrap();
		let visible = state.visible(&nodes);

		let stats = GraphStats::collect(&nodes, &visible, &clusters, seed::SHARED_DEVICES);
		assert_eq!(
			stats,
			GraphStats {
				total_nodes: 10,
				visible_nodes: 3,
				active_clusters: 3,
				high_risk_entities: 5,
				shared_devices: 4,
			}
		);
	}

	#[test]
	fn hit_test_undoes_center_and_scale() {
		let nodes = seed::graph_nodes();
		let scene = GraphLayoutEngine::default()
			.layout_at(&nodes[..4], ZoomLevel::MIN)
			.unwrap();
		let mut canvas = CanvasState::new(800.0, 600.0);

		// node 0 at (150, 0) in scene space, scaled by 0.5
		assert_eq!(canvas.node_at_position(&scene, 400.0 + 75.0, 300.0), Some(0));
		assert_eq!(canvas.node_at_position(&scene, 400.0, 300.0), None);
		// node 1 at (0, 210)
		assert_eq!(canvas.node_at_position(&scene, 402.0, 300.0 + 105.0), Some(1));

		assert!(canvas.set_hover(Some("USR-4521".into())));
		assert!(!canvas.set_hover(Some("USR-4521".into())));
		canvas.resize(400.0, 400.0);
		assert_eq!(canvas.center(), Point { x: 200.0, y: 200.0 });
	}

	#[test]
	fn hover_follows_node_across_filter_changes() {
		let nodes = seed::graph_nodes();
		let mut state = ViewState::default();
		let mut canvas = CanvasState::new(800.0, 600.0);

		// DEV-002 is the fifth node unfiltered
		canvas.set_hover(Some("DEV-002".into()));
		assert_eq!(canvas.hovered_index(&state.visible(&nodes)), Some(4));

		state.set_risk("high").unwrap();
		let high = state.visible(&nodes);
		assert_eq!(canvas.hovered_index(&high), Some(2));
		assert_eq!(high[2].id, "DEV-002");

		state.set_risk("low").unwrap();
		assert_eq!(canvas.hovered_index(&state.visible(&nodes)), None);
	}
}
