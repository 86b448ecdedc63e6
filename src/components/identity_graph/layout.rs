//! Two-ring orbit layout around a fixed center.
//!
//! Node `i` of `n` sits at `i * 360 / n` degrees, alternating between the
//! inner and outer ring by index parity. Offsets are unscaled; the zoom scale
//! is carried on the [`Scene`] and applied once to the whole drawing.

use log::debug;

use super::error::LayoutError;
use super::scale::{ZoomLevel, scale_for};
use super::types::{GraphNode, LayoutPoint, Point, Scene, Segment};

/// Ring geometry and zoom-to-scale mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
	/// Radius of the innermost ring.
	pub inner_radius: f64,
	/// Distance between consecutive rings.
	pub ring_step: f64,
	/// Number of rings nodes alternate between.
	pub rings: usize,
	/// Scale at zoom 0.
	pub base_scale: f64,
	/// Zoom units per unit of added scale.
	pub zoom_divisor: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			inner_radius: 150.0,
			ring_step: 60.0,
			rings: 2,
			base_scale: 0.5,
			zoom_divisor: 100.0,
		}
	}
}

/// Places filtered nodes on concentric rings around the scene origin.
#[derive(Clone, Debug, Default)]
pub struct GraphLayoutEngine {
	params: LayoutParams,
}

impl GraphLayoutEngine {
	/// An engine with custom ring geometry.
	pub fn new(params: LayoutParams) -> Self {
		Self { params }
	}

	/// Current parameters.
	pub fn params(&self) -> &LayoutParams {
		&self.params
	}

	/// Radii of every ring, innermost first.
	pub fn ring_radii(&self) -> impl Iterator<Item = f64> + '_ {
		(0..self.params.rings.max(1)).map(|ring| self.radius_for(ring))
	}

	fn radius_for(&self, index: usize) -> f64 {
		let ring = index % self.params.rings.max(1);
		self.params.inner_radius + ring as f64 * self.params.ring_step
	}

	/// Lays out `nodes` for a raw slider value. Values above 100 are clamped,
	/// negative or non-finite ones are rejected.
	pub fn layout(&self, nodes: &[GraphNode], zoom: f64) -> Result<Scene, LayoutError> {
		self.layout_at(nodes, ZoomLevel::clamped(zoom)?)
	}

	/// Lays out `nodes` for an already validated zoom level.
	pub fn layout_at(&self, nodes: &[GraphNode], zoom: ZoomLevel) -> Result<Scene, LayoutError> {
		let scale = scale_for(zoom, self.params.base_scale, self.params.zoom_divisor);
		if !scale.is_finite() {
			return Err(LayoutError::NonFiniteScale { scale });
		}
		let n = nodes.len();
		if n == 0 {
			return Ok(Scene {
				scale,
				points: Vec::new(),
			});
		}

		let points = (0..n)
			.map(|index| {
				let angle = index as f64 * 360.0 / n as f64;
				let radius = self.radius_for(index);
				let theta = angle.to_radians();
				let position = Point {
					x: theta.cos() * radius,
					y: theta.sin() * radius,
				};
				if !position.x.is_finite() || !position.y.is_finite() {
					return Err(LayoutError::NonFiniteCoordinate { index });
				}
				Ok(LayoutPoint {
					index,
					angle,
					radius,
					position,
					spoke: Segment {
						start: Point::ORIGIN,
						end: position,
					},
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		debug!("laid out {} nodes at scale {}", n, scale);
		Ok(Scene { scale, points })
	}
}

/// [`GraphLayoutEngine::layout`] with the default parameters.
pub fn layout(nodes: &[GraphNode], zoom: f64) -> Result<Scene, LayoutError> {
	GraphLayoutEngine::default().layout(nodes, zoom)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::seed;

	const EPS: f64 = 1e-6;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < EPS
	}

	#[test]
	fn three_nodes_at_mid_zoom() {
		let nodes = &seed::graph_nodes()[..3];
		let scene = layout(nodes, 50.0).unwrap();

		assert_eq!(scene.scale, 1.0);
		assert_eq!(scene.points.len(), 3);

		let expected = [(0.0, 150.0), (120.0, 210.0), (240.0, 150.0)];
		for (point, (angle, radius)) in scene.points.iter().zip(expected) {
			assert!(close(point.angle, angle));
			assert_eq!(point.radius, radius);
			let theta = angle * std::f64::consts::PI / 180.0;
			assert!(close(point.position.x, theta.cos() * radius));
			assert!(close(point.position.y, theta.sin() * radius));
		}
		assert!(close(scene.points[1].position.x, -105.0));
		assert!(close(scene.points[1].position.y, 181.865_334_794_732));
	}

	#[test]
	fn single_node_sits_right_of_center() {
		let nodes = &seed::graph_nodes()[..1];
		let scene = layout(nodes, 0.0).unwrap();
		let point = scene.points[0];
		assert_eq!(point.position, Point { x: 150.0, y: 0.0 });
		assert_eq!(scene.scale, 0.5);
	}

	#[test]
	fn empty_input_yields_empty_scene() {
		let scene = layout(&[], 100.0).unwrap();
		assert!(scene.is_empty());
		assert_eq!(scene.scale, 1.5);
	}

	#[test]
	fn one_finite_point_per_node() {
		let nodes = seed::graph_nodes();
		for n in 1..=nodes.len() {
			let scene = layout(&nodes[..n], 25.0).unwrap();
			assert_eq!(scene.points.len(), n);
			for (i, point) in scene.points.iter().enumerate() {
				assert_eq!(point.index, i);
				assert!(point.position.x.is_finite() && point.position.y.is_finite());
				assert_eq!(point.spoke.start, Point::ORIGIN);
				assert_eq!(point.spoke.end, point.position);
			}
		}
	}

	#[test]
	fn repeated_layout_is_identical() {
		let nodes = seed::graph_nodes();
		let a = layout(&nodes, 73.0).unwrap();
		let b = layout(&nodes, 73.0).unwrap();
		assert_eq!(a, b);
		for (p, q) in a.points.iter().zip(&b.points) {
			assert_eq!(p.position.x.to_bits(), q.position.x.to_bits());
			assert_eq!(p.position.y.to_bits(), q.position.y.to_bits());
		}
	}

	#[test]
	fn invalid_zoom_is_reported() {
		let nodes = seed::graph_nodes();
		assert_eq!(
			layout(&nodes, -1.0),
			Err(LayoutError::InvalidZoom { value: -1.0 })
		);
		assert!(matches!(
			layout(&nodes, f64::NAN),
			Err(LayoutError::InvalidZoom { .. })
		));
		assert_eq!(layout(&nodes, 400.0).unwrap().scale, 1.5);
	}

	#[test]
	fn custom_params_change_rings() {
		let engine = GraphLayoutEngine::new(LayoutParams {
			rings: 3,
			..LayoutParams::default()
		});
		let radii: Vec<_> = engine.ring_radii().collect();
		assert_eq!(radii, [150.0, 210.0, 270.0]);

		let scene = engine
			.layout_at(&seed::graph_nodes()[..4], ZoomLevel::default())
			.unwrap();
		let radii: Vec<_> = scene.points.iter().map(|p| p.radius).collect();
		assert_eq!(radii, [150.0, 210.0, 270.0, 150.0]);
	}

	#[test]
	fn non_finite_scale_is_reported_even_when_empty() {
		let engine = GraphLayoutEngine::new(LayoutParams {
			zoom_divisor: 0.0,
			..LayoutParams::default()
		});
		assert!(matches!(
			engine.layout(&[], 50.0),
			Err(LayoutError::NonFiniteScale { .. })
		));

		let engine = GraphLayoutEngine::new(LayoutParams {
			base_scale: f64::NAN,
			..LayoutParams::default()
		});
		assert!(matches!(
			engine.layout(&seed::graph_nodes(), 50.0),
			Err(LayoutError::NonFiniteScale { .. })
		));
	}

	#[test]
	fn non_finite_radius_is_reported() {
		let engine = GraphLayoutEngine::new(LayoutParams {
			inner_radius: f64::NAN,
			..LayoutParams::default()
		});
		assert_eq!(
			engine.layout(&seed::graph_nodes(), 50.0),
			Err(LayoutError::NonFiniteCoordinate { index: 0 })
		);
	}
}
