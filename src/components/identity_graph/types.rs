use std::fmt;
use std::str::FromStr;

use super::error::ParseSelectorError;

/// Kind of entity a graph node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
	/// Account holder.
	User,
	/// Phone, browser or other client.
	Device,
	/// Payment card.
	Card,
	/// Receiving business.
	Merchant,
}

impl EntityKind {
	/// Every kind, in dropdown order.
	pub const ALL: [Self; 4] = [Self::User, Self::Device, Self::Card, Self::Merchant];

	/// Dropdown value.
	pub fn key(self) -> &'static str {
		match self {
			Self::User => "user",
			Self::Device => "device",
			Self::Card => "card",
			Self::Merchant => "merchant",
		}
	}

	/// Legend label.
	pub fn label(self) -> &'static str {
		match self {
			Self::User => "User",
			Self::Device => "Device",
			Self::Card => "Card",
			Self::Merchant => "Merchant",
		}
	}

	/// Plural label used by the entity dropdown.
	pub fn plural(self) -> &'static str {
		match self {
			Self::User => "Users",
			Self::Device => "Devices",
			Self::Card => "Cards",
			Self::Merchant => "Merchants",
		}
	}

	/// Icon drawn inside the node circle and in the legend.
	pub fn glyph(self) -> &'static str {
		match self {
			Self::User => "\u{1F464}",
			Self::Device => "\u{1F4F1}",
			Self::Card => "\u{1F4B3}",
			Self::Merchant => "\u{1F3EA}",
		}
	}

	/// Legend accent color.
	pub fn color(self) -> &'static str {
		match self {
			Self::User => "#3b82f6",
			Self::Device => "#06b6d4",
			Self::Card => "#a855f7",
			Self::Merchant => "#f59e0b",
		}
	}
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for EntityKind {
	type Err = ParseSelectorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.key() == s)
			.ok_or_else(|| ParseSelectorError::UnknownEntityKind(s.to_string()))
	}
}

/// Static risk classification attached to nodes and clusters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskLevel {
	/// No notable signals.
	Low,
	/// Worth a look.
	Medium,
	/// Likely fraud.
	High,
}

impl RiskLevel {
	/// Dropdown order, highest first.
	pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

	/// Dropdown value.
	pub fn key(self) -> &'static str {
		match self {
			Self::Low => "low",
			Self::Medium => "medium",
			Self::High => "high",
		}
	}

	/// Dropdown and legend label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Low => "Low Risk",
			Self::Medium => "Medium Risk",
			Self::High => "High Risk",
		}
	}

	/// Stroke color; fills use the same hue at low alpha.
	pub fn color(self) -> &'static str {
		match self {
			Self::Low => "#22c55e",
			Self::Medium => "#eab308",
			Self::High => "#ef4444",
		}
	}

	/// Translucent fill for node circles and cluster cards.
	pub fn fill(self) -> &'static str {
		match self {
			Self::Low => "rgba(34, 197, 94, 0.2)",
			Self::Medium => "rgba(234, 179, 8, 0.2)",
			Self::High => "rgba(239, 68, 68, 0.2)",
		}
	}
}

impl fmt::Display for RiskLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for RiskLevel {
	type Err = ParseSelectorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|level| level.key() == s)
			.ok_or_else(|| ParseSelectorError::UnknownRiskLevel(s.to_string()))
	}
}

/// One entity in the identity graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique id, e.g. `USR-7823`.
	pub id: String,
	/// What the entity is.
	pub kind: EntityKind,
	/// Display name.
	pub label: String,
	/// Static risk classification.
	pub risk: RiskLevel,
	/// Number of linked entities.
	pub connections: u32,
}

impl GraphNode {
	/// Builds a node from borrowed or owned strings.
	pub fn new(
		id: impl Into<String>,
		kind: EntityKind,
		label: impl Into<String>,
		risk: RiskLevel,
		connections: u32,
	) -> Self {
		Self {
			id: id.into(),
			kind,
			label: label.into(),
			risk,
			connections,
		}
	}

	/// Hover text, e.g. `Ravi Kumar (5 connections)`.
	pub fn tooltip(&self) -> String {
		format!("{} ({} connections)", self.label, self.connections)
	}
}

/// A group of entities sharing fraud signals. Not keyed to [`GraphNode`] ids.
#[derive(Clone, Debug, PartialEq)]
pub struct FraudCluster {
	/// Unique id, e.g. `CLT-001`.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Cluster risk.
	pub risk: RiskLevel,
	/// Member count.
	pub node_count: u32,
	/// Signals the members have in common.
	pub shared_signals: Vec<String>,
	/// Free-text summary.
	pub description: String,
}

/// 2D position; scene points are offsets from the hub.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal, growing right.
	pub x: f64,
	/// Vertical, growing down.
	pub y: f64,
}

impl Point {
	/// The scene center.
	pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

	/// Euclidean distance.
	pub fn distance(self, other: Self) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A straight line between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	/// First endpoint.
	pub start: Point,
	/// Second endpoint.
	pub end: Point,
}

/// Placement of one filtered node, as an offset from the scene center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPoint {
	/// Position of the node in the filtered input.
	pub index: usize,
	/// Degrees, clockwise on screen from the positive x axis.
	pub angle: f64,
	/// Ring radius.
	pub radius: f64,
	/// Unscaled offset from the hub.
	pub position: Point,
	/// Line from the hub to `position`.
	pub spoke: Segment,
}

/// Output of one layout pass. `points[i]` belongs to the i-th input node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Factor applied to the whole drawing.
	pub scale: f64,
	/// One entry per laid-out node.
	pub points: Vec<LayoutPoint>,
}

impl Scene {
	/// True when no node survived filtering.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}
