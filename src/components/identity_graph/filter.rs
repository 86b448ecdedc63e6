//! Risk and entity-kind predicates applied before layout.

use std::str::FromStr;

use super::types::{EntityKind, GraphNode, RiskLevel};

/// Dropdown value meaning "no restriction".
pub const ALL_KEY: &str = "all";

/// Either every value passes, or only the one named.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selector<T> {
	/// No restriction.
	#[default]
	All,
	/// Only this value passes.
	Only(T),
}

impl<T: PartialEq> Selector<T> {
	/// Whether `value` passes.
	pub fn matches(&self, value: &T) -> bool {
		match self {
			Self::All => true,
			Self::Only(wanted) => wanted == value,
		}
	}
}

impl<T: FromStr> FromStr for Selector<T> {
	type Err = T::Err;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == ALL_KEY {
			Ok(Self::All)
		} else {
			s.parse().map(Self::Only)
		}
	}
}

impl Selector<RiskLevel> {
	/// Dropdown value.
	pub fn key(&self) -> &'static str {
		match self {
			Self::All => ALL_KEY,
			Self::Only(level) => level.key(),
		}
	}
}

impl Selector<EntityKind> {
	/// Dropdown value.
	pub fn key(&self) -> &'static str {
		match self {
			Self::All => ALL_KEY,
			Self::Only(kind) => kind.key(),
		}
	}
}

/// Both dropdowns; a node must pass each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
	/// Risk level dropdown.
	pub risk: Selector<RiskLevel>,
	/// Entity type dropdown.
	pub kind: Selector<EntityKind>,
}

impl FilterCriteria {
	/// Whether `node` passes both selectors.
	pub fn accepts(&self, node: &GraphNode) -> bool {
		self.risk.matches(&node.risk) && self.kind.matches(&node.kind)
	}
}

/// Nodes passing both predicates, in their original order.
pub fn filter(nodes: &[GraphNode], criteria: &FilterCriteria) -> Vec<GraphNode> {
	nodes
		.iter()
		.filter(|node| criteria.accepts(node))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::identity_graph::error::ParseSelectorError;
	use crate::seed;

	fn node(id: &str, kind: EntityKind, risk: RiskLevel) -> GraphNode {
		GraphNode::new(id, kind, id, risk, 1)
	}

	#[test]
	fn high_risk_keeps_first_and_last() {
		let nodes = vec![
			node("a", EntityKind::User, RiskLevel::High),
			node("b", EntityKind::Device, RiskLevel::Low),
			node("c", EntityKind::Card, RiskLevel::Medium),
			node("d", EntityKind::Merchant, RiskLevel::High),
		];
		let criteria = FilterCriteria {
			risk: Selector::Only(RiskLevel::High),
			kind: Selector::All,
		};

		let ids: Vec<_> = filter(&nodes, &criteria)
			.into_iter()
			.map(|n| n.id)
			.collect();
		assert_eq!(ids, ["a", "d"]);
	}

	#[test]
	fn default_criteria_pass_everything() {
		let nodes = seed::graph_nodes();
		assert_eq!(filter(&nodes, &FilterCriteria::default()), nodes);
	}

	#[test]
	fn every_combination_is_an_ordered_subset() {
		let nodes = seed::graph_nodes();
		let risks = std::iter::once(Selector::All).chain(RiskLevel::ALL.map(Selector::Only));
		for risk in risks {
			let kinds = std::iter::once(Selector::All).chain(EntityKind::ALL.map(Selector::Only));
			for kind in kinds {
				let criteria = FilterCriteria { risk, kind };
				let out = filter(&nodes, &criteria);
				assert!(out.len() <= nodes.len());
				assert!(out.iter().all(|n| criteria.accepts(n)));

				let positions: Vec<_> = out
					.iter()
					.map(|n| nodes.iter().position(|m| m.id == n.id).unwrap())
					.collect();
				assert!(positions.windows(2).all(|w| w[0] < w[1]));
			}
		}
	}

	#[test]
	fn empty_result_is_valid() {
		let nodes = vec![node("a", EntityKind::User, RiskLevel::Low)];
		let criteria = FilterCriteria {
			risk: Selector::Only(RiskLevel::High),
			kind: Selector::Only(EntityKind::Card),
		};
		assert!(filter(&nodes, &criteria).is_empty());
		assert!(filter(&[], &FilterCriteria::default()).is_empty());
	}

	#[test]
	fn parses_dropdown_values() {
		assert_eq!("all".parse::<Selector<RiskLevel>>(), Ok(Selector::All));
		assert_eq!(
			"merchant".parse::<Selector<EntityKind>>(),
			Ok(Selector::Only(EntityKind::Merchant))
		);
		assert_eq!(
			"severe".parse::<Selector<RiskLevel>>(),
			Err(ParseSelectorError::UnknownRiskLevel("severe".into()))
		);
		assert_eq!(Selector::Only(RiskLevel::Medium).key(), "medium");
	}
}
