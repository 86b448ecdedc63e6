//! Static sample data for the identity graph page.
//!
//! Nodes and clusters are two independent collections; cluster membership is
//! a count, not a list of node ids.

use crate::components::identity_graph::{EntityKind, FraudCluster, GraphNode, RiskLevel};

/// Devices shared across accounts, as reported alongside the node feed.
pub const SHARED_DEVICES: usize = 4;

/// The ten sample entities, in display order.
pub fn graph_nodes() -> Vec<GraphNode> {
	use EntityKind::*;
	use RiskLevel::*;

	[
		("USR-7823", User, "Ravi Kumar", High, 5),
		("USR-4521", User, "Priya Sharma", Low, 2),
		("USR-3847", User, "Amit Patel", High, 4),
		("DEV-001", Device, "iPhone 14 Pro", Medium, 3),
		("DEV-002", Device, "Unknown Device", High, 5),
		("DEV-003", Device, "Chrome/Windows", Low, 1),
		("CRD-001", Card, "HDFC ****4521", Medium, 2),
		("CRD-002", Card, "SBI ****3421", High, 4),
		("MRC-001", Merchant, "TechMart", Low, 8),
		("MRC-002", Merchant, "QuickPay", High, 6),
	]
	.into_iter()
	.map(|(id, kind, label, risk, connections)| GraphNode::new(id, kind, label, risk, connections))
	.collect()
}

/// The three detected clusters.
pub fn fraud_clusters() -> Vec<FraudCluster> {
	vec![
		cluster(
			"CLT-001",
			"Synthetic Identity Ring",
			RiskLevel::High,
			12,
			&["Same Device ID", "Similar IP Range", "Linked Cards"],
			"Multiple accounts created from same device with synthetic identity patterns.",
		),
		cluster(
			"CLT-002",
			"Device Sharing Network",
			RiskLevel::Medium,
			8,
			&["Shared Device", "Common Location"],
			"Single device accessed by multiple accounts within short time windows.",
		),
		cluster(
			"CLT-003",
			"Merchant Collusion Cluster",
			RiskLevel::High,
			15,
			&["Same Beneficiary", "Circular Transactions", "High Velocity"],
			"Merchant accounts with suspicious transaction patterns indicating potential collusion.",
		),
	]
}

fn cluster(
	id: &str,
	name: &str,
	risk: RiskLevel,
	node_count: u32,
	shared_signals: &[&str],
	description: &str,
) -> FraudCluster {
	FraudCluster {
		id: id.into(),
		name: name.into(),
		risk,
		node_count,
		shared_signals: shared_signals.iter().map(|s| s.to_string()).collect(),
		description: description.into(),
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn node_ids_are_unique() {
		let nodes = graph_nodes();
		let ids: HashSet<_> = nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), nodes.len());
	}

	#[test]
	fn clusters_are_not_keyed_to_nodes() {
		let nodes = graph_nodes();
		let clusters = fraud_clusters();
		assert_eq!(clusters.len(), 3);
		assert!(
			clusters
				.iter()
				.all(|c| nodes.iter().all(|n| n.id != c.id))
		);
	}
}
