use std::fmt::Display;

use leptos::ev::Event;
use leptos::prelude::*;
use leptos_meta::Title;
use log::{info, warn};

use crate::components::identity_graph::{
	EntityKind, FraudCluster, GraphStats, IdentityGraphCanvas, RiskLevel, ViewState,
};
use crate::seed;

/// Applies one edit to a copy of the view state and publishes it only if the
/// edit succeeded.
fn apply<E: Display>(
	view_state: RwSignal<ViewState>,
	edit: impl FnOnce(&mut ViewState) -> Result<(), E>,
) {
	let mut next = view_state.get_untracked();
	match edit(&mut next) {
		Ok(()) => view_state.set(next),
		Err(err) => warn!("ignoring filter input: {err}"),
	}
}

fn badge_class(risk: RiskLevel) -> &'static str {
	match risk {
		RiskLevel::High => "badge badge-critical",
		RiskLevel::Medium => "badge badge-medium",
		RiskLevel::Low => "badge badge-low",
	}
}

#[component]
fn ClusterCard(cluster: FraudCluster) -> impl IntoView {
	let style = format!(
		"border-color: {}; background: {};",
		cluster.risk.color(),
		cluster.risk.fill()
	);
	view! {
		<div class="cluster-card" style=style>
			<div class="cluster-header">
				<span class="cluster-name">{cluster.name}</span>
				<span class=badge_class(cluster.risk)>
					{format!("{} nodes", cluster.node_count)}
				</span>
			</div>
			<p class="cluster-description">{cluster.description}</p>
			<div class="cluster-signals">
				{cluster
					.shared_signals
					.into_iter()
					.map(|signal| view! { <span class="signal-chip">{signal}</span> })
					.collect_view()}
			</div>
		</div>
	}
}

#[component]
fn Legend() -> impl IntoView {
	view! {
		<div class="graph-legend">
			<p class="legend-title">"Legend"</p>
			<div class="legend-grid">
				{EntityKind::ALL
					.into_iter()
					.map(|kind| {
						view! {
							<div class="legend-item" style=format!("color: {};", kind.color())>
								<span>{kind.glyph()}</span>
								" "
								{kind.label()}
							</div>
						}
					})
					.collect_view()}
			</div>
			<div class="legend-grid">
				{RiskLevel::ALL
					.into_iter()
					.map(|risk| {
						view! {
							<div class="legend-item">
								<span
									class="legend-swatch"
									style=format!(
										"background: {}; border: 1px solid {};",
										risk.fill(),
										risk.color(),
									)
								/>
								" "
								{risk.label()}
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

/// Identity graph page: filters, orbit graph, fraud clusters and statistics.
#[component]
pub fn IdentityGraphPage() -> impl IntoView {
	let nodes = Signal::derive(seed::graph_nodes);
	let clusters = seed::fraud_clusters();
	let view_state = RwSignal::new(ViewState::default());

	let stats_clusters = clusters.clone();
	let stats = Memo::new(move |_| {
		let all = nodes.get();
		let visible = view_state.with(|v| v.visible(&all));
		GraphStats::collect(&all, &visible, &stats_clusters, seed::SHARED_DEVICES)
	});

	info!(
		"identity graph page: {} nodes, {} clusters",
		nodes.get_untracked().len(),
		clusters.len()
	);

	let on_risk = move |ev: Event| {
		let value = event_target_value(&ev);
		apply(view_state, |v| v.set_risk(&value));
	};
	let on_kind = move |ev: Event| {
		let value = event_target_value(&ev);
		apply(view_state, |v| v.set_kind(&value));
	};
	let on_zoom = move |ev: Event| {
		let value = event_target_value(&ev);
		apply(view_state, |v| v.set_zoom(&value));
	};

	view! {
		<Title text="Identity Graph" />

		<main class="identity-graph-page">
			<section class="card filters">
				<span class="filters-label">"Filters:"</span>
				<select
					on:change=on_risk
					prop:value=move || view_state.get().criteria.risk.key()
				>
					<option value="all">"All Risk Levels"</option>
					{RiskLevel::ALL
						.into_iter()
						.map(|risk| view! { <option value=risk.key()>{risk.label()}</option> })
						.collect_view()}
				</select>
				<select
					on:change=on_kind
					prop:value=move || view_state.get().criteria.kind.key()
				>
					<option value="all">"All Entities"</option>
					{EntityKind::ALL
						.into_iter()
						.map(|kind| view! { <option value=kind.key()>{kind.plural()}</option> })
						.collect_view()}
				</select>
				<label class="zoom-control">
					"Zoom"
					<input
						type="range"
						min="0"
						max="100"
						step="1"
						on:input=on_zoom
						prop:value=move || view_state.get().zoom.value().to_string()
					/>
				</label>
			</section>

			<div class="graph-layout">
				<section class="card graph-panel">
					<h2>"Identity Graph Visualization"</h2>
					<div class="graph-surface">
						<IdentityGraphCanvas nodes=nodes view_state=view_state />
						<Legend />
					</div>
				</section>

				<aside class="insights">
					<section class="card">
						<h2>"Fraud Clusters Detected"</h2>
						{clusters
							.into_iter()
							.map(|cluster| view! { <ClusterCard cluster=cluster /> })
							.collect_view()}
					</section>

					<section class="card stats">
						<h3>"Graph Statistics"</h3>
						<dl>
							<dt>"Total Nodes"</dt>
							<dd>{move || stats.get().total_nodes}</dd>
							<dt>"Visible Nodes"</dt>
							<dd>{move || stats.get().visible_nodes}</dd>
							<dt>"Active Clusters"</dt>
							<dd>{move || stats.get().active_clusters}</dd>
							<dt>"High Risk Entities"</dt>
							<dd class="critical">{move || stats.get().high_risk_entities}</dd>
							<dt>"Shared Devices"</dt>
							<dd class="warning">{move || stats.get().shared_devices}</dd>
						</dl>
					</section>
				</aside>
			</div>
		</main>
	}
}
