use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::layout::GraphLayoutEngine;
use super::render;
use super::state::{CanvasState, ViewState};
use super::types::{GraphNode, Scene};

const WHEEL_STEP: i32 = 5;

/// Filters, lays out and scales `nodes` for the current view. A layout error
/// is logged and drawn as an empty graph.
fn current_scene(
	engine: &GraphLayoutEngine,
	view: &ViewState,
	nodes: &[GraphNode],
) -> (Vec<GraphNode>, Scene) {
	let visible = view.visible(nodes);
	match engine.layout_at(&visible, view.zoom) {
		Ok(scene) => (visible, scene),
		Err(err) => {
			error!("identity graph layout failed: {err}");
			(Vec::new(), Scene::default())
		}
	}
}

fn cursor(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Canvas drawing the filtered nodes on their orbits. Hovering shows a
/// tooltip; the mouse wheel steps the zoom.
#[component]
pub fn IdentityGraphCanvas(
	/// Full, unfiltered node set.
	#[prop(into)]
	nodes: Signal<Vec<GraphNode>>,
	/// Filter and zoom selections, shared with the page controls.
	view_state: RwSignal<ViewState>,
	/// Fixed width; defaults to the parent's width.
	#[prop(default = None)]
	width: Option<f64>,
	/// Fixed height; defaults to the parent's height.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let engine = Rc::new(GraphLayoutEngine::default());
	let state = Rc::new(RefCell::new(CanvasState::default()));
	let hover = RwSignal::new(None::<String>);
	let (state_draw, engine_draw) = (state.clone(), engine.clone());

	Effect::new(move |_| {
		let view = view_state.get();
		let nodes = nodes.get();
		let hovered = hover.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("2d canvas context unavailable");
			return;
		};

		let (visible, scene) = current_scene(&engine_draw, &view, &nodes);
		let mut s = state_draw.borrow_mut();
		s.resize(w, h);
		s.hover = hovered;
		render::render(&s, &engine_draw, &scene, &visible, &ctx);
	});

	let (state_mm, engine_mm) = (state.clone(), engine.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = cursor(&canvas.into(), &ev);
		let (visible, scene) = current_scene(
			&engine_mm,
			&view_state.get_untracked(),
			&nodes.get_untracked(),
		);
		let changed = {
			let mut s = state_mm.borrow_mut();
			let found = s
				.node_at_position(&scene, x, y)
				.and_then(|i| visible.get(i))
				.map(|n| n.id.clone());
			s.set_hover(found.clone()).then_some(found)
		};
		if let Some(found) = changed {
			hover.set(found);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if state_ml.borrow_mut().set_hover(None) {
			hover.set(None);
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let delta = if ev.delta_y() > 0.0 {
			-WHEEL_STEP
		} else {
			WHEEL_STEP
		};
		view_state.update(|v| v.zoom = v.zoom.step(delta));
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="identity-graph-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: pointer;"
		/>
	}
}
