use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::layout::GraphLayoutEngine;
use super::state::{CanvasState, HUB_RADIUS, NODE_RADIUS};
use super::types::{GraphNode, Scene};

const BACKGROUND: &str = "#0f172a";
const PRIMARY: &str = "#3b82f6";
const LABEL_CHARS: usize = 12;

/// Shortens long labels to fit under a node.
pub(crate) fn truncate_label(label: &str) -> String {
	if label.chars().count() <= LABEL_CHARS {
		return label.to_string();
	}
	let head: String = label.chars().take(LABEL_CHARS - 1).collect();
	format!("{head}\u{2026}")
}

pub fn render(
	canvas: &CanvasState,
	engine: &GraphLayoutEngine,
	scene: &Scene,
	nodes: &[GraphNode],
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, canvas.width, canvas.height);
	ctx.save();
	let center = canvas.center();
	let _ = ctx.translate(center.x, center.y);
	let _ = ctx.scale(scene.scale, scene.scale);
	draw_rings(engine, ctx);
	draw_spokes(scene, ctx);
	draw_hub(ctx);
	draw_nodes(canvas, scene, nodes, ctx);
	ctx.restore();
}

fn draw_rings(engine: &GraphLayoutEngine, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("rgba(148, 163, 184, 0.15)");
	ctx.set_line_width(1.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(6.0),
	));
	for radius in engine.ring_radii() {
		ctx.begin_path();
		let _ = ctx.arc(0.0, 0.0, radius, 0.0, 2.0 * PI);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_spokes(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("rgba(148, 163, 184, 0.3)");
	ctx.set_line_width(1.0);
	for point in &scene.points {
		let (start, end) = (point.spoke.start, point.spoke.end);
		ctx.begin_path();
		ctx.move_to(start.x, start.y);
		ctx.line_to(end.x, end.y);
		ctx.stroke();
	}
}

fn draw_hub(ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	let _ = ctx.arc(0.0, 0.0, HUB_RADIUS, 0.0, 2.0 * PI);
	ctx.set_fill_style_str("rgba(59, 130, 246, 0.3)");
	ctx.fill();
	ctx.set_stroke_style_str(PRIMARY);
	ctx.set_line_width(2.0);
	ctx.stroke();
}

fn draw_nodes(
	canvas: &CanvasState,
	scene: &Scene,
	nodes: &[GraphNode],
	ctx: &CanvasRenderingContext2d,
) {
	let hovered_index = canvas.hovered_index(nodes);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for (point, node) in scene.points.iter().zip(nodes) {
		let (x, y) = (point.position.x, point.position.y);
		let hovered = hovered_index == Some(point.index);
		let radius = if hovered { NODE_RADIUS * 1.1 } else { NODE_RADIUS };

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(BACKGROUND);
		ctx.fill();
		ctx.set_fill_style_str(node.risk.fill());
		ctx.fill();
		ctx.set_stroke_style_str(node.risk.color());
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_font("16px sans-serif");
		let _ = ctx.fill_text(node.kind.glyph(), x, y);

		ctx.set_fill_style_str("rgba(148, 163, 184, 0.9)");
		ctx.set_font("11px sans-serif");
		let _ = ctx.fill_text(&truncate_label(&node.label), x, y + radius + 10.0);
	}

	let hovered = hovered_index.and_then(|i| scene.points.get(i).zip(nodes.get(i)));
	if let Some((point, node)) = hovered {
		draw_tooltip(point.position.x, point.position.y, &node.tooltip(), ctx);
	}
}

fn draw_tooltip(x: f64, y: f64, text: &str, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("12px sans-serif");
	let width = ctx
		.measure_text(text)
		.map(|m| m.width())
		.unwrap_or(text.len() as f64 * 6.0);
	let (w, h) = (width + 12.0, 22.0);
	let top = y - NODE_RADIUS - h - 8.0;

	ctx.set_fill_style_str("rgba(15, 23, 42, 0.9)");
	ctx.fill_rect(x - w / 2.0, top, w, h);
	ctx.set_stroke_style_str("rgba(148, 163, 184, 0.5)");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(x - w / 2.0, top, w, h);
	ctx.set_fill_style_str("white");
	let _ = ctx.fill_text(text, x, top + h / 2.0);
}

#[cfg(test)]
mod tests {
	use super::truncate_label;

	#[test]
	fn long_labels_are_shortened() {
		assert_eq!(truncate_label("TechMart"), "TechMart");
		assert_eq!(truncate_label("Chrome/Windows"), "Chrome/Wind\u{2026}");
		assert_eq!(truncate_label("Chrome/Windows").chars().count(), 12);
	}
}
