use log::debug;

use super::layout::{GENERATION_LABEL_DY, NODE_RADIUS, Node, NodeRole, Position, cross_nodes};
use super::surface::{Surface, SurfaceMetrics};
use super::types::{Cross, CrossId, ResolvedCross};

pub const EDGE_COLOR: &str = "#10b981";
pub const PARENT_COLOR: &str = "#6366f1";
pub const OFFSPRING_COLOR: &str = "#10b981";
pub const SELECTED_COLOR: &str = "#f59e0b";
const NODE_OUTLINE_COLOR: &str = "#ffffff";
const LABEL_COLOR: &str = "#ffffff";
const CROSS_GLYPH_COLOR: &str = "#6366f1";
const GENERATION_COLOR: &str = "#64748b";

pub const LABEL_MAX_CHARS: usize = 12;

/// Text lines drawn inside a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeLabel<'a> {
	Single(&'a str),
	Wrapped(&'a str, &'a str),
}

fn truncate(s: &str, max_chars: usize) -> &str {
	match s.char_indices().nth(max_chars) {
		Some((idx, _)) => &s[..idx],
		None => s,
	}
}

/// Multi-word names wrap after the first word; long single words are cut.
pub fn wrap_label(name: &str) -> NodeLabel<'_> {
	let too_long = name.chars().count() > LABEL_MAX_CHARS;
	match name.split_once(' ') {
		Some((first, rest)) if too_long => NodeLabel::Wrapped(first, truncate(rest, LABEL_MAX_CHARS)),
		Some((first, rest)) => NodeLabel::Wrapped(first, rest),
		None => NodeLabel::Single(truncate(name, LABEL_MAX_CHARS)),
	}
}

pub fn node_color(role: NodeRole, selected: bool) -> &'static str {
	match (selected, role.is_parent()) {
		(true, _) => SELECTED_COLOR,
		(false, true) => PARENT_COLOR,
		(false, false) => OFFSPRING_COLOR,
	}
}

/// Redraws every cross onto `surface`. The backing store is resized to device
/// pixels and reset on each call, so repeated calls never accumulate state.
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	metrics: &SurfaceMetrics,
	crosses: &[Cross],
	positions: &[Position],
	selected: Option<&CrossId>,
	zoom: f64,
) {
	let (pw, ph) = metrics.physical_size();
	surface.resize(pw, ph);
	surface.set_scale(metrics.device_pixel_ratio);
	surface.clear(metrics.width, metrics.height);
	if crosses.is_empty() {
		return;
	}
	debug_assert_eq!(crosses.len(), positions.len());
	debug!(
		"rendering {} crosses on {}x{} device px (zoom {:.1})",
		crosses.len(),
		pw,
		ph,
		zoom
	);

	let resolved: Vec<ResolvedCross<'_>> = crosses.iter().map(Cross::resolve).collect();

	surface.save();
	surface.scale(zoom);
	draw_edges(surface, positions);
	for (cross, &point) in resolved.iter().zip(positions) {
		let is_selected = selected == Some(cross.id);
		for node in cross_nodes(cross, point) {
			draw_node(surface, &node, is_selected);
		}
		draw_cross_marker(surface, cross, point);
	}
	surface.restore();
}

fn draw_edges<S: Surface + ?Sized>(surface: &mut S, positions: &[Position]) {
	surface.set_stroke_style(EDGE_COLOR);
	surface.set_line_width(2.0);
	for &point in positions {
		for role in NodeRole::ALL {
			let end = role.center(point);
			if role.is_parent() {
				surface.stroke_line(end, point);
			} else {
				surface.stroke_line(point, end);
			}
		}
	}
}

fn draw_node<S: Surface + ?Sized>(surface: &mut S, node: &Node<'_>, selected: bool) {
	let Position { x, y } = node.center;
	surface.set_fill_style(node_color(node.role, selected));
	surface.set_stroke_style(NODE_OUTLINE_COLOR);
	surface.set_line_width(3.0);
	surface.fill_and_stroke_circle(node.center, NODE_RADIUS);

	surface.set_fill_style(LABEL_COLOR);
	surface.set_font("bold 10px Arial");
	surface.set_text_align("center");
	match wrap_label(node.name) {
		NodeLabel::Single(text) => surface.fill_text(text, Position::new(x, y + 3.0)),
		NodeLabel::Wrapped(first, rest) => {
			surface.fill_text(first, Position::new(x, y - 3.0));
			surface.fill_text(rest, Position::new(x, y + 8.0));
		}
	}
}

fn draw_cross_marker<S: Surface + ?Sized>(surface: &mut S, cross: &ResolvedCross<'_>, point: Position) {
	surface.set_fill_style(CROSS_GLYPH_COLOR);
	surface.set_font("bold 16px Arial");
	surface.set_text_align("center");
	surface.fill_text("×", point.offset(0.0, 5.0));

	surface.set_fill_style(GENERATION_COLOR);
	surface.set_font("12px Arial");
	surface.fill_text(&cross.generation_label(), point.offset(0.0, GENERATION_LABEL_DY));
}

#[cfg(test)]
mod tests {
	use super::super::layout::compute_layout;
	use super::super::surface::recording::{Op, RecordingSurface};
	use super::super::types::fixtures;
	use super::*;

	fn metrics() -> SurfaceMetrics {
		SurfaceMetrics::new(800.0, 384.0, 1.0)
	}

	#[test]
	fn labels() {
		assert_eq!(wrap_label("Haze"), NodeLabel::Single("Haze"));
		assert_eq!(wrap_label("Supercalifragilistic"), NodeLabel::Single("Supercalifra"));
		assert_eq!(wrap_label("OG Kush"), NodeLabel::Wrapped("OG", "Kush"));
		assert_eq!(
			wrap_label("Granddaddy Purple Punch Haze"),
			NodeLabel::Wrapped("Granddaddy", "Purple Punch")
		);
		assert_eq!(wrap_label("Ünïcödé Strain Name"), NodeLabel::Wrapped("Ünïcödé", "Strain Name"));
	}

	#[test]
	fn colors_by_role_and_selection() {
		assert_eq!(node_color(NodeRole::Parent1, false), PARENT_COLOR);
		assert_eq!(node_color(NodeRole::Parent2, false), PARENT_COLOR);
		assert_eq!(node_color(NodeRole::Offspring, false), OFFSPRING_COLOR);
		assert_eq!(node_color(NodeRole::Offspring, true), SELECTED_COLOR);
	}

	#[test]
	fn draws_a_y_per_cross() {
		let crosses = fixtures::crosses(2);
		let positions = compute_layout(&crosses);
		let mut surface = RecordingSurface::default();
		render(&mut surface, &metrics(), &crosses, &positions, None, 1.0);

		let lines = surface.lines();
		assert_eq!(lines.len(), 6);
		let p = positions[0];
		assert_eq!(lines[0], (Position::new(70.0, 90.0), p));
		assert_eq!(lines[1], (Position::new(230.0, 90.0), p));
		assert_eq!(lines[2], (p, Position::new(150.0, 210.0)));

		let circles = surface.circles();
		assert_eq!(circles.len(), 6);
		assert_eq!(circles[0].1, PARENT_COLOR);
		assert_eq!(circles[2].1, OFFSPRING_COLOR);

		let texts = surface.texts();
		assert_eq!(texts, vec!["P0a", "P0b", "O0", "×", "F1", "P1a", "P1b", "O1", "×", "F1"]);
	}

	#[test]
	fn selected_cross_is_highlighted() {
		let crosses = fixtures::crosses(2);
		let positions = compute_layout(&crosses);
		let mut surface = RecordingSurface::default();
		render(&mut surface, &metrics(), &crosses, &positions, Some(&crosses[1].id), 1.0);

		let colors: Vec<String> = surface.circles().into_iter().map(|(_, c)| c).collect();
		assert_eq!(
			colors,
			vec![PARENT_COLOR, PARENT_COLOR, OFFSPRING_COLOR, SELECTED_COLOR, SELECTED_COLOR, SELECTED_COLOR]
		);
	}

	#[test]
	fn render_is_idempotent() {
		let crosses = fixtures::crosses(5);
		let positions = compute_layout(&crosses);
		let mut surface = RecordingSurface::default();
		render(&mut surface, &metrics(), &crosses, &positions, Some(&crosses[0].id), 1.3);
		let first = surface.ops.clone();
		render(&mut surface, &metrics(), &crosses, &positions, Some(&crosses[0].id), 1.3);
		assert_eq!(surface.ops, first);
	}

	#[test]
	fn scales_to_device_pixels_then_zoom() {
		let crosses = fixtures::crosses(1);
		let positions = compute_layout(&crosses);
		let mut surface = RecordingSurface::default();
		let metrics = SurfaceMetrics::new(500.0, 400.0, 2.0);
		render(&mut surface, &metrics, &crosses, &positions, None, 0.5);

		assert_eq!(surface.size, (1000, 800));
		assert_eq!(
			&surface.ops[..5],
			&[
				Op::Resize(1000, 800),
				Op::SetScale(2.0),
				Op::Clear(500.0, 400.0),
				Op::Save,
				Op::Scale(0.5),
			]
		);
		assert_eq!(surface.ops.last(), Some(&Op::Restore));
		// Drawing calls stay in logical units regardless of density.
		assert_eq!(surface.circles()[2].0, Position::new(150.0, 210.0));
	}

	#[test]
	fn empty_input_only_clears() {
		let mut surface = RecordingSurface::default();
		render(&mut surface, &metrics(), &[], &[], None, 1.0);
		assert_eq!(
			surface.ops,
			vec![Op::Resize(800, 384), Op::SetScale(1.0), Op::Clear(800.0, 384.0)]
		);
	}

	#[test]
	fn placeholders_and_generation_labels() {
		let mut cross = fixtures::cross(9, "A", "B", "C");
		cross.parent2_strain = None;
		cross.offspring_strain = None;
		cross.generation = 3;
		let crosses = vec![cross];
		let mut surface = RecordingSurface::default();
		render(&mut surface, &metrics(), &crosses, &compute_layout(&crosses), None, 1.0);
		assert_eq!(surface.texts(), vec!["A", "Parent", "2", "Offspring", "×", "F3"]);
	}
}
