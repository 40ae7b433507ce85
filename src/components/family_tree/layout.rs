use super::types::{Cross, CrossId, ResolvedCross};

pub const GRID_SPACING: f64 = 200.0;
pub const GRID_ORIGIN: Position = Position { x: 150.0, y: 150.0 };
/// Horizontal distance from the cross point to each parent node.
pub const PARENT_DX: f64 = 80.0;
/// Vertical distance from the cross point to the parent row and the offspring node.
pub const NODE_DY: f64 = 60.0;
pub const NODE_RADIUS: f64 = 30.0;
pub const GENERATION_LABEL_DY: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn offset(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}

	pub fn distance_to(self, other: Position) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
	Parent1,
	Parent2,
	Offspring,
}

impl NodeRole {
	/// Drawing and hit-test order within a cross.
	pub const ALL: [NodeRole; 3] = [NodeRole::Parent1, NodeRole::Parent2, NodeRole::Offspring];

	pub fn is_parent(self) -> bool {
		!matches!(self, NodeRole::Offspring)
	}

	/// Node center relative to its cross point.
	pub fn center(self, cross_point: Position) -> Position {
		match self {
			NodeRole::Parent1 => cross_point.offset(-PARENT_DX, -NODE_DY),
			NodeRole::Parent2 => cross_point.offset(PARENT_DX, -NODE_DY),
			NodeRole::Offspring => cross_point.offset(0.0, NODE_DY),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node<'a> {
	pub role: NodeRole,
	pub cross_id: &'a CrossId,
	pub name: &'a str,
	pub center: Position,
}

/// Smallest column count giving a square-ish grid for `n` cells.
pub fn grid_columns(n: usize) -> usize {
	if n <= 1 {
		return 1;
	}
	let mut cols = (n as f64).sqrt().ceil() as usize;
	while cols * cols < n {
		cols += 1;
	}
	while cols > 1 && (cols - 1) * (cols - 1) >= n {
		cols -= 1;
	}
	cols
}

/// Grid positions keyed by array index; one per cross.
pub fn compute_layout(crosses: &[Cross]) -> Vec<Position> {
	grid_positions(crosses.len())
}

pub fn grid_positions(n: usize) -> Vec<Position> {
	let cols = grid_columns(n);
	(0..n)
		.map(|i| {
			let (row, col) = (i / cols, i % cols);
			GRID_ORIGIN.offset(col as f64 * GRID_SPACING, row as f64 * GRID_SPACING)
		})
		.collect()
}

/// The three strain nodes of a cross drawn at `cross_point`.
pub fn cross_nodes<'a>(cross: &ResolvedCross<'a>, cross_point: Position) -> [Node<'a>; 3] {
	NodeRole::ALL.map(|role| Node {
		role,
		cross_id: cross.id,
		name: match role {
			NodeRole::Parent1 => cross.parent1,
			NodeRole::Parent2 => cross.parent2,
			NodeRole::Offspring => cross.offspring,
		},
		center: role.center(cross_point),
	})
}
