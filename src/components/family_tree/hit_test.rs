use super::layout::{NODE_RADIUS, Position, cross_nodes};
use super::types::{Cross, CrossId};

/// On-screen top-left corner of the drawing surface, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ClientOrigin {
	pub left: f64,
	pub top: f64,
}

/// Maps a client-space pointer position into layout space.
pub fn client_to_layout(origin: ClientOrigin, client: Position, zoom: f64) -> Position {
	Position::new((client.x - origin.left) / zoom, (client.y - origin.top) / zoom)
}

/// Returns the cross owning the node under the pointer.
///
/// Every node is checked in drawing order and a later hit overwrites an
/// earlier one, so on overlap the last node drawn wins.
pub fn hit_test<'a>(
	origin: ClientOrigin,
	client: Position,
	crosses: &'a [Cross],
	positions: &[Position],
	zoom: f64,
) -> Option<&'a CrossId> {
	let point = client_to_layout(origin, client, zoom);
	let mut found = None;
	for (cross, &cross_point) in crosses.iter().zip(positions) {
		for node in cross_nodes(&cross.resolve(), cross_point) {
			if node.center.distance_to(point) <= NODE_RADIUS {
				found = Some(node.cross_id);
			}
		}
	}
	found
}

#[cfg(test)]
mod tests {
	use super::super::layout::{NodeRole, compute_layout};
	use super::super::types::fixtures;
	use super::*;

	#[test]
	fn center_of_every_node_hits() {
		let crosses = fixtures::crosses(7);
		let positions = compute_layout(&crosses);
		for (cross, &p) in crosses.iter().zip(&positions) {
			for role in NodeRole::ALL {
				let hit = hit_test(ClientOrigin::default(), role.center(p), &crosses, &positions, 1.0);
				assert_eq!(hit, Some(&cross.id));
			}
		}
	}

	#[test]
	fn radius_is_inclusive() {
		let crosses = fixtures::crosses(1);
		let positions = compute_layout(&crosses);
		let offspring = NodeRole::Offspring.center(positions[0]);
		let origin = ClientOrigin::default();
		assert!(hit_test(origin, offspring.offset(30.0, 0.0), &crosses, &positions, 1.0).is_some());
		assert!(hit_test(origin, offspring.offset(30.01, 0.0), &crosses, &positions, 1.0).is_none());
	}

	#[test]
	fn blank_space_misses() {
		let crosses = fixtures::crosses(4);
		let positions = compute_layout(&crosses);
		// The cross point itself lies between the three nodes.
		assert_eq!(hit_test(ClientOrigin::default(), positions[0], &crosses, &positions, 1.0), None);
		assert_eq!(hit_test(ClientOrigin::default(), Position::new(0.0, 0.0), &crosses, &positions, 1.0), None);
		assert_eq!(hit_test(ClientOrigin::default(), Position::new(0.0, 0.0), &[], &[], 1.0), None);
	}

	#[test]
	fn accounts_for_surface_origin_and_zoom() {
		let crosses = fixtures::crosses(1);
		let positions = compute_layout(&crosses);
		let origin = ClientOrigin { left: 40.0, top: 100.0 };
		// Parent 1 sits at (70, 90) in layout space; at zoom 2 that is (140, 180) on the surface.
		let client = Position::new(40.0 + 140.0, 100.0 + 180.0);
		assert_eq!(client_to_layout(origin, client, 2.0), Position::new(70.0, 90.0));
		assert_eq!(hit_test(origin, client, &crosses, &positions, 2.0), Some(&crosses[0].id));
		assert_eq!(hit_test(origin, client, &crosses, &positions, 1.0), None);
	}

	#[test]
	fn last_overlapping_node_wins() {
		let crosses = fixtures::crosses(2);
		// Two cross points 20 units apart so their offspring nodes overlap.
		let positions = vec![Position::new(150.0, 150.0), Position::new(170.0, 150.0)];
		let between = Position::new(160.0, 210.0);
		assert_eq!(
			hit_test(ClientOrigin::default(), between, &crosses, &positions, 1.0),
			Some(&crosses[1].id)
		);

		let swapped: Vec<Cross> = crosses.iter().rev().cloned().collect();
		assert_eq!(
			hit_test(ClientOrigin::default(), between, &swapped, &positions, 1.0),
			Some(&swapped[1].id)
		);
	}
}
