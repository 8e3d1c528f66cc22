use std::f32::consts::PI;

use crate::skeleton::Skeleton;
use protocol::pr_model::PrPrimitive;
use verlet::world::World;
use verlet::V2;

// ring of points around a hub; the unbreakable ring and spoke struts stand
// in for a pressure/volume constraint
pub struct SoftBody {
	segments: usize,
	skel: Skeleton,
}

impl SoftBody {
	pub fn new(center: V2, radius: f32, segments: usize) -> Self {
		assert!(segments >= 3);
		let mut skel = Skeleton::default();
		for i in 0..segments {
			let angle = i as f32 / segments as f32 * PI * 2.;
			skel.add_point(center + V2::new(angle.cos(), angle.sin()) * radius, false);
		}
		for i in 0..segments {
			let next = (i + 1) % segments;
			let rest = (skel.point_pos(next) - skel.point_pos(i)).norm();
			skel.add_constraint(i, next, rest, 0.);
		}
		// hub goes last, spokes keep the ring from collapsing
		let hub = skel.add_point(center, false);
		for i in 0..segments {
			let rest = (skel.point_pos(i) - center).norm();
			skel.add_constraint(i, hub, rest, 0.);
		}
		Self { segments, skel }
	}

	pub fn segments(&self) -> usize {
		self.segments
	}

	pub fn skeleton(&self) -> &Skeleton {
		&self.skel
	}

	pub fn register(&mut self, world: &mut World) {
		self.skel.register(world);
	}

	pub fn hub(&self) -> usize {
		self.skel.last_point()
	}

	pub fn pos(&self, world: &World) -> V2 {
		world.point(self.hub()).pos
	}

	// moving the hub leaves its history behind, so this imparts velocity
	pub fn set_pos(&self, world: &mut World, pos: V2) {
		world.point_mut(self.hub()).pos = pos;
	}

	// polar rotation of the rim about the hub, drives wheel behavior
	pub fn rotate(&self, world: &mut World, angle: f32) {
		let center = world.point(self.hub()).pos;
		for i in 0..self.segments {
			let id = self.skel.global(i);
			let d = world.point(id).pos - center;
			let radius = d.norm();
			let a = d[1].atan2(d[0]) + angle;
			world.point_mut(id).pos = center + V2::new(a.cos(), a.sin()) * radius;
		}
	}

	pub fn render(&self) -> Vec<PrPrimitive> {
		let rim: Vec<usize> = (0..self.segments).map(|i| self.skel.global(i)).collect();
		vec![
			PrPrimitive::Polyline {
				ids: rim.clone(),
				closed: true,
			},
			PrPrimitive::Spokes {
				hub: self.hub(),
				rim,
			},
			PrPrimitive::Marker { id: self.hub() },
		]
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use verlet::config::Config;

	fn world() -> World {
		World::new(Config::default().with_floor(false))
	}

	#[test]
	fn hub_and_spoke_topology() {
		let mut world = world();
		let mut body = SoftBody::new(V2::new(100., 100.), 50., 12);
		body.register(&mut world);

		assert_eq!(world.point_count(), 13);
		assert_eq!(world.constraints().len(), 24);
		assert_eq!(body.hub(), 12);
		// every strut is unbreakable
		assert!(world.constraints().iter().all(|c| c.tear_length <= 0.));
		// spokes hold the rim at the radius
		for c in world.constraints().iter().filter(|c| c.i2 == 12) {
			assert!((c.rest_length - 50.).abs() < 1e-3);
		}
	}

	#[test]
	fn rotate_preserves_radii() {
		let mut world = world();
		let mut body = SoftBody::new(V2::new(0., 0.), 50., 8);
		body.register(&mut world);

		let before = world.point(0).pos;
		body.rotate(&mut world, PI / 2.);
		for i in 0..8 {
			let r = (world.point(i).pos - body.pos(&world)).norm();
			assert!((r - 50.).abs() < 1e-3);
		}
		let after = world.point(0).pos;
		assert!((after - V2::new(0., 50.)).norm() < 1e-3);
		assert!((before - V2::new(50., 0.)).norm() < 1e-3);
	}

	#[test]
	fn hub_position_round_trip() {
		let mut world = world();
		let mut body = SoftBody::new(V2::new(30., 40.), 10., 6);
		body.register(&mut world);

		assert_eq!(body.pos(&world), V2::new(30., 40.));
		body.set_pos(&mut world, V2::new(60., 40.));
		assert_eq!(body.pos(&world), V2::new(60., 40.));
		// history untouched: the move reads as velocity
		assert_eq!(world.point(body.hub()).ppos, V2::new(30., 40.));
	}
}
