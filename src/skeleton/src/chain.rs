use crate::skeleton::Skeleton;
use protocol::pr_model::PrPrimitive;
use verlet::material;
use verlet::world::World;
use verlet::V2;

// diagonal run of links, anchored at the first point; the skip-one
// stiffening pass layers on top of the adjacent links the world solves
pub struct Chain {
	start_pos: V2,
	segment_length: f32,
	segment_count: usize,
	flexibility: f32,
	skel: Skeleton,
}

impl Chain {
	pub fn new(start_pos: V2, segment_length: f32, segment_count: usize) -> Self {
		assert!(segment_count >= 1);
		Self {
			start_pos,
			segment_length,
			segment_count,
			flexibility: 1.0,
			skel: Skeleton::default(),
		}
	}

	pub fn with_flexibility(mut self, flexibility: f32) -> Self {
		self.flexibility = flexibility;
		self
	}

	pub fn flexibility(&self) -> f32 {
		self.flexibility
	}

	pub fn set_flexibility(&mut self, flexibility: f32) {
		self.flexibility = flexibility;
	}

	pub fn skeleton(&self) -> &Skeleton {
		&self.skel
	}

	pub fn register(&mut self, world: &mut World) {
		for i in 0..=self.segment_count {
			let step = i as f32 * self.segment_length / 2.;
			self.skel
				.add_point(self.start_pos + V2::new(step, step), i == 0);
		}
		for i in 0..self.segment_count {
			self.skel
				.add_constraint(i, i + 1, self.segment_length, material::CLOTH.tear_mult);
		}
		self.skel.register(world);
	}

	// soft pull of every point pair (i, i+2) back toward the flexed rest
	// span, a fraction at a time
	pub fn custom_physics(&self, world: &mut World) {
		if self.flexibility >= 1.0 {
			return;
		}
		let rest = 2. * self.segment_length * self.flexibility;
		let rest2 = rest * rest;
		let k = (1. - self.flexibility) * 0.1;
		for i in 0..self.segment_count.saturating_sub(1) {
			let a = self.skel.global(i);
			let b = self.skel.global(i + 2);
			let d = world.point(b).pos - world.point(a).pos;
			let dist2 = d.norm_squared();
			if dist2 <= rest2 {
				continue;
			}
			let correct = d * ((dist2 - rest2) / dist2 * k);
			if !world.point(a).pinned {
				world.point_mut(a).pos += correct * 0.5;
			}
			if !world.point(b).pinned {
				world.point_mut(b).pos -= correct * 0.5;
			}
		}
	}

	pub fn render(&self) -> Vec<PrPrimitive> {
		vec![PrPrimitive::Polyline {
			ids: (0..=self.segment_count).map(|i| self.skel.global(i)).collect(),
			closed: false,
		}]
	}
}
