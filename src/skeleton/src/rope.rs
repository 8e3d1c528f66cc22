use crate::skeleton::Skeleton;
use protocol::pr_model::PrPrimitive;
use verlet::material;
use verlet::world::World;
use verlet::V2;

pub struct Rope {
	start_pos: V2,
	segment_length: f32,
	segment_count: usize,
	pin_first: bool,
	pin_last: bool,
	horizontal: bool,
	skel: Skeleton,
}

impl Rope {
	pub fn new(start_pos: V2, segment_length: f32, segment_count: usize) -> Self {
		assert!(segment_count >= 2);
		Self {
			start_pos,
			segment_length,
			segment_count,
			pin_first: true,
			pin_last: false,
			horizontal: false,
			skel: Skeleton::default(),
		}
	}

	pub fn with_pin_first(mut self, pin: bool) -> Self {
		self.pin_first = pin;
		self
	}

	pub fn with_pin_last(mut self, pin: bool) -> Self {
		self.pin_last = pin;
		self
	}

	pub fn with_horizontal(mut self) -> Self {
		self.horizontal = true;
		self
	}

	pub fn skeleton(&self) -> &Skeleton {
		&self.skel
	}

	pub fn register(&mut self, world: &mut World) {
		let axis = if self.horizontal {
			V2::new(self.segment_length, 0.)
		} else {
			V2::new(0., self.segment_length)
		};
		for i in 0..self.segment_count {
			let pinned = (self.pin_first && i == 0)
				|| (self.pin_last && i == self.segment_count - 1);
			self.skel.add_point(self.start_pos + axis * i as f32, pinned);
		}
		for i in 0..self.segment_count - 1 {
			self.skel
				.add_constraint(i, i + 1, self.segment_length, material::ROPE.tear_mult);
		}
		self.skel.register(world);
	}

	pub fn render(&self) -> Vec<PrPrimitive> {
		vec![PrPrimitive::Polyline {
			ids: (0..self.segment_count).map(|i| self.skel.global(i)).collect(),
			closed: false,
		}]
	}
}
