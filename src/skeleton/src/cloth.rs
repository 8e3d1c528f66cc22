use crate::skeleton::Skeleton;
use protocol::pr_model::PrPrimitive;
use verlet::material;
use verlet::world::World;
use verlet::V2;

// rows x columns grid with structural constraints only; bending resistance
// comes from the stretch-limited grid edges, not from shear diagonals
pub struct Cloth {
	start_pos: V2,
	rows: usize,
	columns: usize,
	segment_length: f32,
	pin_top: bool,
	pin_top_left: bool,
	pin_top_right: bool,
	pin_top_center: bool,
	skel: Skeleton,
}

impl Cloth {
	pub fn new(start_pos: V2, rows: usize, columns: usize, segment_length: f32) -> Self {
		assert!(rows >= 2 && columns >= 2);
		Self {
			start_pos,
			rows,
			columns,
			segment_length,
			pin_top: true,
			pin_top_left: false,
			pin_top_right: false,
			pin_top_center: false,
			skel: Skeleton::default(),
		}
	}

	pub fn with_pin_top(mut self, pin: bool) -> Self {
		self.pin_top = pin;
		self
	}

	pub fn with_pin_top_left(mut self, pin: bool) -> Self {
		self.pin_top_left = pin;
		self
	}

	pub fn with_pin_top_right(mut self, pin: bool) -> Self {
		self.pin_top_right = pin;
		self
	}

	pub fn with_pin_top_center(mut self, pin: bool) -> Self {
		self.pin_top_center = pin;
		self
	}

	pub fn skeleton(&self) -> &Skeleton {
		&self.skel
	}

	pub fn register(&mut self, world: &mut World) {
		let rows = self.rows;
		let columns = self.columns;
		let idx = move |i: usize, j: usize| i * columns + j;
		let uv = move |i: usize, j: usize| {
			[
				j as f32 / (columns - 1) as f32,
				i as f32 / (rows - 1) as f32,
			]
		};

		for i in 0..rows {
			for j in 0..columns {
				let mut pinned = false;
				if self.pin_top && i == 0 {
					pinned = true;
				}
				if self.pin_top_left && i == 0 && j == 0 {
					pinned = true;
				}
				if self.pin_top_right && i == 0 && j == columns - 1 {
					pinned = true;
				}
				if self.pin_top_center && i == 0 && j == columns / 2 {
					pinned = true;
				}
				self.skel.add_point(
					self.start_pos
						+ V2::new(j as f32, i as f32) * self.segment_length,
					pinned,
				);
			}
		}

		// two faces per quad, the second wound the other way so both show
		// the same side under the screen-space convention
		for i in 0..rows - 1 {
			for j in 0..columns - 1 {
				self.skel.add_face(
					[idx(i, j), idx(i, j + 1), idx(i + 1, j + 1)],
					[uv(i, j), uv(i, j + 1), uv(i + 1, j + 1)],
				);
				self.skel.add_face(
					[idx(i + 1, j + 1), idx(i + 1, j), idx(i, j)],
					[uv(i + 1, j + 1), uv(i + 1, j), uv(i, j)],
				);
			}
		}

		for i in 0..rows {
			for j in 0..columns - 1 {
				self.skel.add_constraint(
					idx(i, j),
					idx(i, j + 1),
					self.segment_length,
					material::CLOTH.tear_mult,
				);
			}
		}
		for i in 0..rows - 1 {
			for j in 0..columns {
				self.skel.add_constraint(
					idx(i, j),
					idx(i + 1, j),
					self.segment_length,
					material::CLOTH.tear_mult,
				);
			}
		}

		self.skel.register(world);
	}

	// the cloth surface is drawn straight from the world's faces
	pub fn render(&self) -> Vec<PrPrimitive> {
		Vec::new()
	}
}
