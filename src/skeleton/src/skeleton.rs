use verlet::constraint::Constraint;
use verlet::face::Face;
use verlet::point::Point;
use verlet::world::World;
use verlet::V2;

// local, zero-based point space that splices itself into the shared world;
// after registration the skeleton keeps only its offset bookkeeping
#[derive(Default)]
pub struct Skeleton {
	points: Vec<Point>,
	constraints: Vec<Constraint>,
	faces: Vec<Face>,
	start: usize,
	point_count: usize,
	constraint_count: usize,
	face_count: usize,
	registered: bool,
}

impl Skeleton {
	pub fn add_point(&mut self, pos: V2, pinned: bool) -> usize {
		self.points.push(Point::new(pos, pinned));
		self.points.len() - 1
	}

	pub fn add_constraint(&mut self, i1: usize, i2: usize, rest_length: f32, tear_mult: f32) {
		assert!(
			i1 < self.points.len() && i2 < self.points.len(),
			"constraint outside the local point space"
		);
		self.constraints.push(Constraint::new(i1, i2, rest_length, tear_mult));
	}

	pub fn add_face(&mut self, ids: [usize; 3], uvs: [[f32; 2]; 3]) {
		assert!(
			ids.iter().all(|&id| id < self.points.len()),
			"face outside the local point space"
		);
		self.faces.push(Face::new(ids, uvs));
	}

	pub fn point_pos(&self, local: usize) -> V2 {
		self.points[local].pos
	}

	// splice the local space into the world at the next free index
	pub fn register(&mut self, world: &mut World) {
		assert!(!self.registered, "skeleton registered twice");
		self.start = world.point_count();
		self.point_count = self.points.len();
		self.constraint_count = self.constraints.len();
		self.face_count = self.faces.len();
		eprintln!(
			"INFO: register skeleton: {} points at {}, {} constraints, {} faces",
			self.point_count, self.start, self.constraint_count, self.face_count
		);
		for p in self.points.drain(..) {
			world.register_point(p);
		}
		for mut c in self.constraints.drain(..) {
			c.i1 += self.start;
			c.i2 += self.start;
			world.register_constraint(c);
		}
		for mut f in self.faces.drain(..) {
			for id in f.ids.iter_mut() {
				*id += self.start;
			}
			world.register_face(f);
		}
		self.registered = true;
	}

	pub fn registered(&self) -> bool {
		self.registered
	}

	pub fn start(&self) -> usize {
		self.start
	}

	pub fn point_count(&self) -> usize {
		if self.registered {
			self.point_count
		} else {
			self.points.len()
		}
	}

	pub fn constraint_count(&self) -> usize {
		if self.registered {
			self.constraint_count
		} else {
			self.constraints.len()
		}
	}

	pub fn face_count(&self) -> usize {
		if self.registered {
			self.face_count
		} else {
			self.faces.len()
		}
	}

	pub fn global(&self, local: usize) -> usize {
		self.start + local
	}

	pub fn last_point(&self) -> usize {
		self.start + self.point_count() - 1
	}
}
