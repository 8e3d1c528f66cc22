use rand::thread_rng;

use crate::config::Config;
use crate::constraint::Constraint;
use crate::face::Face;
use crate::floor::Floor;
use crate::point::Point;
use crate::V2;
use protocol::pr_model::{PrConstraint, PrFace, PrFloorSegment, PrModel, PrPoint};

// the shared point space: every point, constraint and face in the simulation
// lives here and is addressed by index; skeletons splice themselves in at an
// offset and the index space is append-only
pub struct World {
	config: Config,
	points: Vec<Point>,
	constraints: Vec<Constraint>,
	faces: Vec<Face>,
	floor: Floor,
}

impl Default for World {
	fn default() -> Self {
		Self::new(Config::default())
	}
}

impl World {
	pub fn new(config: Config) -> Self {
		let floor = Floor::generate(&config, &mut thread_rng());
		Self {
			config,
			points: Vec::new(),
			constraints: Vec::new(),
			faces: Vec::new(),
			floor,
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn constraints(&self) -> &[Constraint] {
		&self.constraints
	}

	pub fn faces(&self) -> &[Face] {
		&self.faces
	}

	pub fn floor(&self) -> &Floor {
		&self.floor
	}

	pub fn point(&self, id: usize) -> &Point {
		&self.points[id]
	}

	pub fn point_mut(&mut self, id: usize) -> &mut Point {
		&mut self.points[id]
	}

	pub fn point_count(&self) -> usize {
		self.points.len()
	}

	pub fn create_point(&mut self, pos: V2, pinned: bool) -> usize {
		self.register_point(Point::new(pos, pinned))
	}

	pub fn register_point(&mut self, p: Point) -> usize {
		self.points.push(p);
		self.points.len() - 1
	}

	pub fn create_constraint(
		&mut self,
		i1: usize,
		i2: usize,
		rest_length: f32,
		tear_mult: f32,
	) -> Constraint {
		self.register_constraint(Constraint::new(i1, i2, rest_length, tear_mult))
	}

	pub fn register_constraint(&mut self, c: Constraint) -> Constraint {
		assert!(
			c.i1 < self.points.len() && c.i2 < self.points.len(),
			"constraint outside the point space"
		);
		self.constraints.push(c);
		c
	}

	pub fn create_face(&mut self, ids: [usize; 3], uvs: [[f32; 2]; 3]) -> Face {
		self.register_face(Face::new(ids, uvs))
	}

	pub fn register_face(&mut self, f: Face) -> Face {
		assert!(
			f.ids.iter().all(|&id| id < self.points.len()),
			"face outside the point space"
		);
		self.faces.push(f);
		f
	}

	// closest point strictly within radius, earliest index wins ties
	pub fn find_nearest(&self, pos: V2, radius: f32) -> Option<usize> {
		let mut nearest = None;
		let mut min2 = radius * radius;
		for (id, p) in self.points.iter().enumerate() {
			let d2 = (p.pos - pos).norm_squared();
			if d2 < min2 {
				min2 = d2;
				nearest = Some(id);
			}
		}
		nearest
	}

	pub fn apply_forces(&mut self, gravity: V2) {
		for p in self.points.iter_mut() {
			if p.pinned {
				continue;
			}
			p.pos += gravity;
		}
	}

	pub fn integrate(&mut self) {
		let friction = self.config.friction;
		for p in self.points.iter_mut() {
			if p.pinned {
				continue;
			}
			let v = (p.pos - p.ppos) * friction;
			p.ppos = p.pos;
			p.pos += v;
		}
	}

	// Gauss-Seidel relaxation: constraints run in insertion order and each
	// pass sees the previous pass's corrected positions
	pub fn satisfy_constraints(&mut self) {
		for _ in 0..self.config.constraint_iterations {
			let mut k = 0;
			while k < self.constraints.len() {
				if self.satisfy_one(k) {
					k += 1;
				}
				// on tear the entry at k is already the next constraint
			}
		}
	}

	// returns false when the constraint tore and was removed
	fn satisfy_one(&mut self, k: usize) -> bool {
		let c = self.constraints[k];
		let p1 = self.points[c.i1];
		let p2 = self.points[c.i2];
		let d = p2.pos - p1.pos;
		let dist2 = d.norm_squared();
		if dist2 == 0. {
			// degenerate pair, heals once the positions diverge
			return true;
		}
		if c.tearable() && dist2 > c.tear_length * c.tear_length {
			self.tear(k);
			return false;
		}
		if c.tearable() && dist2 <= c.rest_length * c.rest_length {
			// tearable edges give no pushback while slack
			return true;
		}
		let dist = dist2.sqrt();
		let stiffness = if dist > c.rest_length {
			let stretch = dist / c.rest_length;
			(1.0 - (stretch - 1.0) * 0.3).clamp(0.7, 1.1)
		} else {
			// struts resist compression, weakly
			0.1
		};
		let correct = d * ((dist - c.rest_length) / dist * stiffness);
		match (p1.pinned, p2.pinned) {
			(false, false) => {
				self.points[c.i1].pos += correct * 0.5;
				self.points[c.i2].pos -= correct * 0.5;
			}
			// a single free end absorbs the half its anchor cannot take
			(true, false) => self.points[c.i2].pos -= correct * 2.0,
			(false, true) => self.points[c.i1].pos += correct * 2.0,
			(true, true) => {}
		}
		true
	}

	fn tear(&mut self, k: usize) {
		let c = self.constraints[k];
		self.faces.retain(|f| !f.spans(c.i1, c.i2));
		self.constraints.remove(k);
	}

	pub fn apply_boundary_conditions(&mut self) {
		for p in self.points.iter_mut() {
			if p.pinned {
				continue;
			}
			let floor_y = self.floor.y_at(p.pos[0]);
			if p.pos[1] >= floor_y {
				p.pos[1] = floor_y;
				p.ppos[1] = floor_y;
			}
		}
	}

	pub fn update(&mut self) {
		self.integrate();
		self.satisfy_constraints();
	}

	pub fn floor_y_at(&self, x: f32) -> f32 {
		self.floor.y_at(x)
	}

	// the new profile is built complete, then swapped in whole
	pub fn regenerate_floor(&mut self) {
		self.floor = Floor::generate(&self.config, &mut thread_rng());
	}

	pub fn resize_viewport(&mut self, width: f32, height: f32) {
		eprintln!("INFO: viewport {}x{}", width, height);
		self.config.viewport = [width, height];
		self.regenerate_floor();
	}

	pub fn pr_model(&self) -> PrModel {
		let points = self
			.points
			.iter()
			.map(|p| PrPoint {
				pos: [p.pos[0], p.pos[1]],
				pinned: p.pinned,
			})
			.collect();
		let constraints = self
			.constraints
			.iter()
			.map(|c| PrConstraint { ends: [c.i1, c.i2] })
			.collect();
		let faces = self
			.faces
			.iter()
			.map(|f| PrFace {
				ids: f.ids,
				uvs: f.uvs,
			})
			.collect();
		let floor = self
			.floor
			.segments()
			.iter()
			.map(|s| PrFloorSegment {
				x1: s.x1,
				x2: s.x2,
				y1: s.y1,
				y2: s.y2,
			})
			.collect();
		PrModel {
			points,
			constraints,
			faces,
			floor,
		}
	}
}
