// simulation knobs, one explicit value threaded through the constructors

#[derive(Clone, Copy)]
pub struct Config {
	pub gravity: f32,
	pub friction: f32,
	pub constraint_iterations: usize,
	pub point_spacing: f32,
	pub show_floor: bool,
	// percent of the viewport height
	pub floor_offset: f32,
	pub pick_radius: f32,
	pub viewport: [f32; 2],
}

impl Default for Config {
	fn default() -> Self {
		Self {
			gravity: 0.5,
			friction: 0.5,
			constraint_iterations: 8,
			point_spacing: 20.,
			show_floor: true,
			floor_offset: 10.,
			pick_radius: 20.,
			viewport: [1280., 720.],
		}
	}
}

impl Config {
	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_friction(mut self, friction: f32) -> Self {
		self.friction = friction;
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.constraint_iterations = iterations;
		self
	}

	pub fn with_point_spacing(mut self, spacing: f32) -> Self {
		self.point_spacing = spacing;
		self
	}

	pub fn with_floor(mut self, show: bool) -> Self {
		self.show_floor = show;
		self
	}

	pub fn with_floor_offset(mut self, percent: f32) -> Self {
		self.floor_offset = percent;
		self
	}

	pub fn with_pick_radius(mut self, radius: f32) -> Self {
		self.pick_radius = radius;
		self
	}

	pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
		self.viewport = [width, height];
		self
	}

	// reference ground height, also the fallback inside pits
	pub fn base_y(&self) -> f32 {
		self.viewport[1] - self.viewport[1] * self.floor_offset / 100.
	}
}
