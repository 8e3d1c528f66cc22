use rand::Rng;

use crate::config::Config;

// piecewise-linear terrain, x-monotonic, gaps between segments are pits

#[derive(Clone, Copy)]
pub struct FloorSegment {
	pub x1: f32,
	pub x2: f32,
	pub y1: f32,
	pub y2: f32,
}

impl FloorSegment {
	pub fn contains(&self, x: f32) -> bool {
		x >= self.x1 && x <= self.x2
	}

	pub fn y_at(&self, x: f32) -> f32 {
		let t = (x - self.x1) / (self.x2 - self.x1);
		self.y1 + (self.y2 - self.y1) * t
	}
}

pub struct Floor {
	base_y: f32,
	segments: Vec<FloorSegment>,
}

impl Floor {
	pub fn flat(base_y: f32) -> Self {
		Self {
			base_y,
			segments: Vec::new(),
		}
	}

	pub fn generate(config: &Config, rng: &mut impl Rng) -> Self {
		let base_y = config.base_y();
		if !config.show_floor {
			return Self::flat(base_y);
		}
		let width = config.viewport[0];
		// height band around base_y, screen y grows downward
		let y_hi = base_y - 120.;
		let y_lo = base_y + 40.;

		let mut segments = Vec::new();
		let mut y = base_y;
		let mut x = 0f32;
		while x < width {
			let next_x = (x + 100. + rng.gen::<f32>() * 50.).min(width);
			let roll: f32 = rng.gen();
			if roll < 0.3 {
				// step up or down
				y = (y + (rng.gen::<f32>() - 0.5) * 80.).clamp(y_hi, y_lo);
				segments.push(FloorSegment {
					x1: x,
					x2: next_x,
					y1: y,
					y2: y,
				});
			} else if roll < 0.5 {
				// ramp
				let y2 = (y + (rng.gen::<f32>() - 0.5) * 100.).clamp(y_hi, y_lo);
				segments.push(FloorSegment {
					x1: x,
					x2: next_x,
					y1: y,
					y2,
				});
				y = y2;
			} else if roll < 0.65 {
				// pit: shoulder, gap, independent height on the far side
				let pit_w = 50. + rng.gen::<f32>() * 80.;
				let lip = x + (next_x - x - pit_w).max(0.) * rng.gen::<f32>();
				if lip > x {
					segments.push(FloorSegment {
						x1: x,
						x2: lip,
						y1: y,
						y2: y,
					});
				}
				let far = lip + pit_w;
				if far < next_x {
					y = (base_y + (rng.gen::<f32>() - 0.5) * 80.).clamp(y_hi, y_lo);
					segments.push(FloorSegment {
						x1: far,
						x2: next_x,
						y1: y,
						y2: y,
					});
				}
			} else {
				// flat run
				segments.push(FloorSegment {
					x1: x,
					x2: next_x,
					y1: y,
					y2: y,
				});
			}
			x = next_x;
		}
		Self { base_y, segments }
	}

	pub fn base_y(&self) -> f32 {
		self.base_y
	}

	pub fn segments(&self) -> &[FloorSegment] {
		&self.segments
	}

	pub fn y_at(&self, x: f32) -> f32 {
		for seg in self.segments.iter() {
			if seg.contains(x) {
				return seg.y_at(x);
			}
		}
		// inside a pit (or with the floor disabled) bodies rest at ground level
		self.base_y
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn config() -> Config {
		Config::default().with_viewport(1000., 600.)
	}

	#[test]
	fn segments_are_x_monotonic() {
		for seed in 0..16 {
			let mut rng = StdRng::seed_from_u64(seed);
			let floor = Floor::generate(&config(), &mut rng);
			let segs = floor.segments();
			assert!(!segs.is_empty());
			for seg in segs {
				assert!(seg.x1 < seg.x2);
				assert!(seg.x1 >= 0. && seg.x2 <= 1000.);
			}
			for pair in segs.windows(2) {
				assert!(pair[1].x1 >= pair[0].x2);
			}
		}
	}

	#[test]
	fn y_defined_and_bounded_everywhere() {
		let config = config();
		let mut rng = StdRng::seed_from_u64(3);
		let floor = Floor::generate(&config, &mut rng);
		let base_y = config.base_y();
		let mut x = 0f32;
		while x < 1000. {
			let y = floor.y_at(x);
			assert!(y.is_finite());
			assert!(y >= base_y - 120. - 1e-3);
			assert!(y <= base_y + 40. + 1e-3);
			x += 1.;
		}
	}

	#[test]
	fn pit_falls_back_to_base() {
		let floor = Floor {
			base_y: 540.,
			segments: vec![
				FloorSegment {
					x1: 0.,
					x2: 100.,
					y1: 500.,
					y2: 520.,
				},
				FloorSegment {
					x1: 200.,
					x2: 300.,
					y1: 560.,
					y2: 560.,
				},
			],
		};
		// lerp inside a segment
		assert!((floor.y_at(50.) - 510.).abs() < 1e-4);
		// the 100..200 gap is a pit
		assert_eq!(floor.y_at(150.), 540.);
	}

	#[test]
	fn disabled_floor_is_flat() {
		let config = Config::default().with_floor(false);
		let mut rng = StdRng::seed_from_u64(0);
		let floor = Floor::generate(&config, &mut rng);
		assert!(floor.segments().is_empty());
		assert_eq!(floor.y_at(321.), config.base_y());
	}
}
